/// `user-profiles` -> `UserProfiles`. Each dash-separated word gets its first
/// character upper-cased; the rest of the word is kept as is.
pub fn to_pascal_case(value: &str) -> String {
    value
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// `user-profiles` -> `userProfiles`.
pub fn to_camel_case(value: &str) -> String {
    let pascal = to_pascal_case(value);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `user-profiles` -> `user_profiles`, usable as a module or table name.
/// Lower-cased so `Notes` and `notes` land in the same module.
pub fn to_snake_case(value: &str) -> String {
    value.to_lowercase().replace('-', "_")
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "gen",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Whether `ident` is reserved and cannot name a module.
pub fn is_rust_keyword(ident: &str) -> bool {
    RUST_KEYWORDS.contains(&ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_kebab_case() {
        assert_eq!(to_pascal_case("todos"), "Todos");
        assert_eq!(to_pascal_case("user-profiles"), "UserProfiles");
        assert_eq!(to_pascal_case("manage-theme"), "ManageTheme");
        assert_eq!(to_camel_case("user-profiles"), "userProfiles");
        assert_eq!(to_camel_case("list"), "list");
        assert_eq!(to_snake_case("user-profiles"), "user_profiles");
        assert_eq!(to_snake_case("Notes"), "notes");
        assert_eq!(to_snake_case("User-Profiles"), "user_profiles");
    }

    #[test]
    fn flags_reserved_words() {
        assert!(is_rust_keyword("type"));
        assert!(is_rust_keyword("match"));
        assert!(!is_rust_keyword("list"));
        assert!(!is_rust_keyword("manage_theme"));
    }

    #[test]
    fn keeps_inner_capitals_and_skips_empty_words() {
        assert_eq!(to_pascal_case("api-URLs"), "ApiURLs");
        assert_eq!(to_pascal_case("a--b"), "AB");
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_camel_case(""), "");
    }
}
