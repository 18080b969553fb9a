//! Scaffolds a CRUD vertical slice (types, store, hooks, list page, nav config,
//! route) from a kebab-case name and a list of use cases.
//!
//! Generation is a single pass of directory creation and file writes. Existing
//! files are overwritten and nothing is rolled back on failure.

pub mod case;
pub mod templates;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StarterError};

pub use case::{is_rust_keyword, to_camel_case, to_pascal_case, to_snake_case};
use templates::{render, SliceNames};

pub const USAGE: &str = "create-slice <slice-name> <use-case-1> [use-case-2] ...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseCase {
    List,
    Create,
    Update,
    Delete,
    Custom(String),
}

impl UseCase {
    pub fn parse(value: &str) -> Self {
        match value {
            "list" => Self::List,
            "create" => Self::Create,
            "update" => Self::Update,
            "delete" => Self::Delete,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Custom(name) => name,
        }
    }

    fn hook_template(&self) -> &'static str {
        match self {
            Self::List => templates::HOOK_LIST,
            Self::Create => templates::HOOK_CREATE,
            Self::Update => templates::HOOK_UPDATE,
            Self::Delete => templates::HOOK_DELETE,
            Self::Custom(_) => templates::HOOK_GENERIC,
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceRequest {
    pub name: String,
    pub use_cases: Vec<UseCase>,
}

impl SliceRequest {
    /// Positional arguments: slice name, then one or more use cases.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        if args.len() < 2 {
            return Err(StarterError::Validation(
                "Missing required arguments".to_string(),
            ));
        }
        let name = args[0].as_ref().trim();
        if name.is_empty() {
            return Err(StarterError::Validation(
                "Slice name must not be empty".to_string(),
            ));
        }
        if is_rust_keyword(&to_snake_case(name)) {
            return Err(StarterError::Validation(format!(
                "Slice name '{name}' is a reserved Rust keyword"
            )));
        }

        // Repeats collapse onto the first occurrence, keeping order.
        let mut use_cases: Vec<UseCase> = Vec::new();
        for arg in &args[1..] {
            let use_case = UseCase::parse(arg.as_ref().trim());
            let module = to_snake_case(use_case.as_str());
            if module.is_empty() || is_rust_keyword(&module) {
                return Err(StarterError::Validation(format!(
                    "Use case '{}' cannot be used as a module name",
                    use_case.as_str()
                )));
            }
            if use_cases
                .iter()
                .all(|seen| to_snake_case(seen.as_str()) != module)
            {
                use_cases.push(use_case);
            }
        }
        Ok(Self {
            name: name.to_string(),
            use_cases,
        })
    }

    pub fn has_list(&self) -> bool {
        self.use_cases.contains(&UseCase::List)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    SliceModule,
    SharedModule,
    Types,
    Database,
    UseCaseModule(String),
    Hook(String),
    ListPage,
    Config,
    Route,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub artifact: Artifact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSlice {
    pub slice_dir: PathBuf,
    pub route_file: PathBuf,
    pub files: Vec<GeneratedFile>,
}

impl GeneratedSlice {
    pub fn count(&self, pred: impl Fn(&Artifact) -> bool) -> usize {
        self.files.iter().filter(|file| pred(&file.artifact)).count()
    }
}

pub fn hook_name(use_case: &UseCase, names: &SliceNames) -> String {
    format!("use_{}_{}", to_snake_case(use_case.as_str()), names.snake)
}

pub struct SliceGenerator {
    root: PathBuf,
}

impl SliceGenerator {
    /// `root` is the project directory containing `src/`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn slice_dir(&self, names: &SliceNames) -> PathBuf {
        self.root.join("src").join("slices").join(&names.snake)
    }

    pub fn generate(&self, request: &SliceRequest) -> Result<GeneratedSlice> {
        let names = SliceNames::new(&request.name);
        let slice_dir = self.slice_dir(&names);
        let shared_dir = slice_dir.join("shared");
        let routes_dir = self.root.join("src").join("routes");

        create_dir(&shared_dir)?;
        create_dir(&routes_dir)?;
        for use_case in &request.use_cases {
            create_dir(&slice_dir.join(to_snake_case(use_case.as_str())))?;
        }
        tracing::info!(slice = %request.name, dir = %slice_dir.display(), "created directories");

        let mut files = Vec::new();
        let mut emit = |path: PathBuf, artifact: Artifact, content: String| -> Result<()> {
            write_file(&path, &content)?;
            files.push(GeneratedFile { path, artifact });
            Ok(())
        };

        emit(
            shared_dir.join("types.rs"),
            Artifact::Types,
            render(templates::TYPES, &names, None),
        )?;
        emit(
            shared_dir.join("database.rs"),
            Artifact::Database,
            render(templates::DATABASE, &names, None),
        )?;
        emit(
            shared_dir.join("mod.rs"),
            Artifact::SharedModule,
            render(templates::SHARED_MOD, &names, None),
        )?;

        for use_case in &request.use_cases {
            let dir = slice_dir.join(to_snake_case(use_case.as_str()));
            let hook = hook_name(use_case, &names);
            let tokens = Some((use_case.as_str(), hook.as_str()));

            emit(
                dir.join(format!("{hook}.rs")),
                Artifact::Hook(use_case.to_string()),
                render(use_case.hook_template(), &names, tokens),
            )?;

            let module_template = if *use_case == UseCase::List {
                emit(
                    dir.join(format!("list_{}.rs", names.snake)),
                    Artifact::ListPage,
                    render(templates::LIST_PAGE, &names, tokens),
                )?;
                templates::LIST_USE_CASE_MOD
            } else {
                templates::USE_CASE_MOD
            };
            emit(
                dir.join("mod.rs"),
                Artifact::UseCaseModule(use_case.to_string()),
                render(module_template, &names, tokens),
            )?;
        }

        emit(
            slice_dir.join("mod.rs"),
            Artifact::SliceModule,
            slice_module(request, &names),
        )?;
        emit(
            slice_dir.join("config.rs"),
            Artifact::Config,
            render(templates::CONFIG, &names, None),
        )?;

        let route_file = routes_dir.join(format!("{}.rs", names.snake));
        let route_template = if request.has_list() {
            templates::ROUTE_WITH_LIST
        } else {
            templates::ROUTE_PLACEHOLDER
        };
        emit(
            route_file.clone(),
            Artifact::Route,
            render(route_template, &names, None),
        )?;

        Ok(GeneratedSlice {
            slice_dir,
            route_file,
            files,
        })
    }
}

fn slice_module(request: &SliceRequest, names: &SliceNames) -> String {
    let mut out = String::from("pub mod config;\npub mod shared;\n");
    for use_case in &request.use_cases {
        out.push_str(&format!("pub mod {};\n", to_snake_case(use_case.as_str())));
    }

    if request.has_list() {
        out.push_str(&format!("\n// Main page\npub use list::List{};\n", names.pascal));
    }

    out.push_str(&format!(
        "\n// Types\npub use shared::types::{{Create{p}Input, Update{p}Input, {p}}};\n",
        p = names.pascal
    ));

    out.push_str("\n// Hooks\n");
    for use_case in &request.use_cases {
        out.push_str(&format!(
            "pub use {}::{};\n",
            to_snake_case(use_case.as_str()),
            hook_name(use_case, names)
        ));
    }
    out
}

/// Manual follow-up printed after a successful run.
pub fn next_steps(request: &SliceRequest) -> Vec<String> {
    let names = SliceNames::new(&request.name);
    vec![
        format!("Add a migration creating the `{}` table under migrations/", names.snake),
        format!("Register `pub mod {};` in src/slices/mod.rs and src/routes/mod.rs", names.snake),
        format!("Add {}::config::config() to nav_items() in src/nav.rs", names.snake),
        "Implement your components and database queries".to_string(),
        "Start building! 🚀".to_string(),
    ]
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| StarterError::Io(format!("{}: {e}", path.display())))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| StarterError::Io(format!("{}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_args_needs_name_and_use_case() {
        let err = SliceRequest::from_args(&["users"]).unwrap_err();
        assert!(matches!(err, StarterError::Validation(_)));
        assert!(SliceRequest::from_args::<&str>(&[]).is_err());

        let request = SliceRequest::from_args(&["users", "list", "archive"]).unwrap();
        assert_eq!(request.name, "users");
        assert_eq!(
            request.use_cases,
            vec![UseCase::List, UseCase::Custom("archive".to_string())]
        );
    }

    #[test]
    fn from_args_drops_repeats_and_rejects_keywords() {
        let request = SliceRequest::from_args(&["notes", "list", "create", "list"]).unwrap();
        assert_eq!(request.use_cases, vec![UseCase::List, UseCase::Create]);

        for keyword in ["type", "match", "use", "move", "ref"] {
            let err = SliceRequest::from_args(&["notes", keyword]).unwrap_err();
            assert!(matches!(err, StarterError::Validation(_)), "{keyword}");
        }
        assert!(SliceRequest::from_args(&["match", "list"]).is_err());
    }

    #[test]
    fn hook_names_follow_use_case_then_slice() {
        let names = SliceNames::new("user-profiles");
        assert_eq!(hook_name(&UseCase::List, &names), "use_list_user_profiles");
        assert_eq!(
            hook_name(&UseCase::Custom("manage-theme".to_string()), &names),
            "use_manage_theme_user_profiles"
        );
    }

    #[test]
    fn slice_module_exports_page_only_with_list() {
        let names = SliceNames::new("products");
        let with_list = SliceRequest::from_args(&["products", "list", "create"]).unwrap();
        let module = slice_module(&with_list, &names);
        assert!(module.contains("pub use list::ListProducts;"));
        assert!(module.contains("pub use create::use_create_products;"));

        let without = SliceRequest::from_args(&["products", "create"]).unwrap();
        assert!(!slice_module(&without, &names).contains("ListProducts"));
    }
}
