//! Path based page table. Each route module exposes a `PATH` and a `render`.

use dioxus::prelude::*;

pub mod index;
pub mod settings;
pub mod todos;

type Render = fn() -> Element;

const ROUTES: &[(&str, Render)] = &[
    (index::PATH, index::render),
    (todos::PATH, todos::render),
    (settings::PATH, settings::render),
];

/// Registered path for `path`; unknown paths land on the dashboard.
pub fn resolve(path: &str) -> &'static str {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        other => other,
    };
    ROUTES
        .iter()
        .find(|(route, _)| *route == trimmed)
        .map(|(route, _)| *route)
        .unwrap_or(index::PATH)
}

pub fn render(path: &str) -> Element {
    let resolved = resolve(path);
    if resolved != path {
        tracing::debug!(path, resolved, "route fallback");
    }
    ROUTES
        .iter()
        .find(|(route, _)| *route == resolved)
        .map(|(_, render)| render())
        .unwrap_or_else(index::render)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve_to_themselves() {
        assert_eq!(resolve("/"), "/");
        assert_eq!(resolve("/todos"), "/todos");
        assert_eq!(resolve("/todos/"), "/todos");
        assert_eq!(resolve("/settings"), "/settings");
    }

    #[test]
    fn unknown_paths_fall_back_to_dashboard() {
        assert_eq!(resolve("/nope"), "/");
        assert_eq!(resolve(""), "/");
    }

    #[test]
    fn every_nav_entry_has_a_route() {
        let mut items = vec![crate::nav::dashboard_item(), crate::nav::settings_item()];
        items.extend(crate::nav::nav_items());
        for item in items {
            let path = item.path.unwrap_or("/");
            assert_eq!(resolve(path), path);
        }
    }
}
