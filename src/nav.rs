use crate::slices::todos;

/// Sidebar entry. Items with `children` render as a collapsible group and
/// normally carry no `path` of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// camelCase key, used as the DOM id of the entry.
    pub key: &'static str,
    pub label: &'static str,
    pub path: Option<&'static str>,
    pub icon: &'static str,
    pub badge: Option<&'static str>,
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn new(
        key: &'static str,
        label: &'static str,
        path: &'static str,
        icon: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            path: Some(path),
            icon,
            badge: None,
            children: Vec::new(),
        }
    }

    pub fn group(
        key: &'static str,
        label: &'static str,
        icon: &'static str,
        children: Vec<NavItem>,
    ) -> Self {
        Self {
            key,
            label,
            path: None,
            icon,
            badge: None,
            children,
        }
    }

    pub fn with_badge(mut self, badge: &'static str) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn is_active(&self, current: &str) -> bool {
        self.path == Some(current)
    }

    pub fn has_active_child(&self, current: &str) -> bool {
        self.children
            .iter()
            .any(|child| child.is_active(current) || child.has_active_child(current))
    }
}

/// Slice entries shown in the sidebar. New slices add their `config()` here.
pub fn nav_items() -> Vec<NavItem> {
    vec![todos::config::config()]
}

/// Fixed entries around the slice entries.
pub fn dashboard_item() -> NavItem {
    NavItem::new("dashboard", "Dashboard", "/", "🏠")
}

pub fn settings_item() -> NavItem {
    NavItem::new("settings", "Settings", "/settings", "⚙")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_configs_populate_nav() {
        let items = nav_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Todos");
        assert_eq!(items[0].path, Some("/todos"));
    }

    #[test]
    fn active_child_is_found_recursively() {
        let nested = NavItem::group(
            "admin",
            "Admin",
            "🛠",
            vec![NavItem::group(
                "reports",
                "Reports",
                "📊",
                vec![NavItem::new("daily", "Daily", "/reports/daily", "📅")],
            )],
        )
        .with_badge("New");
        assert!(nested.has_active_child("/reports/daily"));
        assert!(!nested.has_active_child("/todos"));
        assert!(!nested.is_active("/reports/daily"));
        assert_eq!(nested.badge, Some("New"));
    }
}
