use crate::nav::NavItem;

pub fn config() -> NavItem {
    NavItem::new("todos", "Todos", "/todos", "✅")
}
