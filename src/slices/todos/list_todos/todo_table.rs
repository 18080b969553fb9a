use dioxus::prelude::*;
use time::OffsetDateTime;

use super::summary::{is_overdue, sort_todos, SortKey};
use crate::core::components::{
    BadgeVariant, SortDirection, SortableHeader, TableActionButton, TableActions, TableBadge,
};
use crate::slices::todos::shared::types::{Todo, TodoPriority, TodoStatus};

fn status_icon(status: TodoStatus) -> &'static str {
    match status {
        TodoStatus::Completed => "✅",
        TodoStatus::InProgress => "⏳",
        TodoStatus::Pending => "⭕",
    }
}

fn priority_variant(priority: TodoPriority) -> BadgeVariant {
    match priority {
        TodoPriority::High => BadgeVariant::Error,
        TodoPriority::Medium => BadgeVariant::Warning,
        TodoPriority::Low => BadgeVariant::Info,
    }
}

#[component]
pub fn TodoTable(
    todos: Vec<Todo>,
    on_toggle: EventHandler<i32>,
    on_edit: EventHandler<Todo>,
    on_delete: EventHandler<i32>,
) -> Element {
    let mut sort = use_signal(|| None::<(SortKey, SortDirection)>);

    if todos.is_empty() {
        return rsx! {
            div { class: "empty-state",
                div { class: "empty-icon", "📝" }
                p { "No todos yet. Create one to get started!" }
            }
        };
    }

    let mut rows = todos;
    if let Some((key, direction)) = sort() {
        sort_todos(&mut rows, key, direction);
    }

    let direction_for = move |key: SortKey| match sort() {
        Some((current, direction)) if current == key => Some(direction),
        _ => None,
    };
    let mut cycle = move |key: SortKey| {
        let next = match sort() {
            Some((current, direction)) if current == key => direction.flipped(),
            _ => SortDirection::Asc,
        };
        sort.set(Some((key, next)));
    };

    let today = OffsetDateTime::now_utc().date();

    rsx! {
        div { class: "table-wrap",
            table { class: "table",
                thead {
                    tr {
                        th { class: "col-status", "Status" }
                        th {
                            SortableHeader {
                                label: "Title",
                                direction: direction_for(SortKey::Title),
                                onclick: move |_| cycle(SortKey::Title),
                            }
                        }
                        th { "Description" }
                        th { "Priority" }
                        th {
                            SortableHeader {
                                label: "Due Date",
                                direction: direction_for(SortKey::DueDate),
                                onclick: move |_| cycle(SortKey::DueDate),
                            }
                        }
                        th { class: "col-actions", "Actions" }
                    }
                }
                tbody {
                    for todo in rows {
                        TodoRow {
                            key: "{todo.id}",
                            todo: todo.clone(),
                            overdue: todo.due_date.as_deref().is_some_and(|due| is_overdue(due, today)),
                            on_toggle,
                            on_edit,
                            on_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TodoRow(
    todo: Todo,
    overdue: bool,
    on_toggle: EventHandler<i32>,
    on_edit: EventHandler<Todo>,
    on_delete: EventHandler<i32>,
) -> Element {
    let id = todo.id;
    let completed = todo.status == TodoStatus::Completed;
    let description = todo
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "-".to_string());
    let due = todo.due_date.clone().filter(|d| !d.trim().is_empty());
    let edit_target = todo.clone();

    rsx! {
        tr { class: if completed { "row-done" } else { "" },
            td { class: "col-status",
                button { class: "btn btn-ghost btn-sm",
                    r#type: "button",
                    title: "Toggle status",
                    onclick: move |_| on_toggle.call(id),
                    "{status_icon(todo.status)}"
                }
            }
            td { class: if completed { "title done" } else { "title" }, "{todo.title}" }
            td { class: "muted", "{description}" }
            td {
                TableBadge { variant: priority_variant(todo.priority), "{todo.priority.label()}" }
            }
            td {
                match due {
                    Some(due) => rsx! {
                        span { class: if overdue { "text-error" } else { "" },
                            "{due}"
                            if overdue {
                                " (Overdue)"
                            }
                        }
                    },
                    None => rsx! { span { class: "muted", "-" } },
                }
            }
            td { class: "col-actions",
                TableActions {
                    TableActionButton {
                        title: "Edit",
                        onclick: move |_| on_edit.call(edit_target.clone()),
                        "✏️"
                    }
                    TableActionButton {
                        title: "Delete",
                        danger: true,
                        onclick: move |_| on_delete.call(id),
                        "🗑️"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_badges() {
        assert_eq!(priority_variant(TodoPriority::High), BadgeVariant::Error);
        assert_eq!(priority_variant(TodoPriority::Medium), BadgeVariant::Warning);
        assert_eq!(priority_variant(TodoPriority::Low), BadgeVariant::Info);
    }

    #[test]
    fn status_icons_are_distinct() {
        let icons: Vec<_> = TodoStatus::ALL.into_iter().map(status_icon).collect();
        assert_eq!(icons, vec!["⭕", "⏳", "✅"]);
    }
}
