use dioxus::prelude::*;

use crate::core::components::{BaseDialog, DialogWidth};
use crate::slices::todos::shared::types::{
    CreateTodoInput, Todo, TodoPriority, TodoStatus, UpdateTodoInput,
};

pub const TITLE_MIN_LEN: usize = 3;

pub fn validate_title(title: &str) -> Option<&'static str> {
    if title.is_empty() {
        Some("Title is required")
    } else if title.chars().count() < TITLE_MIN_LEN {
        Some("Title must be at least 3 characters")
    } else {
        None
    }
}

/// Raw field values of the todo form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoFormValues {
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    pub due_date: String,
}

impl TodoFormValues {
    pub fn from_todo(todo: Option<&Todo>) -> Self {
        match todo {
            Some(todo) => Self {
                title: todo.title.clone(),
                description: todo.description.clone().unwrap_or_default(),
                status: todo.status,
                priority: todo.priority,
                due_date: todo.due_date.clone().unwrap_or_default(),
            },
            None => Self::default(),
        }
    }

    pub fn is_valid(&self) -> bool {
        validate_title(&self.title).is_none()
    }

    /// Empty optional fields are left out so the store applies its defaults.
    pub fn into_create_input(self) -> CreateTodoInput {
        CreateTodoInput {
            title: self.title,
            description: non_empty(self.description),
            status: Some(self.status),
            priority: Some(self.priority),
            due_date: non_empty(self.due_date),
        }
    }

    /// The form always holds every field, so an edit writes all of them.
    pub fn into_update_input(self) -> UpdateTodoInput {
        UpdateTodoInput {
            title: Some(self.title),
            description: Some(self.description),
            status: Some(self.status),
            priority: Some(self.priority),
            due_date: Some(self.due_date),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn TodoForm(
    #[props(!optional)] todo: Option<Todo>,
    on_submit: EventHandler<TodoFormValues>,
    on_cancel: EventHandler<()>,
    #[props(default)] submitting: bool,
) -> Element {
    let editing = todo.is_some();
    let initial = TodoFormValues::from_todo(todo.as_ref());
    let mut title = use_signal(|| initial.title.clone());
    let mut description = use_signal(|| initial.description.clone());
    let mut status = use_signal(|| initial.status);
    let mut priority = use_signal(|| initial.priority);
    let mut due_date = use_signal(|| initial.due_date.clone());
    let mut touched = use_signal(|| false);

    let title_error = if touched() { validate_title(&title.read()) } else { None };
    let can_submit = validate_title(&title.read()).is_none() && !submitting;

    let submit = move |_| {
        touched.set(true);
        let values = TodoFormValues {
            title: title(),
            description: description(),
            status: status(),
            priority: priority(),
            due_date: due_date(),
        };
        if values.is_valid() {
            on_submit.call(values);
        }
    };

    let dialog_title = if editing { "Edit Todo" } else { "Create New Todo" };
    let submit_label = if editing { "Update Todo" } else { "Create Todo" };

    rsx! {
        BaseDialog {
            is_open: true,
            title: dialog_title.to_string(),
            on_close: move |_| on_cancel.call(()),
            width: DialogWidth::Large,
            actions: rsx! {
                button { class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button { class: "btn btn-primary",
                    r#type: "button",
                    disabled: !can_submit,
                    onclick: submit,
                    if submitting {
                        span { class: "spinner" }
                    } else {
                        "{submit_label}"
                    }
                }
            },
            div { class: "form",
                div { class: "form-control",
                    label { "Title " span { class: "text-error", "*" } }
                    input {
                        r#type: "text",
                        class: if title_error.is_some() { "input input-error" } else { "input" },
                        value: "{title}",
                        placeholder: "Enter todo title",
                        oninput: move |evt| {
                            touched.set(true);
                            title.set(evt.value());
                        },
                        onblur: move |_| touched.set(true),
                    }
                    if let Some(message) = title_error {
                        span { class: "text-error hint", "{message}" }
                    }
                }
                div { class: "form-control",
                    label { "Description" }
                    textarea {
                        value: "{description}",
                        placeholder: "Enter todo description (optional)",
                        oninput: move |evt| description.set(evt.value()),
                    }
                }
                div { class: "form-grid",
                    div { class: "form-control",
                        label { "Status" }
                        select {
                            value: "{status().as_str()}",
                            onchange: move |evt| {
                                if let Ok(value) = evt.value().parse::<TodoStatus>() {
                                    status.set(value);
                                }
                            },
                            for choice in TodoStatus::ALL {
                                option {
                                    value: choice.as_str(),
                                    selected: choice == status(),
                                    "{choice.label()}"
                                }
                            }
                        }
                    }
                    div { class: "form-control",
                        label { "Priority" }
                        select {
                            value: "{priority().as_str()}",
                            onchange: move |evt| {
                                if let Ok(value) = evt.value().parse::<TodoPriority>() {
                                    priority.set(value);
                                }
                            },
                            for choice in TodoPriority::ALL {
                                option {
                                    value: choice.as_str(),
                                    selected: choice == priority(),
                                    "{choice.label()}"
                                }
                            }
                        }
                    }
                }
                div { class: "form-control",
                    label { "Due Date" }
                    input {
                        r#type: "date",
                        class: "input",
                        value: "{due_date}",
                        oninput: move |evt| due_date.set(evt.value()),
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
    fn title_rules() {
        assert_eq!(validate_title(""), Some("Title is required"));
        assert_eq!(
            validate_title("ab"),
            Some("Title must be at least 3 characters")
        );
        assert_eq!(validate_title("abc"), None);
        assert_eq!(validate_title("héé"), None);
    }

    #[test]
    fn create_input_drops_empty_optionals() {
        let values = TodoFormValues {
            title: "Write docs".to_string(),
            description: "  ".to_string(),
            status: TodoStatus::Pending,
            priority: TodoPriority::High,
            due_date: String::new(),
        };
        let input = values.into_create_input();
        assert_eq!(input.title, "Write docs");
        assert_eq!(input.description, None);
        assert_eq!(input.due_date, None);
        assert_eq!(input.priority, Some(TodoPriority::High));
    }

    #[test]
    fn edit_prefills_from_todo() {
        let todo = Todo {
            id: 7,
            title: "Ship".to_string(),
            description: Some("v1".to_string()),
            status: TodoStatus::InProgress,
            priority: TodoPriority::Low,
            due_date: Some("2025-02-01".to_string()),
            created_at: "2025-01-01 00:00:00".to_string(),
            updated_at: "2025-01-01 00:00:00".to_string(),
        };
        let values = TodoFormValues::from_todo(Some(&todo));
        assert_eq!(values.status, TodoStatus::InProgress);
        let update = values.into_update_input();
        assert_eq!(update.title.as_deref(), Some("Ship"));
        assert_eq!(update.due_date.as_deref(), Some("2025-02-01"));
        assert_eq!(TodoFormValues::from_todo(None), TodoFormValues::default());
    }
}
