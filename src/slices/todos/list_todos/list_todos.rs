use dioxus::prelude::*;

use super::summary::TodoStats;
use super::todo_table::TodoTable;
use super::use_list_todos::use_list_todos;
use crate::core::components::BaseDialog;
use crate::slices::todos::create_todo::{use_create_todo, TodoForm, TodoFormValues};
use crate::slices::todos::delete_todo::use_delete_todo;
use crate::slices::todos::shared::types::Todo;
use crate::slices::todos::toggle_todo_status::use_toggle_todo_status;
use crate::slices::todos::update_todo::use_update_todo;

#[derive(Clone, PartialEq)]
enum FormState {
    Closed,
    Creating,
    Editing(Todo),
}

#[component]
pub fn ListTodos() -> Element {
    let todos = use_list_todos();
    let create = use_create_todo();
    let update = use_update_todo();
    let delete = use_delete_todo();
    let toggle = use_toggle_todo_status();

    let mut form = use_signal(|| FormState::Closed);
    let mut pending_delete = use_signal(|| None::<i32>);
    // Bumped on every open so the form remounts with fresh field state.
    let mut form_generation = use_signal(|| 0u32);

    let mut open_form = move |state: FormState| {
        form_generation += 1;
        form.set(state);
    };

    let submit = move |values: TodoFormValues| {
        match form() {
            FormState::Editing(todo) => update.mutate((todo.id, values.into_update_input())),
            FormState::Creating => create.mutate(values.into_create_input()),
            FormState::Closed => {}
        }
        form.set(FormState::Closed);
    };

    let confirm_delete = move |_| {
        if let Some(id) = pending_delete() {
            delete.mutate(id);
        }
        pending_delete.set(None);
    };

    let mutation_error = create
        .error()
        .or_else(|| update.error())
        .or_else(|| delete.error())
        .or_else(|| toggle.error());
    let submitting = create.is_pending() || update.is_pending();

    let body = match &*todos.read() {
        None => rsx! {
            div { class: "loading", span { class: "spinner" } }
        },
        Some(Err(err)) => rsx! {
            div { class: "alert alert-error", "Failed to load todos: {err}" }
        },
        Some(Ok(list)) => {
            let stats = TodoStats::from_todos(list);
            rsx! {
                div { class: "stats",
                    StatCard { label: "Total", value: stats.total, accent: "" }
                    StatCard { label: "Pending", value: stats.pending, accent: "text-warning" }
                    StatCard { label: "In Progress", value: stats.in_progress, accent: "text-info" }
                    StatCard { label: "Completed", value: stats.completed, accent: "text-success" }
                }
                div { class: "card",
                    TodoTable {
                        todos: list.clone(),
                        on_toggle: move |id| toggle.mutate(id),
                        on_edit: move |todo| open_form(FormState::Editing(todo)),
                        on_delete: move |id| pending_delete.set(Some(id)),
                    }
                }
            }
        }
    };

    let editing = match form() {
        FormState::Editing(todo) => Some(todo),
        _ => None,
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                div {
                    h1 { "Todos" }
                    p { class: "hint", "Manage your tasks and stay organized" }
                }
                button { class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| open_form(FormState::Creating),
                    "＋ New Todo"
                }
            }

            if let Some(message) = mutation_error {
                div { class: "alert alert-error", "{message}" }
            }

            {body}

            if form() != FormState::Closed {
                TodoForm {
                    key: "{form_generation}",
                    todo: editing,
                    submitting,
                    on_submit: submit,
                    on_cancel: move |_| form.set(FormState::Closed),
                }
            }

            BaseDialog {
                is_open: pending_delete().is_some(),
                title: "Delete Todo",
                on_close: move |_| pending_delete.set(None),
                actions: rsx! {
                    button { class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| pending_delete.set(None),
                        "Cancel"
                    }
                    button { class: "btn btn-error",
                        r#type: "button",
                        onclick: confirm_delete,
                        "Delete"
                    }
                },
                p { "Are you sure you want to delete this todo?" }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: usize, accent: &'static str) -> Element {
    rsx! {
        div { class: "stat",
            div { class: "stat-title", "{label}" }
            div { class: "stat-value {accent}", "{value}" }
        }
    }
}
