use dioxus::prelude::*;

use crate::commands::greet;
use crate::core::context::use_current_path;
use crate::routes;
use crate::slices::todos::list_todos::{use_list_todos, TodoStats};

#[component]
pub fn Dashboard() -> Element {
    let todos = use_list_todos();
    let mut current_path = use_current_path();
    let mut name = use_signal(String::new);
    let mut greeting = use_signal(|| None::<String>);

    let stats = match &*todos.read() {
        Some(Ok(list)) => Some(TodoStats::from_todos(list)),
        _ => None,
    };
    let stat = move |value: Option<usize>| value.map_or("-".to_string(), |v| v.to_string());

    rsx! {
        div { class: "page",
            div {
                h1 { "Dashboard" }
                p { class: "hint", "Welcome to your Dioxus desktop application" }
            }

            div { class: "stats",
                div { class: "stat",
                    div { class: "stat-title", "Total Todos" }
                    div { class: "stat-value text-primary", "{stat(stats.map(|s| s.total))}" }
                    div { class: "stat-desc", "Stored in the local SQLite database" }
                }
                div { class: "stat",
                    div { class: "stat-title", "Open" }
                    div { class: "stat-value text-secondary",
                        "{stat(stats.map(|s| s.pending + s.in_progress))}"
                    }
                    div { class: "stat-desc", "Pending or in progress" }
                }
                div { class: "stat",
                    div { class: "stat-title", "Completed" }
                    div { class: "stat-value text-accent", "{stat(stats.map(|s| s.completed))}" }
                    div { class: "stat-desc", "Done and dusted" }
                }
            }

            div { class: "card",
                h2 { class: "card-title", "💬 Try the Greeting Feature" }
                p { class: "hint", "Send a greeting through the Rust command layer" }
                form { class: "row",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        greeting.set(Some(greet(&name.read())));
                    },
                    input {
                        r#type: "text",
                        class: "input grow",
                        value: "{name}",
                        placeholder: "Enter your name...",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Send Greeting" }
                }
                if let Some(message) = greeting() {
                    div { class: "alert alert-success", "✔ {message}" }
                }
            }

            div { class: "grid-2",
                div { class: "card card-gradient",
                    h2 { class: "card-title", "Manage Todos" }
                    p { "Jump straight into your task list" }
                    div { class: "card-actions",
                        button { class: "btn btn-ghost",
                            onclick: move |_| current_path.set(routes::todos::PATH.to_string()),
                            "Open"
                        }
                    }
                }
                div { class: "card card-gradient-alt",
                    h2 { class: "card-title", "Preferences" }
                    p { "Switch themes and tune the app" }
                    div { class: "card-actions",
                        button { class: "btn btn-ghost",
                            onclick: move |_| current_path.set(routes::settings::PATH.to_string()),
                            "Open"
                        }
                    }
                }
            }
        }
    }
}
