use dioxus::prelude::*;

use crate::core::context::{use_app_context, use_theme};
use crate::error::StarterError;
use crate::settings_store;
use crate::theme::{self, Theme, AVAILABLE_THEMES, DEFAULT_THEME, THEME_STORAGE_KEY};

/// Theme picked in the select; unknown values warn and fall back to the default.
fn selected_theme(value: &str) -> Theme {
    theme::parse_theme_or_default(value)
}

#[component]
pub fn Settings() -> Element {
    let ctx = use_app_context();
    let mut theme_signal = use_theme();
    let mut notifications = use_signal(|| true);
    let mut auto_save = use_signal(|| false);
    let mut status = use_signal(|| None::<Result<String, String>>);

    let db_path = ctx.config.db_path();
    let save_path = db_path.clone();
    let mut change_theme = move |value: String| {
        let next = selected_theme(&value);
        theme_signal.set(next);
        let db_path = save_path.clone();
        spawn(async move {
            let result = tokio::task::spawn_blocking(move || theme::save_theme(&db_path, next))
                .await
                .map_err(|e| StarterError::Runtime(e.to_string()))
                .and_then(|r| r);
            if let Err(err) = result {
                tracing::error!("Failed to save theme: {err}");
                status.set(Some(Err(format!("Failed to save theme: {err}"))));
            }
        });
    };

    let reset_path = db_path.clone();
    let reset = move |_| {
        theme_signal.set(DEFAULT_THEME);
        notifications.set(true);
        auto_save.set(false);
        let db_path = reset_path.clone();
        spawn(async move {
            let result = tokio::task::spawn_blocking(move || {
                settings_store::remove_setting(&db_path, THEME_STORAGE_KEY)
            })
            .await
            .map_err(|e| StarterError::Runtime(e.to_string()))
            .and_then(|r| r);
            match result {
                Ok(_) => status.set(Some(Ok("Settings reset to defaults".to_string()))),
                Err(err) => {
                    tracing::error!("Failed to reset settings: {err}");
                    status.set(Some(Err(format!("Failed to reset settings: {err}"))));
                }
            }
        });
    };

    let current = theme_signal();

    rsx! {
        div { class: "page",
            div {
                h1 { "Settings" }
                p { class: "hint", "Manage your application preferences and configuration" }
            }

            match status() {
                Some(Ok(message)) => rsx! { div { class: "alert alert-success", "{message}" } },
                Some(Err(message)) => rsx! { div { class: "alert alert-error", "{message}" } },
                None => rsx! {},
            }

            div { class: "card",
                h2 { class: "card-title", "🎨 Appearance" }
                div { class: "form-control",
                    label { "Theme" }
                    select {
                        value: "{current.as_str()}",
                        onchange: move |evt| change_theme(evt.value()),
                        for choice in AVAILABLE_THEMES {
                            option {
                                value: choice.as_str(),
                                selected: choice == current,
                                "{choice.label()}"
                            }
                        }
                    }
                    span { class: "hint", "Choose your preferred color theme" }
                }
            }

            div { class: "card",
                h2 { class: "card-title", "🔔 Notifications" }
                label { class: "toggle-row",
                    input {
                        r#type: "checkbox",
                        class: "toggle",
                        checked: notifications(),
                        onchange: move |evt| notifications.set(evt.checked()),
                    }
                    div {
                        div { class: "strong", "Enable Notifications" }
                        div { class: "hint", "Receive alerts and updates from the application" }
                    }
                }
                div { class: "divider" }
                label { class: "toggle-row",
                    input {
                        r#type: "checkbox",
                        class: "toggle",
                        checked: auto_save(),
                        onchange: move |evt| auto_save.set(evt.checked()),
                    }
                    div {
                        div { class: "strong", "Auto-save Changes" }
                        div { class: "hint", "Automatically save your work every few minutes" }
                    }
                }
            }

            div { class: "card",
                h2 { class: "card-title", "👤 Account" }
                div { class: "form-control",
                    label { "Username" }
                    input { r#type: "text", class: "input", placeholder: "Enter username", value: "user@example.com" }
                }
                div { class: "form-control",
                    label { "Email" }
                    input { r#type: "email", class: "input", placeholder: "Enter email", value: "user@example.com" }
                }
                div { class: "card-actions",
                    button { class: "btn btn-ghost", "Cancel" }
                    button { class: "btn btn-primary", "Save Changes" }
                }
            }

            div { class: "card card-danger",
                h2 { class: "card-title text-error", "⚠ Danger Zone" }
                p { class: "hint", "Irreversible actions that will permanently affect your account and data" }
                div { class: "row",
                    button { class: "btn btn-outline btn-error", onclick: reset, "Reset Settings" }
                    button { class: "btn btn-error", disabled: true, "Delete Account" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_selection_falls_back_to_default_theme() {
        assert_eq!(selected_theme("light"), Theme::Light);
        assert_eq!(selected_theme("dark"), Theme::Dark);
        assert_eq!(selected_theme("solarized"), DEFAULT_THEME);
        assert_eq!(selected_theme(""), DEFAULT_THEME);
    }
}
