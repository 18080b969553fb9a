use dioxus::prelude::*;

use crate::core::context::{use_app_context, use_current_path};
use crate::nav::{dashboard_item, nav_items, settings_item, NavItem};

#[component]
pub fn Layout(children: Element) -> Element {
    let ctx = use_app_context();
    let product_name = ctx.config.product_name.clone();
    let version = ctx.config.version.clone();

    let mut items = vec![dashboard_item()];
    items.extend(nav_items());
    items.push(settings_item());

    rsx! {
        div { class: "layout",
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    div { class: "logo", "🏠" }
                    div {
                        div { class: "title", "{product_name}" }
                        div { class: "hint", "v{version}" }
                    }
                }
                ul { class: "menu",
                    for item in items {
                        NavMenuItem { key: "{item.key}", item: item.clone() }
                    }
                }
                div { class: "sidebar-footer",
                    span { class: "hint", "Built with Dioxus" }
                    span { class: "badge badge-primary", "SQLite" }
                }
            }
            main { class: "content", {children} }
        }
    }
}

#[component]
fn NavMenuItem(item: NavItem) -> Element {
    let mut current_path = use_current_path();
    let current = current_path.read().clone();

    if !item.children.is_empty() {
        let open = item.has_active_child(&current);
        return rsx! {
            li {
                details { open,
                    summary { class: if open { "menu-active" } else { "" },
                        span { class: "icon", "{item.icon}" }
                        "{item.label}"
                        if let Some(badge) = item.badge {
                            span { class: "badge badge-primary", "{badge}" }
                        }
                    }
                    ul {
                        for child in item.children.iter() {
                            NavMenuItem { key: "{child.key}", item: child.clone() }
                        }
                    }
                }
            }
        };
    }

    let active = item.is_active(&current);
    let path = item.path.unwrap_or("/");
    rsx! {
        li {
            a {
                id: "nav-{item.key}",
                class: if active { "menu-active" } else { "" },
                onclick: move |_| current_path.set(path.to_string()),
                span { class: "icon", "{item.icon}" }
                "{item.label}"
                if let Some(badge) = item.badge {
                    span { class: "badge badge-primary", "{badge}" }
                }
            }
        }
    }
}
