use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogWidth {
    #[default]
    Medium,
    Large,
}

impl DialogWidth {
    fn class(self) -> &'static str {
        match self {
            Self::Medium => "dialog-card",
            Self::Large => "dialog-card dialog-wide",
        }
    }
}

/// Modal shell: title bar, scrollable body and an action row.
#[component]
pub fn BaseDialog(
    is_open: bool,
    title: String,
    on_close: EventHandler<()>,
    #[props(default)] width: DialogWidth,
    actions: Element,
    children: Element,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        div { class: "dialog-backdrop",
            onclick: move |_| on_close.call(()),
            div { class: "{width.class()}",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "dialog-header",
                    h3 { class: "dialog-title", "{title}" }
                    button { class: "btn btn-ghost btn-square",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                div { class: "dialog-body", {children} }
                div { class: "dialog-actions", {actions} }
            }
        }
    }
}
