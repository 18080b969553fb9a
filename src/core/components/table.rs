use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn marker(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Error,
    Info,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Default => "badge",
            Self::Primary => "badge badge-primary",
            Self::Success => "badge badge-success",
            Self::Warning => "badge badge-warning",
            Self::Error => "badge badge-error",
            Self::Info => "badge badge-info",
        }
    }
}

/// Header button cycling the column's sort; `direction` is `None` when the
/// table is sorted by another column.
#[component]
pub fn SortableHeader(
    label: String,
    #[props(!optional)] direction: Option<SortDirection>,
    onclick: EventHandler<()>,
) -> Element {
    let marker = direction.map(SortDirection::marker).unwrap_or("⇅");
    rsx! {
        button { class: "sortable-header",
            r#type: "button",
            onclick: move |_| onclick.call(()),
            "{label}"
            span { class: "sort-marker", "{marker}" }
        }
    }
}

#[component]
pub fn TableBadge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    rsx! {
        span { class: "{variant.class()}", {children} }
    }
}

#[component]
pub fn TableActions(children: Element) -> Element {
    rsx! {
        div { class: "table-actions", {children} }
    }
}

#[component]
pub fn TableActionButton(
    title: String,
    #[props(default)] danger: bool,
    onclick: EventHandler<()>,
    children: Element,
) -> Element {
    let class = if danger {
        "btn btn-ghost btn-sm btn-danger"
    } else {
        "btn btn-ghost btn-sm"
    };
    rsx! {
        button { class: "{class}",
            r#type: "button",
            title: "{title}",
            onclick: move |_| onclick.call(()),
            {children}
        }
    }
}
