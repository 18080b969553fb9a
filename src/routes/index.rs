use dioxus::prelude::*;

use crate::pages::Dashboard;

pub const PATH: &str = "/";

pub fn render() -> Element {
    rsx! { Dashboard {} }
}
