use dioxus::prelude::*;

use crate::pages::Settings;

pub const PATH: &str = "/settings";

pub fn render() -> Element {
    rsx! { Settings {} }
}
