use dioxus::prelude::*;

use crate::slices::todos::ListTodos;

pub const PATH: &str = "/todos";

pub fn render() -> Element {
    rsx! { ListTodos {} }
}
