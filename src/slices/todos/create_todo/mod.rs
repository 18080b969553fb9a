mod todo_form;
mod use_create_todo;

pub use todo_form::{validate_title, TodoForm, TodoFormValues};
pub use use_create_todo::use_create_todo;
