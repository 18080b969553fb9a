//! Todo list feature: types and store under `shared`, one module per use case.

pub mod config;
pub mod create_todo;
pub mod delete_todo;
pub mod list_todos;
pub mod shared;
pub mod toggle_todo_status;
pub mod update_todo;

// Main page
pub use list_todos::ListTodos;

// Types
pub use shared::database::TodoStore;
pub use shared::types::{CreateTodoInput, Todo, TodoPriority, TodoStatus, UpdateTodoInput};

// Hooks
pub use create_todo::use_create_todo;
pub use delete_todo::use_delete_todo;
pub use list_todos::use_list_todos;
pub use toggle_todo_status::use_toggle_todo_status;
pub use update_todo::use_update_todo;
