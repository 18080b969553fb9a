mod use_toggle_todo_status;

pub use use_toggle_todo_status::use_toggle_todo_status;
