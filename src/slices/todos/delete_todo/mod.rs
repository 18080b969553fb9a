mod use_delete_todo;

pub use use_delete_todo::use_delete_todo;
