mod use_update_todo;

pub use use_update_todo::use_update_todo;
