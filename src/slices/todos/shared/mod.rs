pub mod database;
pub mod schema;
pub mod types;

/// Cache key for the todo list query; every todo mutation invalidates it.
pub const QUERY_KEY: &str = "todos";
