mod list_todos;
mod summary;
mod todo_table;
mod use_list_todos;

pub use list_todos::ListTodos;
pub use summary::{is_overdue, parse_due_date, sort_todos, SortKey, TodoStats};
pub use todo_table::TodoTable;
pub use use_list_todos::use_list_todos;
