use std::cmp::Ordering;

use time::macros::format_description;
use time::Date;

use crate::core::components::SortDirection;
use crate::slices::todos::shared::types::{Todo, TodoStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl TodoStats {
    pub fn from_todos(todos: &[Todo]) -> Self {
        todos.iter().fold(
            Self {
                total: todos.len(),
                ..Self::default()
            },
            |mut stats, todo| {
                match todo.status {
                    TodoStatus::Pending => stats.pending += 1,
                    TodoStatus::InProgress => stats.in_progress += 1,
                    TodoStatus::Completed => stats.completed += 1,
                }
                stats
            },
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    DueDate,
}

/// Stable sort. Todos without a due date go last in both directions.
pub fn sort_todos(todos: &mut [Todo], key: SortKey, direction: SortDirection) {
    todos.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortKey::DueDate => match (due(a), due(b)) {
                (Some(x), Some(y)) => x.cmp(y),
                (Some(_), None) => return Ordering::Less,
                (None, Some(_)) => return Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn due(todo: &Todo) -> Option<&str> {
    todo.due_date.as_deref().filter(|d| !d.trim().is_empty())
}

pub fn parse_due_date(value: &str) -> Option<Date> {
    let format = format_description!("[year]-[month]-[day]");
    let day = value.trim().get(..10)?;
    Date::parse(day, &format).ok()
}

/// A due date strictly before `today`. Unparseable dates are never overdue.
pub fn is_overdue(due_date: &str, today: Date) -> bool {
    parse_due_date(due_date).is_some_and(|date| date < today)
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::slices::todos::shared::types::TodoPriority;

    fn todo(id: i32, title: &str, status: TodoStatus, due_date: Option<&str>) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            description: None,
            status,
            priority: TodoPriority::Medium,
            due_date: due_date.map(str::to_string),
            created_at: "2025-01-01 00:00:00".to_string(),
            updated_at: "2025-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn stats_count_each_status() {
        let todos = vec![
            todo(1, "a", TodoStatus::Pending, None),
            todo(2, "b", TodoStatus::Completed, None),
            todo(3, "c", TodoStatus::InProgress, None),
            todo(4, "d", TodoStatus::Completed, None),
        ];
        let stats = TodoStats::from_todos(&todos);
        assert_eq!(
            stats,
            TodoStats {
                total: 4,
                pending: 1,
                in_progress: 1,
                completed: 2
            }
        );
        assert_eq!(TodoStats::from_todos(&[]), TodoStats::default());
    }

    #[test]
    fn sorts_by_title_and_due_date() {
        let mut todos = vec![
            todo(1, "beta", TodoStatus::Pending, Some("2025-03-01")),
            todo(2, "Alpha", TodoStatus::Pending, None),
            todo(3, "gamma", TodoStatus::Pending, Some("2025-01-15")),
        ];

        sort_todos(&mut todos, SortKey::Title, SortDirection::Asc);
        let ids: Vec<i32> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        sort_todos(&mut todos, SortKey::DueDate, SortDirection::Asc);
        let ids: Vec<i32> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        sort_todos(&mut todos, SortKey::DueDate, SortDirection::Desc);
        let ids: Vec<i32> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn overdue_is_strictly_before_today() {
        let today = date!(2025 - 06 - 10);
        assert!(is_overdue("2025-06-09", today));
        assert!(!is_overdue("2025-06-10", today));
        assert!(!is_overdue("2025-07-01", today));
        assert!(!is_overdue("", today));
        assert!(!is_overdue("next week", today));
        assert!(is_overdue("2025-06-01T09:00:00", today));
    }
}
