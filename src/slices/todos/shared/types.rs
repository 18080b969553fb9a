use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StarterError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TodoStatus {
    pub const ALL: [TodoStatus; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Status after a toggle: completed reopens to pending, everything else completes.
    pub fn toggled(self) -> Self {
        match self {
            Self::Completed => Self::Pending,
            Self::Pending | Self::InProgress => Self::Completed,
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoStatus {
    type Err = StarterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(StarterError::Validation(format!(
                "unknown todo status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TodoPriority {
    pub const ALL: [TodoPriority; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for TodoPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoPriority {
    type Err = StarterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(StarterError::Validation(format!(
                "unknown todo priority '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    pub due_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodoInput {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
    pub due_date: Option<String>,
}

impl CreateTodoInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodoInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
    pub due_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_completed_and_pending() {
        assert_eq!(TodoStatus::Completed.toggled(), TodoStatus::Pending);
        assert_eq!(TodoStatus::Pending.toggled(), TodoStatus::Completed);
        assert_eq!(TodoStatus::InProgress.toggled(), TodoStatus::Completed);
        for status in TodoStatus::ALL {
            assert_ne!(status.toggled(), TodoStatus::InProgress);
        }
    }

    #[test]
    fn status_and_priority_parse_their_wire_names() {
        for status in TodoStatus::ALL {
            assert_eq!(status.as_str().parse::<TodoStatus>().unwrap(), status);
        }
        for priority in TodoPriority::ALL {
            assert_eq!(priority.as_str().parse::<TodoPriority>().unwrap(), priority);
        }
        assert!("done".parse::<TodoStatus>().is_err());
        assert!("urgent".parse::<TodoPriority>().is_err());
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&TodoStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let priority: TodoPriority = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(priority, TodoPriority::High);
    }
}
