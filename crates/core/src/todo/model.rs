//! Todo model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Todo priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoPriority {
    Low,
    Medium,
    High,
}

impl Default for TodoPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl TodoPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A todo item owned by a single user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub priority: TodoPriority,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Create a new open todo owned by the given user
    pub fn new(user_id: Uuid, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            description: None,
            priority: TodoPriority::default(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: TodoPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Partial update applied to an existing todo.
///
/// Identifier, owner, and creation timestamp are not representable here,
/// so a client cannot rewrite them through an update; serde drops any
/// unknown fields from the request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<TodoPriority>,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_todo() {
        let user_id = Uuid::new_v4();
        let todo = Todo::new(user_id, "Test todo");
        assert_eq!(todo.title, "Test todo");
        assert_eq!(todo.user_id, user_id);
        assert_eq!(todo.priority, TodoPriority::Medium);
        assert!(!todo.completed);
        assert!(todo.description.is_none());
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test]
    fn test_todo_with_description() {
        let todo = Todo::new(Uuid::new_v4(), "Test todo").with_description("This is a test");
        assert_eq!(todo.description, Some("This is a test".to_string()));
    }

    #[test]
    fn test_todo_with_priority() {
        let todo = Todo::new(Uuid::new_v4(), "Test todo").with_priority(TodoPriority::High);
        assert_eq!(todo.priority, TodoPriority::High);
    }

    #[test]
    fn test_priority_wire_format() {
        assert_eq!(
            serde_json::to_string(&TodoPriority::High).unwrap(),
            "\"high\""
        );
        let parsed: TodoPriority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, TodoPriority::Low);
    }

    #[test]
    fn test_patch_ignores_unknown_fields() {
        let patch: TodoPatch = serde_json::from_str(
            r#"{"completed": true, "id": "ignored", "user_id": "ignored", "created_at": "ignored"}"#,
        )
        .unwrap();
        assert_eq!(patch.completed, Some(true));
        assert!(patch.title.is_none());
    }
}
