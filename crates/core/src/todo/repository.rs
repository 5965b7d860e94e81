//! Todo repository trait
//!
//! Defines the interface for owner-scoped todo storage operations.

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Todo, TodoPatch};
use crate::Result;

/// Repository interface for todo CRUD operations.
///
/// Every operation is scoped by the owning user: a caller can never
/// observe or mutate another user's rows. A lookup that misses because
/// the row belongs to someone else is reported the same way as a row
/// that does not exist.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Create a new todo
    async fn create(&self, todo: Todo) -> Result<Todo>;

    /// Get one of the caller's todos by ID
    async fn get(&self, user_id: Uuid, id: Uuid) -> Result<Option<Todo>>;

    /// List the caller's todos, newest first
    async fn list(&self, user_id: Uuid) -> Result<Vec<Todo>>;

    /// List the caller's open (not completed) todos, newest first
    async fn list_open(&self, user_id: Uuid) -> Result<Vec<Todo>>;

    /// Apply a partial update to one of the caller's todos
    async fn update(&self, user_id: Uuid, id: Uuid, patch: TodoPatch) -> Result<Todo>;

    /// Delete one of the caller's todos, returning whether a row was removed
    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool>;
}
