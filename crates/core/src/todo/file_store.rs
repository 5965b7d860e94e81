//! File-based todo storage implementation
//!
//! Stores todos as JSON in a file on disk.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{Todo, TodoPatch};
use super::repository::TodoRepository;
use crate::{Error, Result};

/// File-based todo store using JSON
pub struct FileTodoStore {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory cache of todos
    cache: RwLock<HashMap<Uuid, Todo>>,
}

impl FileTodoStore {
    /// Create a new FileTodoStore
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await?;
            let todos: Vec<Todo> = serde_json::from_str(&content)?;
            todos.into_iter().map(|t| (t.id, t)).collect()
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    /// Persist the cache to disk
    async fn persist(&self) -> Result<()> {
        let cache = self.cache.read().await;
        let todos: Vec<&Todo> = cache.values().collect();
        let content = serde_json::to_string_pretty(&todos)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for FileTodoStore {
    async fn create(&self, todo: Todo) -> Result<Todo> {
        {
            let mut cache = self.cache.write().await;
            if cache.contains_key(&todo.id) {
                return Err(Error::InvalidInput(format!(
                    "Todo with ID {} already exists",
                    todo.id
                )));
            }
            cache.insert(todo.id, todo.clone());
        }
        self.persist().await?;
        Ok(todo)
    }

    async fn get(&self, user_id: Uuid, id: Uuid) -> Result<Option<Todo>> {
        let cache = self.cache.read().await;
        Ok(cache
            .get(&id)
            .filter(|t| t.user_id == user_id)
            .cloned())
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<Todo>> {
        let cache = self.cache.read().await;
        let mut todos: Vec<Todo> = cache
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        // Sort by created_at descending (newest first)
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(todos)
    }

    async fn list_open(&self, user_id: Uuid) -> Result<Vec<Todo>> {
        let cache = self.cache.read().await;
        let mut todos: Vec<Todo> = cache
            .values()
            .filter(|t| t.user_id == user_id && !t.completed)
            .cloned()
            .collect();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(todos)
    }

    async fn update(&self, user_id: Uuid, id: Uuid, patch: TodoPatch) -> Result<Todo> {
        let updated = {
            let mut cache = self.cache.write().await;
            let todo = cache
                .get_mut(&id)
                .filter(|t| t.user_id == user_id)
                .ok_or_else(|| Error::TodoNotFound(id.to_string()))?;

            if let Some(title) = patch.title {
                todo.title = title;
            }
            if let Some(description) = patch.description {
                todo.description = Some(description);
            }
            if let Some(priority) = patch.priority {
                todo.priority = priority;
            }
            if let Some(completed) = patch.completed {
                todo.completed = completed;
            }
            todo.updated_at = Utc::now();
            todo.clone()
        };
        self.persist().await?;
        Ok(updated)
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool> {
        let removed = {
            let mut cache = self.cache.write().await;
            match cache.get(&id) {
                Some(todo) if todo.user_id == user_id => {
                    cache.remove(&id);
                    true
                }
                _ => false,
            }
        };
        if removed {
            self.persist().await?;
        }
        Ok(removed)
    }
}
