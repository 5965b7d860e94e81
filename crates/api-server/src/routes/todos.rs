//! Todo API endpoints
//!
//! RESTful API for owner-scoped todo CRUD operations. Identity is
//! resolved from the bearer token before any store call; a row that
//! exists but belongs to someone else is reported exactly like a row
//! that does not exist.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tl_core::todo::{Todo, TodoPatch, TodoPriority, TodoRepository};
use tl_core::Error;

use crate::auth::resolve_user_identity;
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<TodoPriority>,
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub priority: TodoPriority,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            user_id: todo.user_id,
            title: todo.title,
            description: todo.description,
            priority: todo.priority,
            completed: todo.completed,
            created_at: todo.created_at.to_rfc3339(),
            updated_at: todo.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type RouteError = (StatusCode, Json<ErrorResponse>);

pub fn route_error(status: StatusCode, error: impl Into<String>) -> RouteError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

pub fn unauthorized(error: impl Into<String>) -> RouteError {
    route_error(StatusCode::UNAUTHORIZED, error)
}

pub fn bad_request(error: impl Into<String>) -> RouteError {
    route_error(StatusCode::BAD_REQUEST, error)
}

pub fn not_found(error: impl Into<String>) -> RouteError {
    route_error(StatusCode::NOT_FOUND, error)
}

pub fn internal_error(error: impl std::fmt::Display) -> RouteError {
    route_error(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
}

/// Map store errors onto responses. Missing and not-owned rows share one
/// outcome so the API never leaks which records exist.
pub fn store_error(err: Error) -> RouteError {
    match err {
        Error::TodoNotFound(_) | Error::NotFound(_) => {
            not_found("Todo not found or permission denied")
        }
        Error::InvalidInput(msg) => bad_request(msg),
        other => internal_error(other),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /todos - List the caller's todos
async fn list_todos(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<TodoResponse>>, RouteError> {
    let user_id = resolve_user_identity(&headers).map_err(unauthorized)?;

    let todos = state
        .todo_store()
        .list(user_id)
        .await
        .map_err(store_error)?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// POST /todos - Create a new todo
async fn create_todo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), RouteError> {
    let user_id = resolve_user_identity(&headers).map_err(unauthorized)?;

    if req.title.trim().is_empty() {
        return Err(bad_request("Title cannot be empty"));
    }

    let mut todo = Todo::new(user_id, req.title);

    if let Some(description) = req.description {
        todo = todo.with_description(description);
    }

    if let Some(priority) = req.priority {
        todo = todo.with_priority(priority);
    }

    let created = state.todo_store().create(todo).await.map_err(store_error)?;

    Ok((StatusCode::CREATED, Json(TodoResponse::from(created))))
}

/// PATCH /todos/{id} - Update one of the caller's todos
async fn update_todo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<TodoResponse>, RouteError> {
    let user_id = resolve_user_identity(&headers).map_err(unauthorized)?;

    if let Some(title) = patch.title.as_deref() {
        if title.trim().is_empty() {
            return Err(bad_request("Title cannot be empty"));
        }
    }

    let updated = state
        .todo_store()
        .update(user_id, id, patch)
        .await
        .map_err(store_error)?;

    Ok(Json(TodoResponse::from(updated)))
}

/// DELETE /todos/{id} - Delete one of the caller's todos
async fn delete_todo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, RouteError> {
    let user_id = resolve_user_identity(&headers).map_err(unauthorized)?;

    let deleted = state
        .todo_store()
        .delete(user_id, id)
        .await
        .map_err(store_error)?;

    if deleted {
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(not_found("Todo not found or permission denied"))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", patch(update_todo).delete(delete_todo))
}
