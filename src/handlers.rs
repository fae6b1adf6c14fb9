use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{CreateTodoRequest, DeleteTodoResponse, Todo, UpdateTodoRequest};
use crate::{AppState, TodoId};

#[derive(Debug, Serialize)]
pub struct HealthBody {
    status: &'static str,
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.store.list_todos()?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    if input.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Text cannot be empty".to_string()));
    }

    let now = Utc::now();
    let todo = Todo {
        id: TodoId::new(),
        text: input.text,
        completed: input.completed,
        created_at: now,
        updated_at: now,
    };

    state.store.put_todo(&todo)?;
    tracing::info!(todo_id = %todo.id, "created todo");
    Ok(Json(todo))
}

pub async fn get_todo(
    Path(id): Path<TodoId>,
    State(state): State<AppState>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.store.get_todo(&id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(todo))
}

pub async fn update_todo(
    Path(id): Path<TodoId>,
    State(state): State<AppState>,
    Json(input): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state
        .store
        .update_todo(&id, &input.text, input.completed)?
        .ok_or(ApiError::NotFound)?;

    tracing::info!(todo_id = %todo.id, "updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo(
    Path(id): Path<TodoId>,
    State(state): State<AppState>,
) -> Result<Json<DeleteTodoResponse>, ApiError> {
    state.store.delete_todo(&id)?.ok_or(ApiError::NotFound)?;

    tracing::info!(todo_id = %id, "deleted todo");
    Ok(Json(DeleteTodoResponse {
        message: "Todo deleted successfully".to_string(),
    }))
}
