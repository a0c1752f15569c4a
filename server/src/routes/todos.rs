//! Todo JSON routes.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use todos::{CreateTodoBody, DeleteTodoResponse, ListTodosQuery, Todo, UpdateTodoStatusBody};
use tracing::warn;

use crate::services::todo::{self, TodoError};
use crate::state::AppState;

pub(crate) fn todo_error_to_status(err: TodoError) -> StatusCode {
    match err {
        TodoError::NotFound(_) => StatusCode::NOT_FOUND,
        TodoError::EmptyBody => StatusCode::BAD_REQUEST,
    }
}

/// `GET /api/todos?statuses=pending,completed`: list todos by status.
pub async fn list_todos(
    State(state): State<AppState>,
    Query(query): Query<ListTodosQuery>,
) -> Result<Json<Vec<Todo>>, StatusCode> {
    let statuses = query.statuses().map_err(|e| {
        warn!(error = %e, "rejected todo list query");
        StatusCode::BAD_REQUEST
    })?;
    Ok(Json(todo::list_todos(&state, &statuses).await))
}

/// `POST /api/todos`: create a pending todo.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodoBody>,
) -> Result<(StatusCode, Json<Todo>), StatusCode> {
    let todo = todo::create_todo(&state, &body.body)
        .await
        .map_err(todo_error_to_status)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// `PATCH /api/todos/:id/status`: set a todo's status.
pub async fn update_todo_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTodoStatusBody>,
) -> Result<Json<Todo>, StatusCode> {
    let todo = todo::update_todo_status(&state, id, body.status)
        .await
        .map_err(todo_error_to_status)?;
    Ok(Json(todo))
}

/// `DELETE /api/todos/:id`: delete a todo.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteTodoResponse>, StatusCode> {
    todo::delete_todo(&state, id)
        .await
        .map_err(todo_error_to_status)?;
    Ok(Json(DeleteTodoResponse { ok: true }))
}
