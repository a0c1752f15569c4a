//! Todo service: in-memory store and the four API operations.
//!
//! DESIGN
//! ======
//! The server is the only place todos are created, changed, or removed.
//! Identifiers come from a monotonically increasing counter and are never
//! reused, so a client holding a stale id after a delete gets `NotFound`
//! rather than touching a different todo. Listing is in ascending id order,
//! which is creation order.
//!
//! Nothing is persisted; a restart starts from the configured seed.

#[cfg(test)]
#[path = "todo_test.rs"]
mod todo_test;

use std::collections::BTreeMap;

use todos::{Todo, TodoStatus};
use tracing::info;

use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("todo not found: {0}")]
    NotFound(i64),
    #[error("todo body must not be empty")]
    EmptyBody,
}

/// In-memory todo collection keyed by id.
#[derive(Debug)]
pub struct TodoStore {
    next_id: i64,
    todos: BTreeMap<i64, Todo>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 1, todos: BTreeMap::new() }
    }

    /// Build a store pre-filled with pending todos, skipping blank bodies.
    #[must_use]
    pub fn with_seed(bodies: &[String]) -> Self {
        let mut store = Self::new();
        for body in bodies {
            let _ = store.create(body);
        }
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Todos whose status is in `statuses`, in id order.
    #[must_use]
    pub fn list(&self, statuses: &[TodoStatus]) -> Vec<Todo> {
        self.todos.values().filter(|todo| statuses.contains(&todo.status)).cloned().collect()
    }

    /// Create a pending todo with the trimmed body.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::EmptyBody`] if the body is blank.
    pub fn create(&mut self, body: &str) -> Result<Todo, TodoError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(TodoError::EmptyBody);
        }
        let todo = Todo { id: self.next_id, body: body.to_owned(), status: TodoStatus::Pending };
        self.next_id += 1;
        self.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    /// Set the status of one todo. Only `status` changes.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] for an unknown id.
    pub fn update_status(&mut self, id: i64, status: TodoStatus) -> Result<Todo, TodoError> {
        let todo = self.todos.get_mut(&id).ok_or(TodoError::NotFound(id))?;
        todo.status = status;
        Ok(todo.clone())
    }

    /// Remove one todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] for an unknown id.
    pub fn delete(&mut self, id: i64) -> Result<Todo, TodoError> {
        self.todos.remove(&id).ok_or(TodoError::NotFound(id))
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// List todos with any of the given statuses.
pub async fn list_todos(state: &AppState, statuses: &[TodoStatus]) -> Vec<Todo> {
    state.todos.read().await.list(statuses)
}

/// Create a new pending todo.
///
/// # Errors
///
/// Returns [`TodoError::EmptyBody`] if the body is blank.
pub async fn create_todo(state: &AppState, body: &str) -> Result<Todo, TodoError> {
    let todo = state.todos.write().await.create(body)?;
    info!(todo_id = todo.id, "todo created");
    Ok(todo)
}

/// Set a todo's status.
///
/// # Errors
///
/// Returns [`TodoError::NotFound`] if no todo has this id.
pub async fn update_todo_status(state: &AppState, id: i64, status: TodoStatus) -> Result<Todo, TodoError> {
    let todo = state.todos.write().await.update_status(id, status)?;
    info!(todo_id = id, %status, "todo status updated");
    Ok(todo)
}

/// Delete a todo.
///
/// # Errors
///
/// Returns [`TodoError::NotFound`] if no todo has this id.
pub async fn delete_todo(state: &AppState, id: i64) -> Result<(), TodoError> {
    state.todos.write().await.delete(id)?;
    info!(todo_id = id, "todo deleted");
    Ok(())
}
