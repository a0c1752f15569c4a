//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the in-memory todo store behind an async `RwLock`; handlers take
//! the lock once per request and never hold it across other awaits.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::todo::TodoStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub todos: Arc<RwLock<TodoStore>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: TodoStore) -> Self {
        Self { todos: Arc::new(RwLock::new(store)) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use todos::{Todo, TodoStatus};

    /// Create an empty test `AppState`.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::default()
    }

    /// Create a test `AppState` holding the given bodies; every odd-numbered
    /// entry (by position) is marked completed.
    pub async fn seeded_app_state(bodies: &[&str]) -> (AppState, Vec<Todo>) {
        let state = AppState::default();
        let mut created = Vec::with_capacity(bodies.len());
        {
            let mut store = state.todos.write().await;
            for (i, body) in bodies.iter().enumerate() {
                let todo = store.create(body).expect("seed body should be valid");
                let todo = if i % 2 == 1 {
                    store.update_status(todo.id, TodoStatus::Completed).expect("seeded id exists")
                } else {
                    todo
                };
                created.push(todo);
            }
        }
        (state, created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_state_is_empty() {
        let state = AppState::default();
        assert!(state.todos.read().await.is_empty());
    }

    #[tokio::test]
    async fn clones_share_the_same_store() {
        let state = AppState::default();
        let clone = state.clone();
        clone.todos.write().await.create("shared").unwrap();
        assert_eq!(state.todos.read().await.len(), 1);
    }
}
