//! Mutate-then-refetch sequencing over the shared todo cache.
//!
//! Each mutation issues one request; only when the server acknowledges it is
//! the cache invalidated and the whole list fetched again. There is no
//! optimistic update, retry, or debouncing. Failures are logged and stored in
//! `TodosState::error`.
//!
//! The sequencing lives in async functions generic over [`TodoApi`] and
//! [`TodosCache`]. The signal-facing wrappers (`refetch`, `toggle_status`,
//! ...) spawn them with [`HttpApi`] in the browser. During SSR the requests
//! are unavailable, so the wrappers only touch local bookkeeping.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use leptos::prelude::*;
use todos::{Todo, TodoStatus};

use super::api::TodoApi;
#[cfg(feature = "hydrate")]
use super::api::HttpApi;
use crate::state::todos::TodosState;

/// Statuses requested on every fetch; the client filters locally.
pub const FETCH_STATUSES: [TodoStatus; 2] = [TodoStatus::Completed, TodoStatus::Pending];

/// Read and write access to the todo cache.
pub trait TodosCache {
    fn update_state(&self, f: impl FnOnce(&mut TodosState));
    fn with_state<R>(&self, f: impl FnOnce(&TodosState) -> R) -> R;
}

impl TodosCache for RwSignal<TodosState> {
    fn update_state(&self, f: impl FnOnce(&mut TodosState)) {
        self.update(f);
    }

    fn with_state<R>(&self, f: impl FnOnce(&TodosState) -> R) -> R {
        self.with_untracked(f)
    }
}

/// Trimmed body for a create request, or `None` if there is nothing to send.
#[must_use]
pub fn normalized_body(raw: &str) -> Option<String> {
    let body = raw.trim();
    (!body.is_empty()).then(|| body.to_owned())
}

/// Status a toggle click should send for `todo`.
#[must_use]
pub fn toggle_target(todo: &Todo) -> TodoStatus {
    todo.status.toggled()
}

// =============================================================================
// SEQUENCING
// =============================================================================

/// Mark a fetch as started and return its sequence number.
pub fn start_fetch(cache: &impl TodosCache) -> u64 {
    cache.update_state(|s| {
        s.begin_fetch();
    });
    cache.with_state(|s| s.fetch_seq)
}

/// Fetch the list and apply it as the result of fetch `seq`.
pub async fn load_todos(api: &impl TodoApi, cache: &impl TodosCache, seq: u64) {
    let result = api.fetch_todos(&FETCH_STATUSES).await;
    if let Err(e) = &result {
        log::warn!("fetch todos failed: {e}");
    }
    cache.update_state(|s| s.finish_fetch(seq, result));
}

/// Start a fetch and wait for it.
pub async fn reload_todos(api: &impl TodoApi, cache: &impl TodosCache) {
    let seq = start_fetch(cache);
    load_todos(api, cache, seq).await;
}

/// Send the new status for `id`; refetch on success.
pub async fn apply_status(api: &impl TodoApi, cache: &impl TodosCache, id: i64, status: TodoStatus) {
    match api.update_todo_status(id, status).await {
        Ok(_) => reload_todos(api, cache).await,
        Err(e) => record_failure(cache, e),
    }
}

/// Delete `id`; refetch on success.
pub async fn remove_todo(api: &impl TodoApi, cache: &impl TodosCache, id: i64) {
    match api.delete_todo(id).await {
        Ok(()) => reload_todos(api, cache).await,
        Err(e) => record_failure(cache, e),
    }
}

/// Claim the create slot for `raw`.
///
/// Returns the body to send, or `None` when the input is blank or a create
/// is already in flight. On `Some`, `create_pending` is set.
pub fn begin_create(cache: &impl TodosCache, raw: &str) -> Option<String> {
    let body = normalized_body(raw)?;
    if cache.with_state(|s| s.create_pending) {
        return None;
    }
    cache.update_state(|s| s.create_pending = true);
    Some(body)
}

/// Send a create request for `body` claimed by [`begin_create`].
///
/// `create_pending` is released whatever the outcome. On success
/// `on_created` runs and the list is refetched.
pub async fn submit_create(api: &impl TodoApi, cache: &impl TodosCache, body: &str, on_created: impl FnOnce()) {
    let result = api.create_todo(body).await;
    cache.update_state(|s| s.create_pending = false);
    match result {
        Ok(_) => {
            on_created();
            reload_todos(api, cache).await;
        }
        Err(e) => record_failure(cache, e),
    }
}

fn record_failure(cache: &impl TodosCache, error: String) {
    log::warn!("todo mutation failed: {error}");
    cache.update_state(|s| s.set_error(error));
}

// =============================================================================
// SIGNAL WRAPPERS
// =============================================================================

/// Fetch the full list and replace the cache.
pub fn refetch(todos: RwSignal<TodosState>) {
    let seq = start_fetch(&todos);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        load_todos(&HttpApi, &todos, seq).await;
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = seq;
    }
}

/// Fetch the list unless it is already loaded or loading.
pub fn ensure_loaded(todos: RwSignal<TodosState>) {
    if todos.with_untracked(TodosState::needs_initial_fetch) {
        refetch(todos);
    }
}

/// Flip a todo between pending and completed, then refetch.
pub fn toggle_status(todos: RwSignal<TodosState>, todo: &Todo) {
    let id = todo.id;
    let next = toggle_target(todo);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        apply_status(&HttpApi, &todos, id, next).await;
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (todos, id, next);
    }
}

/// Delete a todo, then refetch.
pub fn delete_todo(todos: RwSignal<TodosState>, id: i64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        remove_todo(&HttpApi, &todos, id).await;
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (todos, id);
    }
}

/// Create a todo from form input, then refetch and run `on_created`.
///
/// Returns `false` without sending anything when the input is blank or a
/// create is already in flight.
pub fn create_todo(todos: RwSignal<TodosState>, raw: &str, on_created: impl FnOnce() + 'static) -> bool {
    let Some(body) = begin_create(&todos, raw) else {
        return false;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        submit_create(&HttpApi, &todos, &body, on_created).await;
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (body, on_created);
        todos.update(|s| s.create_pending = false);
    }
    true
}
