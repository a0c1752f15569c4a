//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! called from the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>`; the caller records the message in
//! `TodosState` instead of panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use todos::{Todo, TodoStatus};
#[cfg(feature = "hydrate")]
use todos::{CreateTodoBody, DeleteTodoResponse, UpdateTodoStatusBody};

#[cfg(any(test, feature = "hydrate"))]
const TODOS_ENDPOINT: &str = "/api/todos";

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn todos_endpoint(statuses: &[TodoStatus]) -> String {
    format!("{TODOS_ENDPOINT}?statuses={}", todos::join_statuses(statuses))
}

#[cfg(any(test, feature = "hydrate"))]
fn todo_endpoint(id: i64) -> String {
    format!("{TODOS_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn todo_status_endpoint(id: i64) -> String {
    format!("{TODOS_ENDPOINT}/{id}/status")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Fetch todos with any of `statuses` via `GET /api/todos`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_todos(statuses: &[TodoStatus]) -> Result<Vec<Todo>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = todos_endpoint(statuses);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("fetch todos", resp.status()));
        }
        resp.json::<Vec<Todo>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = statuses;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Create a todo via `POST /api/todos`. The server assigns id and status.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn create_todo(body: &str) -> Result<Todo, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = CreateTodoBody { body: body.to_owned() };
        let resp = gloo_net::http::Request::post(TODOS_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("create todo", resp.status()));
        }
        resp.json::<Todo>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Set a todo's status via `PATCH /api/todos/{id}/status`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn update_todo_status(id: i64, status: TodoStatus) -> Result<Todo, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = todo_status_endpoint(id);
        let resp = gloo_net::http::Request::patch(&url)
            .json(&UpdateTodoStatusBody { status })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("update todo", resp.status()));
        }
        resp.json::<Todo>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, status);
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Delete a todo via `DELETE /api/todos/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the acknowledgement is negative.
pub async fn delete_todo(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = todo_endpoint(id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete todo", resp.status()));
        }
        let body: DeleteTodoResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("delete todo failed".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// The four remote calls the todo cache depends on.
///
/// [`HttpApi`] is the browser implementation; the sequencing in
/// `net::sync` is written against this trait so it can run off the browser.
#[allow(async_fn_in_trait)]
pub trait TodoApi {
    /// List todos with any of `statuses`.
    ///
    /// # Errors
    ///
    /// Returns a message if the request fails or is rejected.
    async fn fetch_todos(&self, statuses: &[TodoStatus]) -> Result<Vec<Todo>, String>;

    /// Create a pending todo.
    ///
    /// # Errors
    ///
    /// Returns a message if the request fails or is rejected.
    async fn create_todo(&self, body: &str) -> Result<Todo, String>;

    /// Set the status of todo `id`.
    ///
    /// # Errors
    ///
    /// Returns a message if the request fails or is rejected.
    async fn update_todo_status(&self, id: i64, status: TodoStatus) -> Result<Todo, String>;

    /// Delete todo `id`.
    ///
    /// # Errors
    ///
    /// Returns a message if the request fails, is rejected, or is not acknowledged.
    async fn delete_todo(&self, id: i64) -> Result<(), String>;
}

/// [`TodoApi`] over the REST endpoints above.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl TodoApi for HttpApi {
    async fn fetch_todos(&self, statuses: &[TodoStatus]) -> Result<Vec<Todo>, String> {
        fetch_todos(statuses).await
    }

    async fn create_todo(&self, body: &str) -> Result<Todo, String> {
        create_todo(body).await
    }

    async fn update_todo_status(&self, id: i64, status: TodoStatus) -> Result<Todo, String> {
        update_todo_status(id, status).await
    }

    async fn delete_todo(&self, id: i64) -> Result<(), String> {
        delete_todo(id).await
    }
}
