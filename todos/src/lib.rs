//! Shared todo model and JSON wire types.
//!
//! This crate owns the representation used by `server`, `client`, and `cli`.
//! The server is authoritative for every todo; clients only hold a cached copy
//! of the list and derive filtered views from it with [`filter_todos`].


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a status name is not `pending` or `completed`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid todo status: {0}")]
pub struct ParseStatusError(pub String);

// =============================================================================
// STATUS
// =============================================================================

/// Completion status of a todo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    /// Not done yet. New todos start here.
    #[default]
    Pending,
    /// Done.
    Completed,
}

impl TodoStatus {
    /// Both statuses, in the order the API lists them.
    pub const ALL: [Self; 2] = [Self::Pending, Self::Completed];

    /// Lowercase wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// The opposite status.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }

    #[must_use]
    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseStatusError(s.to_owned())),
        }
    }
}

// =============================================================================
// FILTER
// =============================================================================

/// Tab selector over a todo list: everything, or one status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    /// Filters in tab order.
    pub const ALL: [Self; 3] = [Self::All, Self::Pending, Self::Completed];

    /// Tab label, also the lowercase wire name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// The single status this filter selects, or `None` for [`StatusFilter::All`].
    #[must_use]
    pub fn status(self) -> Option<TodoStatus> {
        match self {
            Self::All => None,
            Self::Pending => Some(TodoStatus::Pending),
            Self::Completed => Some(TodoStatus::Completed),
        }
    }

    #[must_use]
    pub fn matches(self, status: TodoStatus) -> bool {
        self.status().is_none_or(|wanted| wanted == status)
    }
}

impl From<TodoStatus> for StatusFilter {
    fn from(status: TodoStatus) -> Self {
        match status {
            TodoStatus::Pending => Self::Pending,
            TodoStatus::Completed => Self::Completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<TodoStatus>().map(Self::from)
    }
}

// =============================================================================
// TODO
// =============================================================================

/// A single todo as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-assigned identifier, stable for the todo's lifetime.
    pub id: i64,
    /// Free text entered by the user.
    pub body: String,
    pub status: TodoStatus,
}

/// Items whose status matches `filter`, in list order.
#[must_use]
pub fn filter_todos(todos: &[Todo], filter: StatusFilter) -> Vec<Todo> {
    todos.iter().filter(|todo| filter.matches(todo.status)).cloned().collect()
}

#[must_use]
pub fn count_by_filter(todos: &[Todo], filter: StatusFilter) -> usize {
    todos.iter().filter(|todo| filter.matches(todo.status)).count()
}

// =============================================================================
// WIRE DTOs
// =============================================================================

/// `POST /api/todos` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodoBody {
    pub body: String,
}

/// `PATCH /api/todos/{id}/status` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodoStatusBody {
    pub status: TodoStatus,
}

/// `GET /api/todos` query string. `statuses` is a comma-separated list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTodosQuery {
    pub statuses: Option<String>,
}

impl ListTodosQuery {
    /// Requested statuses; a missing parameter means both.
    ///
    /// # Errors
    ///
    /// Returns [`ParseStatusError`] for any unknown status name.
    pub fn statuses(&self) -> Result<Vec<TodoStatus>, ParseStatusError> {
        match self.statuses.as_deref() {
            Some(raw) => parse_statuses(raw),
            None => Ok(TodoStatus::ALL.to_vec()),
        }
    }
}

/// `DELETE /api/todos/{id}` response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTodoResponse {
    pub ok: bool,
}

/// Parse a comma-separated status list, skipping blanks and duplicates.
///
/// # Errors
///
/// Returns [`ParseStatusError`] for the first unknown status name.
pub fn parse_statuses(raw: &str) -> Result<Vec<TodoStatus>, ParseStatusError> {
    let mut out = Vec::with_capacity(2);
    for part in raw.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let status = part.parse::<TodoStatus>()?;
        if !out.contains(&status) {
            out.push(status);
        }
    }
    Ok(out)
}

/// Inverse of [`parse_statuses`], used when building query strings.
#[must_use]
pub fn join_statuses(statuses: &[TodoStatus]) -> String {
    statuses.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(",")
}
