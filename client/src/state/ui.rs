//! Local UI state (active tab).
//!
//! DESIGN
//! ======
//! Keeps presentation choices out of the todo cache so switching tabs never
//! triggers a fetch.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use todos::StatusFilter;

#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Tab shown on the index page; `All` on first render.
    pub active_tab: StatusFilter,
}
