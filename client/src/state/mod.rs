//! Client-side reactive state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wraps each state struct in an `RwSignal` and provides it through
//! Leptos context. `todos` is the cached read-model of the server's list;
//! `ui` holds presentation-only choices such as the active tab.

pub mod todos;
pub mod ui;
