//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `TodosState`/`UiState` signals from Leptos
//! context and call into `net::sync` for mutations.

pub mod create_todo_form;
pub mod icons;
pub mod status_tabs;
pub mod todo_list;
