//! Networking modules for the todo REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs single HTTP calls; `sync` sequences them against the shared
//! `TodosState` (mutate, then refetch on success).

pub mod api;
pub mod sync;
