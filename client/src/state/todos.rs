//! Cached todo list shared by the index page and the todo list.
//!
//! DESIGN
//! ======
//! The server owns every todo. This struct is only the last list the server
//! returned plus fetch bookkeeping. Mutations never edit `items` directly;
//! they invalidate it and a refetch replaces it wholesale.
//!
//! Refetches may overlap (two quick deletes each trigger one). Every fetch
//! gets a sequence number from `begin_fetch`, and only the result carrying
//! the latest number is applied, so an older response arriving late can
//! never overwrite a newer list.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use todos::{StatusFilter, Todo, count_by_filter, filter_todos};

/// Fetched todos and load/error status.
#[derive(Clone, Debug, Default)]
pub struct TodosState {
    pub items: Vec<Todo>,
    /// A fetch is in flight.
    pub loading: bool,
    /// At least one fetch has succeeded.
    pub loaded: bool,
    /// Most recent failure from a fetch or mutation.
    pub error: Option<String>,
    /// A create request is in flight.
    pub create_pending: bool,
    /// Sequence number of the most recently started fetch.
    pub fetch_seq: u64,
}

impl TodosState {
    /// Start a fetch and return its sequence number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// Apply the result of fetch `seq`. A failed fetch keeps the previous
    /// items. Results from superseded fetches are dropped and leave
    /// `loading` set, since a newer fetch is still in flight.
    pub fn finish_fetch(&mut self, seq: u64, result: Result<Vec<Todo>, String>) {
        if seq != self.fetch_seq {
            return;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }

    #[must_use]
    pub fn needs_initial_fetch(&self) -> bool {
        !self.loaded && !self.loading
    }

    #[must_use]
    pub fn visible(&self, filter: StatusFilter) -> Vec<Todo> {
        filter_todos(&self.items, filter)
    }

    #[must_use]
    pub fn count(&self, filter: StatusFilter) -> usize {
        count_by_filter(&self.items, filter)
    }
}
