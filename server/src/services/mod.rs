//! Domain services behind the HTTP routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route handlers stay thin: they decode requests, call into a service, and
//! map service errors to status codes.

pub mod todo;
