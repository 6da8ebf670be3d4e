//! Middleware layer.
//!
//! Middleware wraps the dispatch of one request and is the place for
//! cross-cutting concerns. The server runs every request through
//! [`trace`]; there is no user-facing middleware stack.

pub(crate) mod trace;
