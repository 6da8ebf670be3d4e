//! # roster
//!
//! A small HTTP service keeping a collection of users in process memory.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/` | `200` text `Hello World` |
//! | GET | `/users` | `200` JSON array of users |
//! | POST | `/users` | `201` JSON created user |
//! | GET | `/users/{id}` | `200` JSON user, or `200` text `No User ID:{id}` |
//! | PUT | `/users/{id}` | `200` empty body, or `204` when the id is unknown |
//! | DELETE | `/users/{id}` | `200` text `Deleted User ID:{id}` or `No User ID:{id}` |
//!
//! Malformed JSON bodies and non-numeric ids answer `400` with the raw error
//! text. Nothing is persisted; a restart empties the store.
//!
//! The HTTP layer is a thin framework of its own:
//!
//! - Radix-tree routing — O(path-length) lookup via [`matchit`]
//! - Async I/O — tokio + hyper, HTTP/1.1 and HTTP/2
//! - Graceful shutdown — SIGTERM / Ctrl-C, drains in-flight requests
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use roster::{Server, UserStore, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), roster::Error> {
//!     let server = Server::bind("0.0.0.0:3000".parse().unwrap()).await?;
//!     server.serve(app(UserStore::new())).await
//! }
//! ```

mod app;
mod config;
mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub(crate) mod middleware;
pub mod users;

pub use app::app;
pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use method::{Method, UnknownMethod};
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::{NOT_FOUND_BODY, Router};
pub use server::Server;
pub use status::Status;
pub use users::{ApiError, User, UserInput, UserStore};
