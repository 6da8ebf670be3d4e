//! The users resource: record types, the in-memory store and the HTTP
//! handlers that expose it.

mod error;
pub mod handlers;
mod model;
mod store;

pub use error::ApiError;
pub use model::{User, UserInput};
pub use store::UserStore;
