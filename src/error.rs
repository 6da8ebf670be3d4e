//! Unified error type.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

/// The error type returned by roster's fallible operations.
///
/// Application-level outcomes (400, 404, "No User ID", etc.) are expressed as
/// HTTP [`Response`](crate::Response) values, not as `Error`s. This type
/// surfaces infrastructure failures: binding to a port or accepting a
/// connection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("io: {0}")]
    Io(#[from] io::Error),
}
