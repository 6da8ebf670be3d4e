//! Command-line configuration.

use std::net::SocketAddr;

use clap::Parser;

/// In-memory users service over HTTP.
#[derive(Parser, Debug, Clone)]
#[command(name = "roster", version, about)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:3000")]
    pub addr: SocketAddr,

    /// Log filter used when `RUST_LOG` is unset (e.g. `info`, `roster=debug`).
    #[arg(long, default_value = "info")]
    pub log: String,
}
