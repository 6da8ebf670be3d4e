//! Per-request span with method, path, peer, status and latency.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Instant;

use tracing::{Instrument, info, info_span, warn};

use crate::response::Response;

/// Runs `dispatch` inside a `request` span and logs its outcome.
///
/// 5xx responses log at `warn`; everything else at `info`.
pub(crate) async fn traced<F>(
    method: &http::Method,
    path: &str,
    peer: SocketAddr,
    dispatch: F,
) -> Response
where
    F: Future<Output = Response>,
{
    let span = info_span!("request", %method, path, %peer);
    async move {
        let started = Instant::now();
        let response = dispatch.await;
        let status = u16::from(response.status_code());
        let latency_us = started.elapsed().as_micros() as u64;
        if status >= 500 {
            warn!(status, latency_us, "request failed");
        } else {
            info!(status, latency_us, "request completed");
        }
        response
    }
    .instrument(span)
    .await
}
