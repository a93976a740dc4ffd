//! Startup readiness polling.
//!
//! The backend may not be reachable the moment the process starts, so
//! initial readiness is a fixed-interval ping loop with a hard overall
//! deadline. This is the only built-in retry in the system: business
//! operations (put/get/delete) are single-attempt, since retrying a
//! write would make it ambiguous whether it happened.

use std::time::Duration;

use tracing::debug;

use crate::error::{Result, StoreError};
use crate::traits::Store;

/// Ping the store every `interval` until it responds or `deadline`
/// elapses from now.
pub async fn wait_until_ready<S: Store + ?Sized>(
    store: &S,
    interval: Duration,
    deadline: Duration,
) -> Result<()> {
    let probe = async {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            match store.ping().await {
                Ok(()) => return Ok(()),
                Err(e) => debug!(error = %e, "store not ready yet"),
            }
        }
    };

    match tokio::time::timeout(deadline, probe).await {
        Ok(result) => result,
        Err(_) => Err(StoreError::Unavailable(format!(
            "store not ready within {deadline:?}"
        ))),
    }
}
