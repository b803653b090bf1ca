//! Fixed-interval detection poller.
//!
//! While a camera session is live the sign view re-fetches `/vtot/results`
//! once per interval. The loop is tied to a [`PollHandle`]: cancelling the
//! handle (or dropping it when the view unmounts) stops the loop at its next
//! check, and a fetch that completes after cancellation is discarded rather
//! than delivered.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::backend::TranslationBackend;
use crate::detection::DetectionResult;
use crate::platform::sleep;

/// Owner side of a poll session. Cancels the loop when dropped.
#[derive(Debug, Default)]
pub struct PollHandle {
    cancelled: Arc<AtomicBool>,
}

impl PollHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token to hand to [`poll_detection`].
    pub fn token(&self) -> PollToken {
        PollToken {
            cancelled: self.cancelled.clone(),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Loop side of a poll session.
#[derive(Debug, Clone)]
pub struct PollToken {
    cancelled: Arc<AtomicBool>,
}

impl PollToken {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Fetch detection results every `interval` until `token` is cancelled.
///
/// The first fetch happens one interval after the call. Failed fetches are
/// logged and skipped. Returns the number of results delivered to `on_result`.
pub async fn poll_detection<B, F>(
    backend: &B,
    interval: Duration,
    token: PollToken,
    mut on_result: F,
) -> usize
where
    B: TranslationBackend + ?Sized,
    F: FnMut(DetectionResult),
{
    let mut delivered = 0;
    info!("Detection polling started ({:?} interval)", interval);

    loop {
        sleep(interval).await;
        if token.is_cancelled() {
            break;
        }

        match backend.fetch_detection().await {
            Ok(result) => {
                // The session may have ended while the request was in flight.
                if token.is_cancelled() {
                    debug!("Discarding detection result that arrived after cancellation");
                    break;
                }
                delivered += 1;
                on_result(result);
            }
            Err(e) => warn!("Detection poll failed: {}", e),
        }
    }

    info!("Detection polling stopped after {} results", delivered);
    delivered
}
