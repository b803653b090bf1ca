//! Timer and clock helpers that differ between native and WASM targets.
//!
//! - **Desktop/CLI**: `tokio::time::sleep` and `std::time::SystemTime`
//! - **Web**: `gloo_timers` (backed by `setTimeout`) and `instant::SystemTime`
//!   (backed by `Date.now()`)

use std::time::Duration;

/// Suspend the current task for `duration`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Suspend the current task for `duration`.
///
/// Web version: `setTimeout` takes whole milliseconds.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

/// Current time as Unix milliseconds. Returns 0 if the clock is before the epoch.
pub fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        instant::SystemTime::now()
            .duration_since(instant::SystemTime::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
