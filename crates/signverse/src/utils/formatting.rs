//! Formatting utilities for human-readable output.
//!
//! Timestamps throughout the app are Unix milliseconds.

use signverse_core::platform::now_millis;

/// Format a Unix millisecond timestamp as relative time (e.g., "5 mins ago").
///
/// Timestamps in the future (clock skew) read as "Just now".
///
/// # Examples
///
/// ```ignore
/// use signverse::utils::formatting::format_timestamp;
/// use signverse_core::platform::now_millis;
///
/// assert_eq!(format_timestamp(now_millis()), "Just now");
/// assert_eq!(format_timestamp(now_millis() - 120_000), "2 mins ago");
/// ```
pub fn format_timestamp(timestamp_ms: u64) -> String {
    if timestamp_ms == 0 {
        return "Unknown".to_string();
    }

    let elapsed_ms = now_millis().saturating_sub(timestamp_ms);
    format_duration(elapsed_ms / 1000)
}

/// Format an elapsed duration in seconds.
///
/// # Examples
///
/// ```ignore
/// use signverse::utils::formatting::format_duration;
///
/// assert_eq!(format_duration(30), "Just now");
/// assert_eq!(format_duration(120), "2 mins ago");
/// assert_eq!(format_duration(7200), "2 hours ago");
/// ```
pub fn format_duration(seconds: u64) -> String {
    match seconds {
        0..=59 => "Just now".to_string(),
        60..=3599 => plural(seconds / 60, "min"),
        3600..=86399 => plural(seconds / 3600, "hour"),
        _ => plural(seconds / 86400, "day"),
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_just_now() {
        assert_eq!(format_duration(0), "Just now");
        assert_eq!(format_duration(59), "Just now");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(60), "1 min ago");
        assert_eq!(format_duration(120), "2 mins ago");
        assert_eq!(format_duration(3599), "59 mins ago");
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration(3600), "1 hour ago");
        assert_eq!(format_duration(86399), "23 hours ago");
    }

    #[test]
    fn test_format_duration_days() {
        assert_eq!(format_duration(86400), "1 day ago");
        assert_eq!(format_duration(31536000), "365 days ago");
    }

    #[test]
    fn test_format_timestamp_unknown() {
        assert_eq!(format_timestamp(0), "Unknown");
    }

    #[test]
    fn test_format_timestamp_uses_milliseconds() {
        let now = now_millis();
        assert_eq!(format_timestamp(now), "Just now");
        assert_eq!(format_timestamp(now - 5 * 60 * 1000), "5 mins ago");
    }

    #[test]
    fn test_format_timestamp_future_is_just_now() {
        assert_eq!(format_timestamp(now_millis() + 60_000), "Just now");
    }
}
