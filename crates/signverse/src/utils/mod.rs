//! Utility modules for common patterns.

pub mod formatting;
pub mod signal_ext;

pub use formatting::{format_duration, format_timestamp};
pub use signal_ext::SignalExt;
