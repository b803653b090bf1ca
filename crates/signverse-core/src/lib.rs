//! # SignVerse Core
//!
//! Platform-independent application state for the SignVerse translation shell.
//!
//! Nothing in this crate performs recognition. Sign detection and speech
//! transcription live in an external HTTP service; this crate models the
//! client side of that conversation and the state the UI renders from.
//!
//! ## Modules
//!
//! - [`model`] - Roles, emotions, translations, messages, user settings
//! - [`navigation`] - View identifiers, role redirect policy, the view router
//! - [`preferences`] - Persisted user settings over a key/value store
//! - [`conversation`] - Translation history and chat transcript
//! - [`detection`] - Live sign-detection results shared by poller and manual fetch
//! - [`context`] - [`context::AppState`], the composed application store
//! - [`backend`] - Translation backend trait and its HTTP implementation
//! - [`polling`] - Cancellable fixed-interval detection poller
//! - [`chat`] - Simulated assistant replies
//! - [`presentation`] - Accessibility settings projected onto presentation flags
//! - [`config`] - Production configuration constants
//! - [`error`] - Error types
//! - [`platform`] - Timer and clock helpers for native and WASM targets

#![forbid(unsafe_code)]

pub mod backend;
pub mod chat;
pub mod config;
pub mod context;
pub mod conversation;
pub mod detection;
pub mod error;
pub mod model;
pub mod navigation;
pub mod platform;
pub mod polling;
pub mod preferences;
pub mod presentation;

pub use context::AppState;
pub use error::{BackendError, StorageError};
pub use model::{Emotion, Message, Sender, Translation, UserRole, UserSettings};
pub use navigation::{route, RenderableView, ViewId};
