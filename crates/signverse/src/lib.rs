//! SignVerse - Sign language translation front-end.
//!
//! A Dioxus shell around an external translation service. Users pick a
//! communication role, then translate sign language (camera detection
//! polled from the backend) or speech (server-side transcription), chat with
//! a simulated assistant, and tune accessibility settings.
//!
//! # Architecture
//!
//! - **State**: [`signverse_core::AppState`] in a root signal, provided via context
//! - **Routing**: [`signverse_core::route`] picks the view from role and view id
//! - **Backend**: [`signverse_core::backend::HttpBackend`] behind a context handle
//! - **Storage**: `localStorage` on web, a JSON file in the data dir on desktop
//!
//! # Platform Support
//!
//! - **Web (WASM)**: browser alerts, `window.open`, speech synthesis, document classes
//! - **Desktop**: native message dialogs via rfd, the OS URL opener

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod components;
pub mod platform;
pub mod storage;
pub mod utils;
