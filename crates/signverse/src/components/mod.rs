//! UI components for the SignVerse application.
//!
//! # Layout
//!
//! - `app_shell`: Header, BottomNav, Footer (only once a role is selected)
//! - `landing`: role selection and product introduction
//! - `home`, `sign_input`, `speech_input`, `chat`, `settings_view`: routed views
//! - `emotion_indicator`: shared emotion badge
//!
//! # Context Providers
//!
//! [`App`] provides two contexts for the whole tree:
//!
//! ```ignore
//! // Shared application state (navigation, settings, history, live detection)
//! let mut app_state = use_app_state();
//! app_state.mutate(|state| state.set_view(ViewId::Chat));
//!
//! // Translation backend (may be unavailable if the URL was rejected)
//! let backend = use_backend();
//! let result = backend.get()?.fetch_detection().await?;
//! ```

mod app_shell;
mod chat;
mod emotion_indicator;
mod home;
mod landing;
mod settings_view;
mod sign_input;
mod speech_input;

pub use app_shell::{BottomNav, Footer, Header};
pub use chat::ChatView;
pub use emotion_indicator::{EmotionIndicator, IndicatorSize};
pub use home::HomeView;
pub use landing::LandingView;
pub use settings_view::SettingsView;
pub use sign_input::SignInputView;
pub use speech_input::SpeechInputView;

use crate::platform;
use crate::storage;
use crate::utils::SignalExt;
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use signverse_core::backend::{HttpBackend, TranslationBackend};
use signverse_core::config::BackendConfig;
use signverse_core::{AppState, BackendError, RenderableView, ViewId};
use std::rc::Rc;
use std::time::Duration;

// ============================================================================
// Context
// ============================================================================

/// Translation backend shared through context.
///
/// Holds `None` when the configured URL was rejected at startup; every call
/// then fails with [`BackendError::Unavailable`] and the views report it the
/// same way as a network failure.
#[derive(Clone)]
pub struct BackendHandle {
    backend: Option<Rc<dyn TranslationBackend>>,
    config: BackendConfig,
}

impl BackendHandle {
    pub fn connect(config: &BackendConfig) -> Self {
        let backend = match HttpBackend::new(config) {
            Ok(backend) => {
                info!("Translation backend at {}", backend.base_url());
                Some(Rc::new(backend) as Rc<dyn TranslationBackend>)
            }
            Err(e) => {
                error!("Translation backend disabled: {}", e);
                None
            }
        };

        Self {
            backend,
            config: config.clone(),
        }
    }

    pub fn get(&self) -> Result<Rc<dyn TranslationBackend>, BackendError> {
        self.backend.clone().ok_or(BackendError::Unavailable)
    }

    pub fn poll_interval(&self) -> Duration {
        self.config.poll_interval()
    }
}

/// Shared application state.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Translation backend handle.
pub fn use_backend() -> BackendHandle {
    use_context::<BackendHandle>()
}

/// Switch views, announcing the destination when voice feedback is on.
pub(crate) fn navigate(mut app_state: Signal<AppState>, view: ViewId) {
    let label = view.nav_label().to_string();
    let announce = app_state.mutate(|state| {
        state.set_view(view);
        state.settings().voice_feedback
    });
    if announce {
        platform::speak(&label);
    }
}

// ============================================================================
// App
// ============================================================================

/// Routed view with its page heading.
#[component]
fn ViewPage(heading: &'static str, children: Element) -> Element {
    rsx! {
        section { class: "sv-view",
            h1 { class: "sv-view-title", "{heading}" }
            {children}
        }
    }
}

#[component]
pub fn App() -> Element {
    let app_state = use_signal(|| AppState::new(storage::platform_storage()));
    use_context_provider(|| app_state);
    use_context_provider(|| BackendHandle::connect(&BackendConfig::default()));

    // Read once; the app does not follow live colour-scheme changes.
    let prefers_dark = use_hook(platform::prefers_dark_mode);

    use_effect(move || {
        let flags = app_state.read().presentation(prefers_dark);
        platform::apply_document_classes(flags);
    });

    let (role_selected, view, class_list) = {
        let state = app_state.read();
        (
            state.role().is_some(),
            state.current_view(),
            state.presentation(prefers_dark).class_list(),
        )
    };

    let body = match view {
        RenderableView::Landing => rsx! { LandingView {} },
        RenderableView::Home => rsx! { HomeView {} },
        RenderableView::SignInput => rsx! { SignInputView {} },
        RenderableView::SpeechInput => rsx! { SpeechInputView {} },
        RenderableView::Chat => rsx! { ChatView {} },
        RenderableView::Settings => rsx! { SettingsView {} },
    };

    let content = match view.heading() {
        Some(heading) => rsx! {
            ViewPage { heading, {body} }
        },
        None => body,
    };

    rsx! {
        div { class: "sv-app {class_list}",
            if role_selected {
                Header {}
            }

            main { class: "sv-main", {content} }

            if role_selected {
                BottomNav {}
                Footer {}
            }
        }
    }
}
