//! Speech input.
//!
//! The microphone lives on the backend host. This view only opens and closes
//! a `/stot` session; closing it returns the transcript, which is saved as a
//! neutral translation.

use dioxus::logger::tracing::{error, info};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::components::{use_app_state, use_backend};
use crate::platform;
use crate::utils::SignalExt;
use signverse_core::{Emotion, Translation};

const START_FAILED: &str = "Failed to start session. Please try again.";
const STOP_FAILED: &str = "Failed to get transcription. Please try again.";

const INSTRUCTIONS: [&str; 4] = [
    "This version does not access your microphone",
    "Click \"Start\" to simulate a speech session",
    "The backend will handle processing without mic input",
    "Click \"Stop\" to fetch and display the transcription",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionPhase {
    Idle,
    Recording,
    Processing,
}

impl SessionPhase {
    fn status_text(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "Click to start speaking (no real mic used)",
            SessionPhase::Recording => "Simulating listening... Click to stop",
            SessionPhase::Processing => "Processing speech...",
        }
    }

    /// Phase a click moves to, or `None` while a transcript is being fetched.
    fn on_click(self) -> Option<SessionPhase> {
        match self {
            SessionPhase::Idle => Some(SessionPhase::Recording),
            SessionPhase::Recording => Some(SessionPhase::Processing),
            SessionPhase::Processing => None,
        }
    }

    fn button_label(&self) -> &'static str {
        match self {
            SessionPhase::Recording => "Stop session",
            _ => "Start session",
        }
    }
}

#[component]
pub fn SpeechInputView() -> Element {
    let mut app_state = use_app_state();
    let backend = use_backend();
    let mut phase = use_signal(|| SessionPhase::Idle);
    let mut transcription = use_signal(String::new);

    let toggle_session = move |_| {
        let current = phase();
        let Some(next) = current.on_click() else {
            return;
        };

        let b = match backend.get() {
            Ok(b) => b,
            Err(e) => {
                error!("Speech backend unavailable: {}", e);
                let message = if current == SessionPhase::Recording {
                    STOP_FAILED
                } else {
                    START_FAILED
                };
                spawn(async move { platform::alert(message).await });
                return;
            }
        };

        // Set before any request goes out so a second click cannot start twice.
        phase.set(next);

        if current == SessionPhase::Idle {
            spawn(async move {
                if let Err(e) = b.start_speech().await {
                    error!("Failed to start speech session: {}", e);
                    phase.set(SessionPhase::Idle);
                    platform::alert(START_FAILED).await;
                }
            });
            return;
        }

        // Root-scoped: the transcript is saved even if the view unmounts mid-request.
        spawn_forever(async move {
            match b.stop_speech().await {
                Ok(text) => {
                    info!("Received transcript ({} chars)", text.len());
                    transcription.set_if_alive(text.clone());
                    app_state.mutate(|state| {
                        state.add_translation(Translation::new(text, Some(Emotion::Neutral)))
                    });
                }
                Err(e) => {
                    error!("Failed to get transcription: {}", e);
                    platform::alert(STOP_FAILED).await;
                }
            }
            phase.set_if_alive(SessionPhase::Idle);
        });
    };

    let current = phase();
    let recording = current == SessionPhase::Recording;
    let ring_class = if recording {
        "sv-mic-ring sv-mic-ring--recording"
    } else {
        "sv-mic-ring"
    };
    let icon = match current {
        SessionPhase::Idle => "🎤",
        SessionPhase::Recording => "⏹",
        SessionPhase::Processing => "⏳",
    };
    let status = current.status_text();
    let button_label = current.button_label();

    rsx! {
        div { class: "sv-speech",
            div { class: "sv-card sv-mic-card",
                div { class: "{ring_class}",
                    button {
                        class: "sv-mic-btn",
                        disabled: current == SessionPhase::Processing,
                        "aria-label": "{button_label}",
                        onclick: toggle_session,
                        "{icon}"
                    }
                }
                p { class: "sv-mic-status", role: "status", "{status}" }
            }

            if !transcription.read().is_empty() {
                div { class: "sv-card sv-transcription",
                    h3 { "Transcription" }
                    p { "{transcription}" }
                }
            }

            div { class: "sv-instructions",
                h3 { "Instructions" }
                ul {
                    for line in INSTRUCTIONS {
                        li { key: "{line}", "{line}" }
                    }
                }
            }
        }
    }
}
