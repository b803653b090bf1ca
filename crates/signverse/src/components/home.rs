use dioxus::prelude::*;

use crate::components::{navigate, use_app_state, EmotionIndicator, IndicatorSize};
use crate::utils::format_timestamp;
use signverse_core::{Translation, ViewId};

const STEPS: [(&str, &str); 3] = [
    (
        "Choose your input",
        "Sign to the camera, speak into the microphone, or type to the assistant.",
    ),
    (
        "Review the translation",
        "SignVerse shows the text along with the emotion it detected.",
    ),
    (
        "Save or replay",
        "Keep translations in your history or play them back as speech.",
    ),
];

/// Dashboard for a signed-in role: quick actions, recent history, help.
#[component]
pub fn HomeView() -> Element {
    let app_state = use_app_state();

    let (title, recent) = {
        let state = app_state.read();
        let title = state.role().map(|role| role.title()).unwrap_or("Guest");
        let recent: Vec<Translation> = state.recent_translations().cloned().collect();
        (title, recent)
    };

    rsx! {
        div { class: "sv-home",
            section { class: "sv-home-intro",
                h1 { class: "sv-view-title", "Welcome, {title}" }
                p { class: "sv-muted", "Choose an action to get started" }
            }

            div { class: "sv-action-grid",
                ActionCard {
                    icon: "🤟",
                    title: "Sign Language Input",
                    description: "Translate signs from your camera into text and speech.",
                    action: "Start Signing",
                    on_open: move |_| navigate(app_state, ViewId::Sign),
                }
                ActionCard {
                    icon: "🎤",
                    title: "Speech Input",
                    description: "Transcribe spoken words into text.",
                    action: "Start Speaking",
                    on_open: move |_| navigate(app_state, ViewId::Speech),
                }
                ActionCard {
                    icon: "💬",
                    title: "Chat Assistant",
                    description: "Ask for help or practice a conversation.",
                    action: "Open Chat",
                    on_open: move |_| navigate(app_state, ViewId::Chat),
                }
            }

            section { class: "sv-card sv-recent",
                h2 { "Recent Translations" }
                if recent.is_empty() {
                    p { class: "sv-muted", "No translations yet. Saved translations will appear here." }
                } else {
                    ul { class: "sv-recent-list",
                        for (i, translation) in recent.into_iter().enumerate() {
                            RecentTranslation { key: "{i}", translation }
                        }
                    }
                }
            }

            section { class: "sv-card sv-help",
                h2 { "How to Use SignVerse" }
                ol { class: "sv-steps",
                    for (number, (step, detail)) in (1..).zip(STEPS) {
                        li { key: "{number}", class: "sv-step",
                            span { class: "sv-step-number", "{number}" }
                            div {
                                h3 { "{step}" }
                                p { class: "sv-muted", "{detail}" }
                            }
                        }
                    }
                }
                p { class: "sv-muted",
                    "Adjust text size, contrast, and speech in "
                    button {
                        class: "sv-link-btn",
                        onclick: move |_| navigate(app_state, ViewId::Settings),
                        "Settings"
                    }
                    "."
                }
            }
        }
    }
}

#[component]
fn ActionCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    action: &'static str,
    on_open: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "sv-card sv-action-card",
            span { class: "sv-action-icon", "{icon}" }
            h2 { "{title}" }
            p { class: "sv-muted", "{description}" }
            button {
                class: "sv-btn sv-btn--primary",
                onclick: move |_| on_open.call(()),
                "{action}"
            }
        }
    }
}

#[component]
fn RecentTranslation(translation: Translation) -> Element {
    let when = format_timestamp(translation.timestamp);

    rsx! {
        li { class: "sv-recent-item",
            p { class: "sv-recent-text", "{translation.text}" }
            div { class: "sv-recent-meta",
                if let Some(emotion) = translation.emotion {
                    EmotionIndicator { emotion, size: IndicatorSize::Sm }
                }
                span { class: "sv-muted", "{when}" }
            }
        }
    }
}
