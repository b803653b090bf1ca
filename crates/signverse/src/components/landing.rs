//! Onboarding: pick a role, learn what SignVerse does.

use dioxus::prelude::*;

use crate::components::use_app_state;
use crate::platform;
use crate::utils::SignalExt;
use signverse_core::UserRole;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🤟",
        "Complete Translation",
        "Translate between sign language, speech, and text in real time.",
    ),
    (
        "😊",
        "Emotional Context",
        "Detect facial emotion so the tone of a message is not lost in translation.",
    ),
    (
        "🌍",
        "Multilingual Support",
        "Work in the language you are most comfortable with.",
    ),
];

/// Spoken prompt listing every role.
pub(crate) fn role_prompt() -> String {
    let roles: Vec<_> = UserRole::ALL.iter().map(|role| role.title()).collect();
    format!("Who are you? Please select your role: {}", roles.join(", "))
}

pub(crate) fn role_icon(role: UserRole) -> &'static str {
    match role {
        UserRole::Deaf => "🧏",
        UserRole::Mute => "🤐",
        UserRole::Blind => "👁️",
        UserRole::Hearing => "👂",
        UserRole::Guest => "👤",
    }
}

#[component]
pub fn LandingView() -> Element {
    let mut app_state = use_app_state();

    rsx! {
        div { class: "sv-landing",
            section { class: "sv-hero",
                h1 { class: "sv-hero-title", "Welcome to SignVerse" }
                p { class: "sv-hero-tagline",
                    "Breaking communication barriers with AI-powered sign language translation"
                }
            }

            section { class: "sv-role-picker",
                div { class: "sv-role-picker-header",
                    h2 { "Who are you?" }
                    button {
                        class: "sv-icon-btn",
                        "aria-label": "Listen to options",
                        onclick: move |_| platform::speak(&role_prompt()),
                        "🔊"
                    }
                }
                div { class: "sv-role-grid",
                    for role in UserRole::ALL {
                        RoleCard {
                            key: "{role}",
                            role,
                            on_select: move |role| {
                                app_state.mutate(|state| state.select_role(role));
                            },
                        }
                    }
                }
            }

            section { class: "sv-about",
                h2 { "About SignVerse" }
                p {
                    "SignVerse bridges deaf, mute, blind, and hearing people. Sign to the camera, "
                    "speak into the microphone, or chat with the assistant, and SignVerse turns it "
                    "into text and speech along with the emotion behind it."
                }
                div { class: "sv-feature-grid",
                    for (icon, title, description) in FEATURES {
                        div { key: "{title}", class: "sv-card sv-feature-card",
                            span { class: "sv-feature-icon", "{icon}" }
                            h3 { "{title}" }
                            p { class: "sv-muted", "{description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RoleCard(role: UserRole, on_select: EventHandler<UserRole>) -> Element {
    let icon = role_icon(role);
    let title = role.title();
    let description = role.description();

    rsx! {
        div { class: "sv-card sv-role-card",
            span { class: "sv-role-icon", "{icon}" }
            h3 { "{title}" }
            p { class: "sv-muted", "{description}" }
            button {
                class: "sv-btn sv-btn--primary",
                "aria-label": "Select {title}",
                onclick: move |_| on_select.call(role),
                "Select"
            }
        }
    }
}
