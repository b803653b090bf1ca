//! Settings: role, language, accessibility toggles.
//!
//! Every change is merged into the persisted settings immediately.

use dioxus::prelude::*;

use super::landing::role_icon;
use crate::components::use_app_state;
use crate::utils::SignalExt;
use signverse_core::config::LANGUAGES;
use signverse_core::model::SettingsPatch;
use signverse_core::{UserRole, UserSettings};

/// An accessibility toggle: its label, description, current value and the patch that sets it.
struct Toggle {
    id: &'static str,
    label: &'static str,
    description: &'static str,
    read: fn(&UserSettings) -> bool,
    patch: fn(bool) -> SettingsPatch,
}

const TOGGLES: [Toggle; 4] = [
    Toggle {
        id: "textToSpeech",
        label: "Text to Speech",
        description: "Read translations aloud automatically",
        read: |s| s.text_to_speech,
        patch: SettingsPatch::text_to_speech,
    },
    Toggle {
        id: "highContrast",
        label: "High Contrast",
        description: "Increase contrast for better visibility",
        read: |s| s.high_contrast,
        patch: SettingsPatch::high_contrast,
    },
    Toggle {
        id: "largeText",
        label: "Large Text",
        description: "Increase text size throughout the app",
        read: |s| s.large_text,
        patch: SettingsPatch::large_text,
    },
    Toggle {
        id: "voiceFeedback",
        label: "Voice Feedback",
        description: "Speak interface actions (for blind users)",
        read: |s| s.voice_feedback,
        patch: SettingsPatch::voice_feedback,
    },
];

#[component]
pub fn SettingsView() -> Element {
    let mut app_state = use_app_state();
    let settings = app_state.read().settings().clone();

    rsx! {
        div { class: "sv-settings",
            section { class: "sv-card sv-settings-section",
                h2 { "Your Role" }
                div { class: "sv-role-options", role: "radiogroup", "aria-label": "Your role",
                    for role in UserRole::ALL {
                        RoleOption {
                            key: "{role}",
                            role,
                            selected: settings.role == role,
                            on_select: move |role| {
                                app_state.mutate(|state| state.update_settings(SettingsPatch::role(role)));
                            },
                        }
                    }
                }
            }

            section { class: "sv-card sv-settings-section",
                label { r#for: "language", h2 { "Language" } }
                select {
                    id: "language",
                    class: "sv-select",
                    value: "{settings.language}",
                    onchange: move |evt| {
                        let code = evt.value();
                        app_state.mutate(|state| state.update_settings(SettingsPatch::language(code)));
                    },
                    for (code, label) in LANGUAGES {
                        option {
                            key: "{code}",
                            value: "{code}",
                            selected: settings.language == code,
                            "{label}"
                        }
                    }
                }
            }

            section { class: "sv-card sv-settings-section",
                h2 { "Accessibility" }
                for toggle in TOGGLES.iter() {
                    ToggleOption {
                        key: "{toggle.id}",
                        id: toggle.id,
                        label: toggle.label,
                        description: toggle.description,
                        checked: (toggle.read)(&settings),
                        on_change: {
                            let patch = toggle.patch;
                            move |value: bool| {
                                app_state.mutate(|state| state.update_settings(patch(value)));
                            }
                        },
                    }
                }
            }

            section { class: "sv-card sv-settings-section",
                button {
                    class: "sv-btn sv-btn--secondary",
                    onclick: move |_| app_state.mutate(|state| state.reset_role()),
                    "Return to role selection"
                }
            }
        }
    }
}

#[component]
fn RoleOption(role: UserRole, selected: bool, on_select: EventHandler<UserRole>) -> Element {
    let class = if selected {
        "sv-role-option sv-role-option--selected"
    } else {
        "sv-role-option"
    };
    let icon = role_icon(role);
    let title = role.title();

    rsx! {
        button {
            class: "{class}",
            role: "radio",
            "aria-checked": "{selected}",
            onclick: move |_| on_select.call(role),
            span { class: "sv-role-option-icon", "{icon}" }
            span { class: "sv-role-option-label", "{title}" }
        }
    }
}

#[component]
fn ToggleOption(
    id: &'static str,
    label: &'static str,
    description: &'static str,
    checked: bool,
    on_change: EventHandler<bool>,
) -> Element {
    let class = if checked {
        "sv-switch sv-switch--on"
    } else {
        "sv-switch"
    };

    rsx! {
        div { class: "sv-toggle",
            div { class: "sv-toggle-text",
                label { r#for: "{id}", class: "sv-toggle-label", "{label}" }
                p { class: "sv-muted", "{description}" }
            }
            button {
                id: "{id}",
                class: "{class}",
                role: "switch",
                "aria-checked": "{checked}",
                onclick: move |_| on_change.call(!checked),
                span { class: "sv-switch-thumb" }
            }
        }
    }
}
