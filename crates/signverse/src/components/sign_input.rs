//! Sign language input.
//!
//! "Enable Camera" asks the backend to start its camera pipeline, then polls
//! `/vtot/results` once per interval until the camera is stopped or the view
//! unmounts. The poll handle lives in a signal owned by this view, so tearing
//! the view down drops the handle and cancels the loop.

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

use crate::components::{use_app_state, use_backend, EmotionIndicator, IndicatorSize};
use crate::platform;
use crate::utils::SignalExt;
use signverse_core::detection::DetectionResult;
use signverse_core::polling::{poll_detection, PollHandle};
use signverse_core::AppState;

const FETCH_FAILED: &str = "Failed to fetch detection result. Please try again.";

/// Fold `result` into the live detection and read new text aloud if enabled.
fn apply_result(mut app_state: Signal<AppState>, result: &DetectionResult) {
    let announce = app_state.mutate(|state| {
        let before = state.detection().text().map(str::to_string);
        state.apply_detection(result);
        let after = state.detection().text();
        if state.settings().text_to_speech && after.is_some() && after != before.as_deref() {
            after.map(str::to_string)
        } else {
            None
        }
    });
    if let Some(text) = announce {
        platform::speak(&text);
    }
}

#[component]
pub fn SignInputView() -> Element {
    let mut app_state = use_app_state();
    let backend = use_backend();
    let mut camera_active = use_signal(|| false);
    let mut starting = use_signal(|| false);
    let mut fetching = use_signal(|| false);
    let mut poll_handle = use_signal(|| None::<PollHandle>);

    // The poll handle is dropped with this view's signals; only shared state needs resetting.
    use_drop(move || {
        app_state.mutate(|state| {
            state.set_translating(false);
            state.clear_detection();
        });
    });

    let start_backend = backend.clone();
    let start_camera = move |_| {
        let backend = start_backend.clone();
        starting.set(true);

        spawn(async move {
            let started = match backend.get() {
                Ok(b) => b.start_detection().await,
                Err(e) => Err(e),
            };
            starting.set(false);

            let b = match started.and_then(|_| backend.get()) {
                Ok(b) => b,
                Err(e) => {
                    error!("Failed to start sign detection: {}", e);
                    platform::alert(&format!("Failed to initialize camera backend. {}", e)).await;
                    return;
                }
            };

            info!("Camera session started");
            let handle = PollHandle::new();
            let token = handle.token();
            poll_handle.set(Some(handle));
            camera_active.set(true);
            app_state.mutate(|state| state.set_translating(true));

            poll_detection(b.as_ref(), backend.poll_interval(), token, |result| {
                apply_result(app_state, &result);
            })
            .await;
        });
    };

    let stop_camera = move |_| {
        if let Some(handle) = poll_handle.write().take() {
            handle.cancel();
        }
        camera_active.set(false);
        app_state.mutate(|state| state.set_translating(false));
        info!("Camera session stopped");
    };

    let fetch_backend = backend.clone();
    let fetch_result = move |_| {
        let backend = fetch_backend.clone();
        fetching.set(true);

        spawn(async move {
            let fetched = match backend.get() {
                Ok(b) => b.fetch_detection().await,
                Err(e) => Err(e),
            };
            fetching.set(false);

            match fetched {
                Ok(result) => apply_result(app_state, &result),
                Err(e) => {
                    error!("Manual detection fetch failed: {}", e);
                    platform::alert(FETCH_FAILED).await;
                }
            }
        });
    };

    let (live_text, live_emotion) = {
        let state = app_state.read();
        (
            state.detection().text().map(str::to_string),
            state.detection().emotion(),
        )
    };

    let camera_overlay = if camera_active() {
        let badge = match live_emotion {
            Some(emotion) => rsx! {
                div { class: "sv-camera-emotion",
                    EmotionIndicator { emotion, show_tooltip: true }
                }
            },
            None => rsx! { Fragment {} },
        };
        rsx! {
            {badge}
            button {
                class: "sv-camera-stop",
                "aria-label": "Stop camera",
                onclick: stop_camera,
                "✕"
            }
            div { class: "sv-camera-live",
                span { class: "sv-live-dot" }
                "Translating…"
            }
        }
    } else {
        rsx! {
            div { class: "sv-camera-overlay",
                span { class: "sv-camera-icon", "📷" }
                p { "Camera access required" }
                button {
                    class: "sv-btn sv-btn--primary",
                    disabled: starting(),
                    onclick: start_camera,
                    if starting() {
                        "Connecting…"
                    } else {
                        "Enable Camera"
                    }
                }
            }
        }
    };

    let translation_panel = match live_text {
        Some(text) => {
            let speak_text = text.clone();
            rsx! {
                div { class: "sv-card sv-translation",
                    h3 { "Translation" }
                    p { class: "sv-translation-text", "{text}" }
                    if let Some(emotion) = live_emotion {
                        div { class: "sv-translation-emotion",
                            span { class: "sv-muted", "Detected emotion:" }
                            EmotionIndicator { emotion, size: IndicatorSize::Sm }
                        }
                    }
                    div { class: "sv-translation-actions",
                        button {
                            class: "sv-link-btn",
                            onclick: move |_| platform::speak(&speak_text),
                            "Play as speech"
                        }
                        button {
                            class: "sv-btn sv-btn--secondary",
                            onclick: move |_| {
                                app_state.mutate(|state| state.save_live_translation());
                            },
                            "Save translation"
                        }
                    }
                }
            }
        }
        None => rsx! { Fragment {} },
    };

    rsx! {
        div { class: "sv-sign",
            div { class: "sv-camera", {camera_overlay} }

            div { class: "sv-sign-actions",
                button {
                    class: "sv-btn sv-btn--primary",
                    disabled: fetching(),
                    onclick: fetch_result,
                    if fetching() {
                        "Fetching…"
                    } else {
                        "Fetch Result"
                    }
                }
            }

            {translation_panel}
        }
    }
}
