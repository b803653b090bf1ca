use dioxus::logger::tracing::debug;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use std::rc::Rc;

use crate::components::{use_app_state, EmotionIndicator, IndicatorSize};
use crate::utils::{format_timestamp, SignalExt};
use signverse_core::{Message, Sender};

/// Simulated assistant chat.
///
/// The welcome message is seeded on first open. Each submission schedules one
/// canned reply; the typing indicator stays up while any reply is pending.
/// Replies are delivered from a root-scoped task so they still land after the
/// user leaves this view.
#[component]
pub fn ChatView() -> Element {
    let mut app_state = use_app_state();
    let mut input = use_signal(String::new);
    let mut bottom = use_signal(|| None::<Rc<MountedData>>);

    use_effect(move || {
        if app_state.mutate(|state| state.ensure_welcome()) {
            debug!("Seeded chat welcome message");
        }
    });

    // Keep the newest message in view.
    use_effect(move || {
        let count = app_state.read().messages().len();
        if let Some(anchor) = bottom() {
            debug!("Scrolling chat to message {}", count);
            spawn(async move {
                let _ = anchor.scroll_to(ScrollBehavior::Smooth).await;
            });
        }
    });

    let mut submit = move || {
        let text = input.read().clone();
        let Some(pending) = app_state.mutate(|state| state.submit_chat(&text)) else {
            return;
        };
        input.set(String::new());

        spawn_forever(async move {
            let reply = pending.deliver().await;
            app_state.mutate(|state| state.receive_reply(reply));
        });
    };

    let messages: Vec<Message> = app_state.read().messages().to_vec();
    let typing = app_state.read().is_bot_typing();
    let empty_input = input.read().trim().is_empty();

    rsx! {
        div { class: "sv-card sv-chat",
            div { class: "sv-chat-header",
                p { class: "sv-chat-subtitle", "Ask for help or practice communication" }
            }

            div { class: "sv-chat-log", role: "log", "aria-live": "polite",
                for message in messages {
                    ChatBubble { key: "{message.id}", message }
                }
                if typing {
                    div { class: "sv-bubble sv-bubble--bot sv-bubble--typing", "Typing..." }
                }
                div {
                    class: "sv-chat-anchor",
                    onmounted: move |evt| bottom.set(Some(evt.data())),
                }
            }

            div { class: "sv-chat-input-row",
                input {
                    class: "sv-chat-input",
                    r#type: "text",
                    placeholder: "Type your message...",
                    "aria-label": "Message",
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                button {
                    class: "sv-btn sv-btn--primary",
                    "aria-label": "Send message",
                    disabled: empty_input,
                    onclick: move |_| submit(),
                    "Send"
                }
            }
        }
    }
}

#[component]
fn ChatBubble(message: Message) -> Element {
    let class = match message.sender {
        Sender::User => "sv-bubble sv-bubble--user",
        Sender::Bot => "sv-bubble sv-bubble--bot",
    };
    let when = format_timestamp(message.timestamp);

    rsx! {
        div { class: "{class}",
            p { class: "sv-bubble-text", "{message.text}" }
            div { class: "sv-bubble-meta",
                if let Some(emotion) = message.emotion {
                    EmotionIndicator { emotion, size: IndicatorSize::Sm, show_label: false }
                }
                span { class: "sv-bubble-time", "{when}" }
            }
        }
    }
}
