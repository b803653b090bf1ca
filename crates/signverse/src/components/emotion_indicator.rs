use dioxus::prelude::*;
use signverse_core::Emotion;

const EMOTION_TOOLTIP: &str =
    "Emotion affects how the message is interpreted. This helps capture the full context of communication.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorSize {
    Sm,
    #[default]
    Md,
}

impl IndicatorSize {
    fn class(&self) -> &'static str {
        match self {
            IndicatorSize::Sm => "sv-emotion--sm",
            IndicatorSize::Md => "sv-emotion--md",
        }
    }
}

/// Colour class for an emotion badge.
pub(crate) fn emotion_class(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Happy => "sv-emotion--happy",
        Emotion::Sad => "sv-emotion--sad",
        Emotion::Angry => "sv-emotion--angry",
        Emotion::Surprised => "sv-emotion--surprised",
        Emotion::Neutral => "sv-emotion--neutral",
        Emotion::Fear => "sv-emotion--fear",
        Emotion::Disgust => "sv-emotion--disgust",
    }
}

/// Glyph and label for a detected emotion, with an optional explainer tooltip.
#[component]
pub fn EmotionIndicator(
    emotion: Emotion,
    #[props(default)] size: IndicatorSize,
    #[props(default = true)] show_label: bool,
    #[props(default = false)] show_tooltip: bool,
) -> Element {
    let mut tooltip_visible = use_signal(|| false);
    let class = format!("sv-emotion {} {}", emotion_class(emotion), size.class());
    let glyph = emotion.glyph();
    let label = emotion.label();

    rsx! {
        span {
            class: "{class}",
            role: "img",
            "aria-label": "Emotion: {label}",
            onmouseenter: move |_| {
                if show_tooltip {
                    tooltip_visible.set(true);
                }
            },
            onmouseleave: move |_| tooltip_visible.set(false),
            span { class: "sv-emotion-glyph", "{glyph}" }
            if show_label {
                span { class: "sv-emotion-label", "{label}" }
            }
            if tooltip_visible() {
                span { class: "sv-emotion-tooltip", role: "tooltip", "{EMOTION_TOOLTIP}" }
            }
        }
    }
}
