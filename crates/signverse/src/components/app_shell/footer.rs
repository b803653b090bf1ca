use dioxus::prelude::*;

/// Footer with product tagline
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "sv-footer",
            span { class: "sv-footer-text",
                "SignVerse • Breaking communication barriers with AI-powered sign language translation"
            }
        }
    }
}
