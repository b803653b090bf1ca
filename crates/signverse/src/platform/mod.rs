//! Platform bridges for browser and desktop.
//!
//! The views call these instead of touching `web_sys` or OS APIs directly:
//!
//! - **Web**: `window.alert`, `window.open`, `matchMedia`, `speechSynthesis`,
//!   and class toggles on `<html>`/`<body>`
//! - **Desktop**: native message dialogs via `rfd`, the OS URL opener, and
//!   no-ops where the webview has no equivalent
//!
//! Failures are logged and swallowed. None of these are allowed to take a
//! view down.

use dioxus::logger::tracing::{debug, warn};
use signverse_core::presentation::PresentationFlags;

#[cfg(target_arch = "wasm32")]
use signverse_core::config::DOCUMENT_TITLE;

/// Show a blocking error message to the user.
#[cfg(target_arch = "wasm32")]
pub async fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        warn!("No window for alert: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        warn!("alert() failed: {:?}", e);
    }
}

/// Show a blocking error message to the user.
#[cfg(not(target_arch = "wasm32"))]
pub async fn alert(message: &str) {
    rfd::AsyncMessageDialog::new()
        .set_title("SignVerse")
        .set_description(message)
        .set_level(rfd::MessageLevel::Error)
        .set_buttons(rfd::MessageButtons::Ok)
        .show()
        .await;
}

/// Open `url` outside the app (new tab on web, default browser on desktop).
#[cfg(target_arch = "wasm32")]
pub fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        warn!("Failed to open {}: {:?}", url, e);
    }
}

/// Open `url` outside the app (new tab on web, default browser on desktop).
#[cfg(not(target_arch = "wasm32"))]
pub fn open_external(url: &str) {
    use std::process::Command;

    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    let result = Command::new("cmd").args(["/C", "start", "", url]).spawn();
    #[cfg(all(unix, not(target_os = "macos")))]
    let result = Command::new("xdg-open").arg(url).spawn();

    if let Err(e) = result {
        warn!("Failed to open {}: {}", url, e);
    }
}

/// Device colour-scheme preference.
#[cfg(target_arch = "wasm32")]
pub fn prefers_dark_mode() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Device colour-scheme preference.
#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_dark_mode() -> bool {
    false
}

/// Speak `text` with the browser's speech synthesis.
#[cfg(target_arch = "wasm32")]
pub fn speak(text: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let utterance = match web_sys::SpeechSynthesisUtterance::new_with_text(text) {
        Ok(utterance) => utterance,
        Err(e) => {
            warn!("Failed to create utterance: {:?}", e);
            return;
        }
    };
    match window.speech_synthesis() {
        Ok(synth) => synth.speak(&utterance),
        Err(e) => warn!("Speech synthesis unavailable: {:?}", e),
    }
}

/// Desktop has no speech synthesis bridge yet.
#[cfg(not(target_arch = "wasm32"))]
pub fn speak(text: &str) {
    debug!("speak (no synthesizer on desktop): {}", text);
}

/// Mirror presentation flags onto `<html>` and `<body>` and set the title.
#[cfg(target_arch = "wasm32")]
pub fn apply_document_classes(flags: PresentationFlags) {
    use signverse_core::presentation::{DARK_CLASS, HIGH_CONTRAST_CLASS, LARGE_TEXT_CLASS};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root
            .class_list()
            .toggle_with_force(LARGE_TEXT_CLASS, flags.large_text);
    }
    if let Some(body) = document.body() {
        let classes = body.class_list();
        let _ = classes.toggle_with_force(HIGH_CONTRAST_CLASS, flags.high_contrast);
        let _ = classes.toggle_with_force(DARK_CLASS, flags.dark);
    }
    document.set_title(DOCUMENT_TITLE);
    debug!("Document classes: {:?}", flags);
}

/// Desktop styles from the app root's class list instead.
#[cfg(not(target_arch = "wasm32"))]
pub fn apply_document_classes(flags: PresentationFlags) {
    debug!("Presentation flags: {:?}", flags);
}
