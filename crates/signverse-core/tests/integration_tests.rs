//! End-to-end tests for the application store driven the way the views drive it.
//!
//! These tests exercise complete user flows:
//! 1. Onboarding: role selection → redirect → settings mirror → persistence
//! 2. Sign input: start session → poll results → live detection → save translation
//! 3. Speech input: start → stop → transcript recorded as a translation
//! 4. Chat: welcome → submission → delayed canned reply
//!
//! A scripted in-process backend stands in for the translation service.

use async_trait::async_trait;
use signverse_core::backend::TranslationBackend;
use signverse_core::chat::{ChatSimulator, CANNED_REPLIES};
use signverse_core::config::SETTINGS_STORAGE_KEY;
use signverse_core::conversation::WELCOME_MESSAGE_ID;
use signverse_core::detection::DetectionResult;
use signverse_core::model::SettingsPatch;
use signverse_core::polling::{poll_detection, PollHandle};
use signverse_core::preferences::{InMemoryStorage, KeyValueStorage};
use signverse_core::{
    AppState, BackendError, Emotion, RenderableView, Sender, Translation, UserRole, UserSettings,
    ViewId,
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Backend replaying scripted detection results and a fixed transcript.
struct ScriptedBackend {
    detections: RefCell<VecDeque<Result<DetectionResult, BackendError>>>,
    transcript: Option<String>,
    speech_started: Cell<bool>,
}

impl ScriptedBackend {
    fn new(detections: Vec<Result<DetectionResult, BackendError>>) -> Self {
        Self {
            detections: RefCell::new(detections.into()),
            transcript: None,
            speech_started: Cell::new(false),
        }
    }

    fn with_transcript(text: &str) -> Self {
        Self {
            transcript: Some(text.to_string()),
            ..Self::new(Vec::new())
        }
    }
}

#[async_trait(?Send)]
impl TranslationBackend for ScriptedBackend {
    async fn start_detection(&self) -> Result<(), BackendError> {
        Ok(())
    }

    async fn fetch_detection(&self) -> Result<DetectionResult, BackendError> {
        self.detections
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(DetectionResult::default()))
    }

    async fn start_speech(&self) -> Result<(), BackendError> {
        self.speech_started.set(true);
        Ok(())
    }

    async fn stop_speech(&self) -> Result<String, BackendError> {
        if !self.speech_started.replace(false) {
            return Err(BackendError::Status {
                endpoint: "/stot".to_string(),
                status: 409,
                body: "no active session".to_string(),
            });
        }
        self.transcript
            .clone()
            .ok_or_else(|| BackendError::Decode("missing 'text' field".to_string()))
    }
}

fn detection(signs: Option<&str>, emotion: Option<&str>) -> DetectionResult {
    DetectionResult {
        detected_signs: signs.map(str::to_string),
        dominant_emotion: emotion.map(str::to_string),
    }
}

fn app_state(storage: &InMemoryStorage) -> AppState {
    AppState::with_chat(
        Box::new(storage.clone()),
        ChatSimulator::seeded(11, Duration::from_millis(5)),
    )
}

// ============================================================================
// Onboarding
// ============================================================================

#[test]
fn test_every_role_lands_on_its_initial_view() {
    let cases = [
        (UserRole::Deaf, RenderableView::SignInput),
        (UserRole::Mute, RenderableView::SignInput),
        (UserRole::Blind, RenderableView::SpeechInput),
        (UserRole::Hearing, RenderableView::SpeechInput),
        (UserRole::Guest, RenderableView::Home),
    ];

    for (role, expected) in cases {
        let storage = InMemoryStorage::new();
        let mut state = app_state(&storage);
        assert_eq!(state.current_view(), RenderableView::Landing);
        assert!(state.select_role(role));
        assert_eq!(state.current_view(), expected, "role {role}");
    }
}

#[test]
fn test_settings_survive_restart() {
    let storage = InMemoryStorage::new();
    {
        let mut state = app_state(&storage);
        state.select_role(UserRole::Blind);
        state.update_settings(SettingsPatch::large_text(true));
        state.update_settings(SettingsPatch::language("fr"));
    }

    let restarted = app_state(&storage);
    let settings = restarted.settings();
    assert_eq!(settings.role, UserRole::Blind);
    assert!(settings.large_text);
    assert_eq!(settings.language, "fr");
    assert!(settings.text_to_speech);
    // The role lives in settings only; the new session starts at onboarding.
    assert_eq!(restarted.current_view(), RenderableView::Landing);
}

#[test]
fn test_corrupt_settings_reset_to_defaults() {
    let storage = InMemoryStorage::with_entry(SETTINGS_STORAGE_KEY, r#"{"role": 5"#);
    let state = app_state(&storage);
    assert_eq!(state.settings(), &UserSettings::default());
    assert_eq!(storage.get(SETTINGS_STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_navigation_through_every_view() {
    let storage = InMemoryStorage::new();
    let mut state = app_state(&storage);
    state.select_role(UserRole::Guest);

    let expected = [
        RenderableView::Home,
        RenderableView::SignInput,
        RenderableView::SpeechInput,
        RenderableView::Chat,
        RenderableView::Settings,
    ];
    for (view, expected) in ViewId::NAV.into_iter().zip(expected) {
        state.set_view(view);
        assert_eq!(state.current_view(), expected);
    }

    state.reset_role();
    state.set_view(ViewId::Chat);
    assert_eq!(state.current_view(), RenderableView::Landing);
}

// ============================================================================
// Sign Input
// ============================================================================

#[tokio::test]
async fn test_poller_feeds_live_detection() {
    let backend = ScriptedBackend::new(vec![
        Ok(detection(None, None)),
        Err(BackendError::Network("connection reset".to_string())),
        Ok(detection(Some("hello"), Some("happy"))),
        Ok(detection(None, Some("surprised"))),
    ]);
    let storage = InMemoryStorage::new();
    let mut state = app_state(&storage);
    state.select_role(UserRole::Deaf);

    backend.start_detection().await.unwrap();
    state.set_translating(true);

    let handle = PollHandle::new();
    let mut polls = 0;
    let delivered = poll_detection(&backend, Duration::from_millis(1), handle.token(), |result| {
        state.apply_detection(&result);
        polls += 1;
        if polls == 3 {
            handle.cancel();
        }
    })
    .await;

    assert_eq!(delivered, 3);
    assert_eq!(state.detection().text(), Some("hello"));
    assert_eq!(state.detection().emotion(), Some(Emotion::Surprised));

    assert!(state.save_live_translation());
    let saved: Vec<_> = state.translations().collect();
    assert_eq!(saved[0].text, "hello");
    assert_eq!(saved[0].emotion, Some(Emotion::Surprised));
}

#[tokio::test]
async fn test_manual_fetch_shares_state_with_poller() {
    let backend = ScriptedBackend::new(vec![
        Ok(detection(Some("thank you"), Some("happy"))),
        Ok(detection(Some("goodbye"), None)),
    ]);
    let storage = InMemoryStorage::new();
    let mut state = app_state(&storage);

    let manual = backend.fetch_detection().await.unwrap();
    state.apply_detection(&manual);
    assert_eq!(state.detection().text(), Some("thank you"));

    let handle = PollHandle::new();
    poll_detection(&backend, Duration::from_millis(1), handle.token(), |result| {
        state.apply_detection(&result);
        handle.cancel();
    })
    .await;

    assert_eq!(state.detection().text(), Some("goodbye"));
    assert_eq!(state.detection().emotion(), Some(Emotion::Happy));
}

// ============================================================================
// Speech Input
// ============================================================================

#[tokio::test]
async fn test_speech_transcript_recorded_newest_first() {
    let backend = ScriptedBackend::with_transcript("nice to meet you");
    let storage = InMemoryStorage::new();
    let mut state = app_state(&storage);
    state.add_translation(Translation::new("earlier", None));

    backend.start_speech().await.unwrap();
    let text = backend.stop_speech().await.unwrap();
    state.add_translation(Translation::new(text, Some(Emotion::Neutral)));

    let texts: Vec<_> = state.translations().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["nice to meet you", "earlier"]);
}

#[tokio::test]
async fn test_speech_stop_without_transcript_fails() {
    let backend = ScriptedBackend::new(Vec::new());
    backend.start_speech().await.unwrap();
    let err = backend.stop_speech().await.unwrap_err();
    assert!(matches!(err, BackendError::Decode(_)));
}

// ============================================================================
// Chat
// ============================================================================

#[tokio::test]
async fn test_chat_round_trip() {
    let storage = InMemoryStorage::new();
    let mut state = app_state(&storage);

    assert!(state.ensure_welcome());
    assert!(!state.ensure_welcome());
    assert_eq!(state.messages()[0].id, WELCOME_MESSAGE_ID);

    let pending = state.submit_chat("Where is the library?").unwrap();
    assert_eq!(state.messages().len(), 2);

    state.receive_reply(pending.deliver().await);

    let messages = state.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].sender, Sender::User);
    assert_eq!(messages[2].sender, Sender::Bot);
    assert!(CANNED_REPLIES
        .iter()
        .any(|r| r.text == messages[2].text && Some(r.emotion) == messages[2].emotion));
}

#[tokio::test]
async fn test_chat_reply_lands_after_leaving_chat_view() {
    let storage = InMemoryStorage::new();
    let mut state = app_state(&storage);
    state.select_role(UserRole::Deaf);
    state.set_view(ViewId::Chat);

    let pending = state.submit_chat("hi").unwrap();
    assert!(state.is_bot_typing());

    state.set_view(ViewId::Home);
    assert_eq!(state.current_view(), RenderableView::Home);

    state.receive_reply(pending.deliver().await);
    assert!(!state.is_bot_typing());

    state.set_view(ViewId::Chat);
    let messages = state.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[1].sender, Sender::Bot);
}

#[tokio::test]
async fn test_chat_ids_unique_across_many_turns() {
    let storage = InMemoryStorage::new();
    let mut state = app_state(&storage);
    state.ensure_welcome();

    for i in 0..10 {
        let pending = state.submit_chat(&format!("message {i}")).unwrap();
        state.receive_reply(pending.deliver().await);
    }

    let mut ids: Vec<_> = state.messages().iter().map(|m| m.id.clone()).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert_eq!(total, 21);
}
