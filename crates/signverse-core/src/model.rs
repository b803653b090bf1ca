//! Core data types: roles, emotions, translations, chat messages, settings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::platform::now_millis;

// =============================================================================
// UserRole
// =============================================================================

/// Communication mode chosen at onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Deaf,
    Mute,
    Blind,
    Hearing,
    Guest,
}

impl UserRole {
    /// All roles in onboarding order.
    pub const ALL: [UserRole; 5] = [
        UserRole::Deaf,
        UserRole::Mute,
        UserRole::Blind,
        UserRole::Hearing,
        UserRole::Guest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Deaf => "deaf",
            UserRole::Mute => "mute",
            UserRole::Blind => "blind",
            UserRole::Hearing => "hearing",
            UserRole::Guest => "guest",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            UserRole::Deaf => "Deaf",
            UserRole::Mute => "Mute",
            UserRole::Blind => "Blind",
            UserRole::Hearing => "Hearing",
            UserRole::Guest => "Guest",
        }
    }

    /// One-line description shown on the onboarding card.
    pub fn description(&self) -> &'static str {
        match self {
            UserRole::Deaf => "Communicate using sign language and receive written responses",
            UserRole::Mute => {
                "Use sign language to communicate with verbal, non-signing individuals"
            }
            UserRole::Blind => "Speak and receive audio responses with emotional context",
            UserRole::Hearing => "Communicate with sign language users through text or speech",
            UserRole::Guest => "Explore the platform and learn about sign language communication",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Emotion
// =============================================================================

/// Affect label attached to translations and messages.
///
/// Deserialization never fails: unrecognized labels become [`Emotion::Neutral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Surprised,
    #[default]
    Neutral,
    Fear,
    Disgust,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprised,
        Emotion::Neutral,
        Emotion::Fear,
        Emotion::Disgust,
    ];

    /// Strict parse of a backend label (case-insensitive, surrounding whitespace ignored).
    pub fn from_label(label: &str) -> Option<Emotion> {
        let label = label.trim();
        Emotion::ALL
            .into_iter()
            .find(|emotion| emotion.as_str().eq_ignore_ascii_case(label))
    }

    /// Parse a backend label, falling back to neutral for anything unrecognized.
    pub fn normalize(label: &str) -> Emotion {
        Emotion::from_label(label).unwrap_or(Emotion::Neutral)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Surprised => "surprised",
            Emotion::Neutral => "neutral",
            Emotion::Fear => "fear",
            Emotion::Disgust => "disgust",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Emotion::Happy => "😊",
            Emotion::Sad => "😢",
            Emotion::Angry => "😠",
            Emotion::Surprised => "😲",
            Emotion::Neutral => "😐",
            Emotion::Fear => "😨",
            Emotion::Disgust => "🤢",
        }
    }

    /// Display label with a leading capital.
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Surprised => "Surprised",
            Emotion::Neutral => "Neutral",
            Emotion::Fear => "Fear",
            Emotion::Disgust => "Disgust",
        }
    }
}

impl From<String> for Emotion {
    fn from(label: String) -> Self {
        Emotion::normalize(&label)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Translation & Message
// =============================================================================

/// A text result derived from sign or speech input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    pub emotion: Option<Emotion>,
    /// Unix milliseconds
    pub timestamp: u64,
}

impl Translation {
    /// Creates a translation stamped with the current time.
    pub fn new(text: impl Into<String>, emotion: Option<Emotion>) -> Self {
        Self {
            text: text.into(),
            emotion,
            timestamp: now_millis(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One turn in the simulated chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub emotion: Option<Emotion>,
    /// Unix milliseconds
    pub timestamp: u64,
}

impl Message {
    pub fn user(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sender: Sender::User,
            text: text.into(),
            emotion: None,
            timestamp: now_millis(),
        }
    }

    pub fn bot(id: impl Into<String>, text: impl Into<String>, emotion: Emotion) -> Self {
        Self {
            id: id.into(),
            sender: Sender::Bot,
            text: text.into(),
            emotion: Some(emotion),
            timestamp: now_millis(),
        }
    }
}

// =============================================================================
// UserSettings
// =============================================================================

/// Persisted user preferences.
///
/// Field names serialize in camelCase to stay compatible with records written
/// by the browser build. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub role: UserRole,
    pub language: String,
    pub text_to_speech: bool,
    pub high_contrast: bool,
    pub large_text: bool,
    pub voice_feedback: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            role: UserRole::Guest,
            language: "en".to_string(),
            text_to_speech: true,
            high_contrast: false,
            large_text: false,
            voice_feedback: false,
        }
    }
}

impl UserSettings {
    /// Shallow merge: every field present in `patch` overwrites ours.
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(value) = patch.text_to_speech {
            self.text_to_speech = value;
        }
        if let Some(value) = patch.high_contrast {
            self.high_contrast = value;
        }
        if let Some(value) = patch.large_text {
            self.large_text = value;
        }
        if let Some(value) = patch.voice_feedback {
            self.voice_feedback = value;
        }
    }
}

/// Partial update to [`UserSettings`]. `None` fields leave the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub role: Option<UserRole>,
    pub language: Option<String>,
    pub text_to_speech: Option<bool>,
    pub high_contrast: Option<bool>,
    pub large_text: Option<bool>,
    pub voice_feedback: Option<bool>,
}

impl SettingsPatch {
    pub fn role(role: UserRole) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }

    pub fn language(code: impl Into<String>) -> Self {
        Self {
            language: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn text_to_speech(value: bool) -> Self {
        Self {
            text_to_speech: Some(value),
            ..Self::default()
        }
    }

    pub fn high_contrast(value: bool) -> Self {
        Self {
            high_contrast: Some(value),
            ..Self::default()
        }
    }

    pub fn large_text(value: bool) -> Self {
        Self {
            large_text: Some(value),
            ..Self::default()
        }
    }

    pub fn voice_feedback(value: bool) -> Self {
        Self {
            voice_feedback: Some(value),
            ..Self::default()
        }
    }

    /// Combine two patches; fields set in `later` win.
    pub fn then(self, later: SettingsPatch) -> SettingsPatch {
        SettingsPatch {
            role: later.role.or(self.role),
            language: later.language.or(self.language),
            text_to_speech: later.text_to_speech.or(self.text_to_speech),
            high_contrast: later.high_contrast.or(self.high_contrast),
            large_text: later.large_text.or(self.large_text),
            voice_feedback: later.voice_feedback.or(self.voice_feedback),
        }
    }
}
