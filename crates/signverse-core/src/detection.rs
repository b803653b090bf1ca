//! Live sign-detection state.
//!
//! The periodic poller and the manual "fetch result" action both feed the
//! same [`LiveDetection`], so the view renders one text and one emotion no
//! matter which path delivered them.

use serde::{Deserialize, Serialize};

use crate::model::{Emotion, Translation};

/// Body of `GET /vtot/results`. Both fields are null until detection finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    #[serde(default)]
    pub detected_signs: Option<String>,
    #[serde(default)]
    pub dominant_emotion: Option<String>,
}

impl DetectionResult {
    pub fn is_empty(&self) -> bool {
        self.detected_signs.as_deref().map_or(true, str::is_empty)
            && self.dominant_emotion.as_deref().map_or(true, str::is_empty)
    }
}

/// Latest detected text and emotion for the active camera session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveDetection {
    text: Option<String>,
    emotion: Option<Emotion>,
}

impl LiveDetection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn emotion(&self) -> Option<Emotion> {
        self.emotion
    }

    /// Fold a backend result in. Empty or missing fields keep the previous value.
    ///
    /// Returns whether anything changed.
    pub fn apply(&mut self, result: &DetectionResult) -> bool {
        let mut changed = false;

        if let Some(text) = result.detected_signs.as_deref().filter(|t| !t.is_empty()) {
            if self.text.as_deref() != Some(text) {
                self.text = Some(text.to_string());
                changed = true;
            }
        }

        if let Some(label) = result.dominant_emotion.as_deref().filter(|l| !l.is_empty()) {
            let emotion = Emotion::normalize(label);
            if self.emotion != Some(emotion) {
                self.emotion = Some(emotion);
                changed = true;
            }
        }

        changed
    }

    /// Forget the detected text, keeping the emotion.
    pub fn clear_text(&mut self) {
        self.text = None;
    }

    pub fn clear(&mut self) {
        self.text = None;
        self.emotion = None;
    }

    /// Snapshot the current text as a translation, if there is one.
    pub fn to_translation(&self) -> Option<Translation> {
        self.text
            .as_ref()
            .map(|text| Translation::new(text.clone(), self.emotion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(signs: Option<&str>, emotion: Option<&str>) -> DetectionResult {
        DetectionResult {
            detected_signs: signs.map(str::to_string),
            dominant_emotion: emotion.map(str::to_string),
        }
    }

    #[test]
    fn test_decode_null_fields() {
        let parsed: DetectionResult =
            serde_json::from_str(r#"{"detected_signs":null,"dominant_emotion":null}"#).unwrap();
        assert!(parsed.is_empty());

        let parsed: DetectionResult = serde_json::from_str("{}").unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_hello_happy_resolves_to_happy() {
        let parsed: DetectionResult =
            serde_json::from_str(r#"{"detected_signs":"hello","dominant_emotion":"happy"}"#)
                .unwrap();

        let mut live = LiveDetection::new();
        assert!(live.apply(&parsed));
        assert_eq!(live.text(), Some("hello"));
        assert_eq!(live.emotion(), Some(Emotion::Happy));
        assert_eq!(live.emotion().map(|e| e.glyph()), Some("😊"));
    }

    #[test]
    fn test_unknown_emotion_renders_neutral() {
        let mut live = LiveDetection::new();
        live.apply(&result(Some("thanks"), Some("contempt")));
        assert_eq!(live.emotion(), Some(Emotion::Neutral));
    }

    #[test]
    fn test_missing_fields_keep_previous_values() {
        let mut live = LiveDetection::new();
        live.apply(&result(Some("hello"), Some("sad")));

        assert!(!live.apply(&result(None, None)));
        assert!(!live.apply(&result(Some(""), Some(""))));
        assert_eq!(live.text(), Some("hello"));
        assert_eq!(live.emotion(), Some(Emotion::Sad));

        assert!(live.apply(&result(None, Some("fear"))));
        assert_eq!(live.text(), Some("hello"));
        assert_eq!(live.emotion(), Some(Emotion::Fear));
    }

    #[test]
    fn test_identical_result_reports_no_change() {
        let mut live = LiveDetection::new();
        let r = result(Some("yes"), Some("happy"));
        assert!(live.apply(&r));
        assert!(!live.apply(&r));
    }

    #[test]
    fn test_to_translation_carries_emotion() {
        let mut live = LiveDetection::new();
        assert!(live.to_translation().is_none());

        live.apply(&result(Some("good morning"), Some("surprised")));
        let translation = live.to_translation().unwrap();
        assert_eq!(translation.text, "good morning");
        assert_eq!(translation.emotion, Some(Emotion::Surprised));
    }

    #[test]
    fn test_clear() {
        let mut live = LiveDetection::new();
        live.apply(&result(Some("a"), Some("angry")));
        live.clear_text();
        assert_eq!(live.text(), None);
        assert_eq!(live.emotion(), Some(Emotion::Angry));
        live.clear();
        assert_eq!(live, LiveDetection::new());
    }
}
