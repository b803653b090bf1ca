//! Output formatting for detection results and transcripts.
//!
//! Supports both human-readable terminal output and JSON for scripting.

use serde::Serialize;
use signverse_core::detection::DetectionResult;
use signverse_core::Emotion;

/// JSON shape of one detection result.
#[derive(Serialize)]
pub struct JsonDetection {
    pub detected_signs: Option<String>,
    /// Raw label from the backend
    pub dominant_emotion: Option<String>,
    /// Label after normalization (unknown labels become "neutral")
    pub emotion: Option<Emotion>,
}

impl From<&DetectionResult> for JsonDetection {
    fn from(result: &DetectionResult) -> Self {
        let label = result
            .dominant_emotion
            .clone()
            .filter(|label| !label.is_empty());
        Self {
            detected_signs: result.detected_signs.clone().filter(|text| !text.is_empty()),
            emotion: label.as_deref().map(Emotion::normalize),
            dominant_emotion: label,
        }
    }
}

#[derive(Serialize)]
struct JsonTranscript<'a> {
    text: &'a str,
    emotion: Emotion,
}

/// Formats a detection result as a single JSON line.
pub fn format_detection_json(result: &DetectionResult) -> String {
    serde_json::to_string(&JsonDetection::from(result)).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a detection result for the terminal.
pub fn format_detection_human(result: &DetectionResult) -> String {
    let detection = JsonDetection::from(result);
    let mut lines = Vec::new();

    match &detection.detected_signs {
        Some(text) => lines.push(format!("Signs:   {}", text)),
        None => lines.push("Signs:   (nothing detected yet)".to_string()),
    }
    if let Some(emotion) = detection.emotion {
        lines.push(format!("Emotion: {} {}", emotion.glyph(), emotion.label()));
    }

    lines.join("\n")
}

/// Formats a speech transcript. Transcripts are always saved as neutral.
pub fn format_transcript_json(text: &str) -> String {
    let output = JsonTranscript {
        text,
        emotion: Emotion::Neutral,
    };
    serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_transcript_human(text: &str) -> String {
    if text.trim().is_empty() {
        "No speech was transcribed.".to_string()
    } else {
        format!("Transcript: {}", text)
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
    fn test_format_detection_human() {
        let output = format_detection_human(&result(Some("hello"), Some("happy")));
        assert_eq!(output, "Signs:   hello\nEmotion: 😊 Happy");
    }

    #[test]
    fn test_format_detection_human_empty() {
        let output = format_detection_human(&result(None, None));
        assert_eq!(output, "Signs:   (nothing detected yet)");
    }

    #[test]
    fn test_format_detection_json_normalizes_emotion() {
        let output = format_detection_json(&result(Some("thanks"), Some("Bored")));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["detected_signs"], "thanks");
        assert_eq!(value["dominant_emotion"], "Bored");
        assert_eq!(value["emotion"], "neutral");
    }

    #[test]
    fn test_format_detection_json_nulls() {
        let output = format_detection_json(&result(Some(""), None));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["detected_signs"].is_null());
        assert!(value["emotion"].is_null());
    }

    #[test]
    fn test_format_transcript() {
        assert_eq!(format_transcript_human("good morning"), "Transcript: good morning");
        assert_eq!(format_transcript_human(""), "No speech was transcribed.");
        assert_eq!(
            format_transcript_json("hi"),
            r#"{"text":"hi","emotion":"neutral"}"#
        );
    }
}
