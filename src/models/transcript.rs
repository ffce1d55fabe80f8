// Shared models - Transcript output
use serde::{Deserialize, Serialize};

/// Sentiment classification for one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// One utterance in a finished transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSegment {
    pub speaker: String,
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds. Never precedes `start`.
    pub end: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

impl TranscriptSegment {
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

/// A detected topic and its relevance to the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub label: String,
    pub relevance: f64,
}

/// Full output of one transcription run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptResult {
    /// Segments in chronological order (start ascending).
    pub segments: Vec<TranscriptSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<Topic>>,
}

impl TranscriptResult {
    /// True when segments are ordered by ascending start time.
    pub fn is_chronological(&self) -> bool {
        self.segments.windows(2).all(|pair| pair[0].start <= pair[1].start)
    }

    /// Distinct speaker labels, in order of first appearance.
    pub fn speakers(&self) -> Vec<&str> {
        let mut speakers: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if !speakers.contains(&segment.speaker.as_str()) {
                speakers.push(&segment.speaker);
            }
        }
        speakers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(speaker: &str, start: f64, end: f64) -> TranscriptSegment {
        TranscriptSegment {
            speaker: speaker.to_string(),
            text: format!("{} speaking", speaker),
            start,
            end,
            sentiment: None,
        }
    }

    #[test]
    fn test_segment_duration_never_negative() {
        assert_eq!(segment("A", 1.0, 3.5).duration(), 2.5);
        assert_eq!(segment("A", 3.0, 3.0).duration(), 0.0);
    }

    #[test]
    fn test_chronological_ordering_check() {
        let result = TranscriptResult {
            segments: vec![segment("A", 0.0, 2.0), segment("B", 2.0, 4.0), segment("A", 4.0, 6.0)],
            ..Default::default()
        };
        assert!(result.is_chronological());

        let shuffled = TranscriptResult {
            segments: vec![segment("B", 2.0, 4.0), segment("A", 0.0, 2.0)],
            ..Default::default()
        };
        assert!(!shuffled.is_chronological());
        assert!(TranscriptResult::default().is_chronological());
    }

    #[test]
    fn test_speakers_in_order_of_first_appearance() {
        let result = TranscriptResult {
            segments: vec![segment("Host", 0.0, 1.0), segment("Guest", 1.0, 2.0), segment("Host", 2.0, 3.0)],
            ..Default::default()
        };
        assert_eq!(result.speakers(), vec!["Host", "Guest"]);
    }

    #[test]
    fn test_result_wire_shape() {
        let result = TranscriptResult {
            segments: vec![TranscriptSegment {
                speaker: "Speaker A".to_string(),
                text: "Hello".to_string(),
                start: 0.0,
                end: 1.2,
                sentiment: Some(Sentiment::Positive),
            }],
            summary: Some("A greeting.".to_string()),
            topics: Some(vec![Topic {
                label: "greetings".to_string(),
                relevance: 0.9,
            }]),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["segments"][0]["speaker"], "Speaker A");
        assert_eq!(json["segments"][0]["sentiment"], "positive");
        assert_eq!(json["topics"][0]["relevance"], 0.9);

        let back: TranscriptResult = serde_json::from_str(&json.to_string()).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_optional_fields_absent_by_default() {
        let json = serde_json::to_value(TranscriptResult::default()).unwrap();
        assert!(json.get("summary").is_none());
        assert!(json.get("topics").is_none());

        let minimal: TranscriptResult = serde_json::from_str(r#"{"segments":[]}"#).unwrap();
        assert!(minimal.summary.is_none());
        assert!(minimal.topics.is_none());
    }
}
