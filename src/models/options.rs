// Shared models - Transcription request options
use serde::{Deserialize, Serialize};

use super::speaker::{ConversationType, SpeakerLabelMode};

/// Smallest speaker count the service accepts when one is given explicitly.
pub const MIN_SPEAKERS: u32 = 2;
/// Largest speaker count the service accepts.
pub const MAX_SPEAKERS: u32 = 20;

/// Expected number of speakers: automatic detection or an explicit count.
///
/// On the wire this is the literal string `"auto"` or a bare number,
/// matching what the options panel stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeakerCount {
    #[default]
    Auto,
    Exact(u32),
}

impl SpeakerCount {
    /// Whether an explicit count lies in the accepted range.
    /// Rejecting invalid counts is the caller's job; this only classifies.
    pub fn is_valid(&self) -> bool {
        match self {
            SpeakerCount::Auto => true,
            SpeakerCount::Exact(n) => (MIN_SPEAKERS..=MAX_SPEAKERS).contains(n),
        }
    }
}

impl Serialize for SpeakerCount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SpeakerCount::Auto => serializer.serialize_str("auto"),
            SpeakerCount::Exact(n) => serializer.serialize_u32(*n),
        }
    }
}

impl<'de> Deserialize<'de> for SpeakerCount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(SpeakerCount::Exact(n)),
            Raw::Text(s) if s == "auto" => Ok(SpeakerCount::Auto),
            Raw::Text(other) => Err(serde::de::Error::custom(format!(
                "expected \"auto\" or a number, got \"{}\"",
                other
            ))),
        }
    }
}

/// A user's transcription request configuration, current shape.
///
/// `speakerLabelMode` is required on the wire; it is what distinguishes a
/// current payload from a legacy one. Everything else is defaulted so
/// partially-written configurations still read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionOptions {
    #[serde(default)]
    pub speaker_count: SpeakerCount,
    pub speaker_label_mode: SpeakerLabelMode,
    /// Comma-separated names or custom roles, exactly as typed.
    #[serde(default)]
    pub speaker_names_input: String,
    /// Derived from `boost_words_input`; see [`parse_boost_words`].
    #[serde(default)]
    pub boost_words: Vec<String>,
    #[serde(default)]
    pub boost_words_input: String,
    /// Ids of vocabulary presets to merge into the boost list.
    #[serde(default)]
    pub selected_presets: Vec<String>,
    #[serde(default)]
    pub include_summary: bool,
    #[serde(default)]
    pub detect_topics: bool,
    #[serde(default)]
    pub analyze_sentiment: bool,
    /// Auto-highlight salient phrases in the transcript.
    #[serde(default)]
    pub extract_key_phrases: bool,
}

impl TranscriptionOptions {
    /// Recompute the derived boost word list from the raw input text.
    pub fn refresh_boost_words(&mut self) {
        self.boost_words = parse_boost_words(&self.boost_words_input);
    }
}

/// The stored options shape from before speaker label modes existed.
/// Only ever read back from old configurations, never written.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyTranscriptionOptions {
    #[serde(default)]
    pub speaker_count: SpeakerCount,
    #[serde(default)]
    pub conversation_type: Option<ConversationType>,
    #[serde(default)]
    pub speaker_names: Vec<String>,
    #[serde(default)]
    pub boost_words: Vec<String>,
    #[serde(default)]
    pub boost_words_input: String,
    #[serde(default)]
    pub selected_presets: Vec<String>,
    #[serde(default)]
    pub include_summary: bool,
    #[serde(default)]
    pub detect_topics: bool,
    #[serde(default)]
    pub analyze_sentiment: bool,
    #[serde(default)]
    pub extract_key_phrases: bool,
}

impl LegacyTranscriptionOptions {
    /// Upgrade to the current shape.
    ///
    /// A non-empty `speaker_names` list wins over `conversation_type` and
    /// upgrades to known-names.
    pub fn upgrade(self) -> TranscriptionOptions {
        let conversation_type = self.conversation_type.unwrap_or(ConversationType::None);
        let (mode, names_input) = if self.speaker_names.is_empty() {
            (conversation_type.speaker_label_mode(), String::new())
        } else {
            (SpeakerLabelMode::KnownNames, self.speaker_names.join(", "))
        };
        log::info!(
            "Upgrading legacy transcription options: {} -> {}",
            conversation_type.as_str(),
            mode.as_str()
        );

        let boost_words = if self.boost_words.is_empty() {
            parse_boost_words(&self.boost_words_input)
        } else {
            self.boost_words
        };

        TranscriptionOptions {
            speaker_count: self.speaker_count,
            speaker_label_mode: mode,
            speaker_names_input: names_input,
            boost_words,
            boost_words_input: self.boost_words_input,
            selected_presets: self.selected_presets,
            include_summary: self.include_summary,
            detect_topics: self.detect_topics,
            analyze_sentiment: self.analyze_sentiment,
            extract_key_phrases: self.extract_key_phrases,
        }
    }
}

/// Any persisted options payload, current or legacy.
///
/// Old configurations carry no version field, so the current arm is
/// recognized by its `speakerLabelMode` discriminant instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StoredTranscriptionOptions {
    Current(TranscriptionOptions),
    Legacy(LegacyTranscriptionOptions),
}

impl StoredTranscriptionOptions {
    /// Bring any stored shape up to the current one.
    pub fn upgrade(self) -> TranscriptionOptions {
        match self {
            StoredTranscriptionOptions::Current(options) => options,
            StoredTranscriptionOptions::Legacy(legacy) => legacy.upgrade(),
        }
    }
}

/// Derive the boost word list from freeform input text.
///
/// Splits on commas and newlines, trims whitespace, drops empty entries
/// and repeats (first occurrence wins).
pub fn parse_boost_words(input: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for raw in input.split([',', '\n']) {
        let word = raw.trim();
        if word.is_empty() || words.iter().any(|w| w == word) {
            continue;
        }
        words.push(word.to_string());
    }
    words
}
