// Shared models - Re-exports all domain-specific shapes
//
// This module is split into focused files by domain:
// - speaker.rs: speaker labeling modes and their display catalog
// - options.rs: transcription request options and legacy upgrade
// - job.rs: file processing jobs and queue status
// - transcript.rs: transcript segments and results
// - vocabulary.rs: boost vocabulary presets and extraction shapes

mod job;
mod options;
mod speaker;
mod transcript;
mod vocabulary;

pub use job::{FileJob, JobStatus};
pub use options::{
    parse_boost_words, LegacyTranscriptionOptions, SpeakerCount, StoredTranscriptionOptions,
    TranscriptionOptions, MAX_SPEAKERS, MIN_SPEAKERS,
};
pub use speaker::{ConversationType, SpeakerLabelKind, SpeakerLabelMode, SpeakerLabelOption};
pub use transcript::{Sentiment, Topic, TranscriptResult, TranscriptSegment};
pub use vocabulary::{
    resolve_boost_words, ExtractedCategory, ExtractedVocabulary, VocabularyPreset,
};
