// EchoScribe core - shared data contracts for the transcription assistant
//
// This crate owns the shapes passed between the upload pipeline, the
// options panel, and the history store:
// - Speaker labeling modes and their display catalog
// - Transcription request options, with upgrade from legacy configurations
// - File job and transcript result shapes
// - Accepted media extensions and filename handling
//
// It performs no I/O and holds no state; everything here is safe to use
// from any thread without coordination.

pub mod media;
pub mod models;

pub use media::{
    extract_filename, is_accepted_file, is_audio_file, is_video_file, ACCEPTED_EXTENSIONS,
    AUDIO_EXTENSIONS, VIDEO_EXTENSIONS,
};
pub use models::{
    parse_boost_words, resolve_boost_words, ConversationType, ExtractedCategory,
    ExtractedVocabulary, FileJob, JobStatus, LegacyTranscriptionOptions, Sentiment, SpeakerCount,
    SpeakerLabelKind, SpeakerLabelMode, SpeakerLabelOption, StoredTranscriptionOptions, Topic,
    TranscriptResult, TranscriptSegment, TranscriptionOptions, VocabularyPreset, MAX_SPEAKERS,
    MIN_SPEAKERS,
};
