// Shared models - File processing jobs
use serde::{Deserialize, Serialize};

use crate::media::extract_filename;

/// Where a file currently is in the upload/transcription pipeline.
///
/// Progression is queued -> converting/uploading -> transcribing ->
/// generating -> complete, with error reachable from any non-terminal
/// state. The pipeline enforces transitions; this type only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Queued,
    Converting,
    Uploading,
    Transcribing,
    Generating,
    Complete,
    Error,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::Converting => "converting",
            JobStatus::Uploading => "uploading",
            JobStatus::Transcribing => "transcribing",
            JobStatus::Generating => "generating",
            JobStatus::Complete => "complete",
            JobStatus::Error => "error",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "queued" => JobStatus::Queued,
            "converting" => JobStatus::Converting,
            "uploading" => JobStatus::Uploading,
            "transcribing" => JobStatus::Transcribing,
            "generating" => JobStatus::Generating,
            "complete" => JobStatus::Complete,
            "error" => JobStatus::Error,
            _ => JobStatus::Queued,
        }
    }

    /// Terminal states never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Complete | JobStatus::Error)
    }

    /// In-flight work: neither waiting in the queue nor finished.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            JobStatus::Converting
                | JobStatus::Uploading
                | JobStatus::Transcribing
                | JobStatus::Generating
        )
    }
}

/// A single file moving through the processing pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileJob {
    pub id: String,
    pub filename: String,
    pub filepath: String,
    pub status: JobStatus,
    /// Progress percentage for the current stage (0-100).
    pub progress: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    /// Saved history entry, for jumping to the transcript view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_id: Option<String>,
}

impl FileJob {
    /// Queue a new job for the file at `filepath`.
    pub fn new(filepath: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            filename: extract_filename(filepath),
            filepath: filepath.to_string(),
            status: JobStatus::Queued,
            progress: 0.0,
            error: None,
            output_path: None,
            history_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_job_starts_queued() {
        let job = FileJob::new("/recordings/standup.mp4");
        assert_eq!(job.status, JobStatus::Queued);
        assert_eq!(job.progress, 0.0);
        assert_eq!(job.filename, "standup.mp4");
        assert!(job.error.is_none());
        assert!(!job.id.is_empty());
    }

    #[test]
    fn test_new_job_extracts_windows_filename() {
        let job = FileJob::new("C:\\Users\\me\\clip.wav");
        assert_eq!(job.filename, "clip.wav");
    }

    #[test]
    fn test_status_wire_strings() {
        for status in [
            JobStatus::Queued,
            JobStatus::Converting,
            JobStatus::Uploading,
            JobStatus::Transcribing,
            JobStatus::Generating,
            JobStatus::Complete,
            JobStatus::Error,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(JobStatus::from_str(status.as_str()), status);
        }
    }

    #[test]
    fn test_terminal_and_active_classification() {
        assert!(JobStatus::Complete.is_terminal());
        assert!(JobStatus::Error.is_terminal());
        assert!(!JobStatus::Queued.is_terminal());
        assert!(!JobStatus::Transcribing.is_terminal());

        assert!(JobStatus::Uploading.is_active());
        assert!(JobStatus::Generating.is_active());
        assert!(!JobStatus::Queued.is_active());
        assert!(!JobStatus::Complete.is_active());
    }

    #[test]
    fn test_job_serializes_without_empty_optionals() {
        let job = FileJob::new("/a/b.mp3");
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["status"], "queued");
        assert_eq!(json["filename"], "b.mp3");
        assert!(json.get("error").is_none());
        assert!(json.get("outputPath").is_none());
        assert!(json.get("historyId").is_none());
    }

    #[test]
    fn test_job_deserializes_with_optionals() {
        let json = r#"{
            "id": "j1",
            "filename": "b.mp3",
            "filepath": "/a/b.mp3",
            "status": "error",
            "progress": 40.0,
            "error": "upload failed",
            "historyId": "h1"
        }"#;
        let job: FileJob = serde_json::from_str(json).unwrap();
        assert_eq!(job.status, JobStatus::Error);
        assert_eq!(job.error.as_deref(), Some("upload failed"));
        assert_eq!(job.history_id.as_deref(), Some("h1"));
        assert!(job.output_path.is_none());
    }
}
