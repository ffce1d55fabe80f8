// Media file classification and filename handling

/// Video file suffixes the upload panel accepts.
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mov", ".avi", ".mkv", ".webm"];

/// Audio file suffixes the upload panel accepts.
pub const AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".wav", ".m4a", ".aac", ".ogg", ".flac"];

/// Every suffix accepted for upload: the video and audio lists combined.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[
    ".mp4", ".mov", ".avi", ".mkv", ".webm",
    ".mp3", ".wav", ".m4a", ".aac", ".ogg", ".flac",
];

/// Case-sensitive suffix test. Callers that want case-insensitive
/// acceptance lower-case the filename first.
pub fn is_video_file(filename: &str) -> bool {
    VIDEO_EXTENSIONS.iter().any(|ext| filename.ends_with(ext))
}

/// Case-sensitive suffix test, audio suffixes only.
pub fn is_audio_file(filename: &str) -> bool {
    AUDIO_EXTENSIONS.iter().any(|ext| filename.ends_with(ext))
}

/// Case-sensitive suffix test against every accepted suffix.
pub fn is_accepted_file(filename: &str) -> bool {
    ACCEPTED_EXTENSIONS.iter().any(|ext| filename.ends_with(ext))
}

/// Extract just the filename from a full path (cross-platform).
///
/// Handles Unix paths (/) and Windows paths (\) including UNC paths
/// (\\server\share). Returns "unknown" when the path is empty or ends in
/// a separator.
pub fn extract_filename(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    match normalized.rsplit('/').next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => "unknown".to_string(),
    }
}
