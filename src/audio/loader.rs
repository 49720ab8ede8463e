// Reading audio files from disk into data URLs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Extensions offered by the open-file dialog
pub const DIALOG_EXTENSIONS: &[&str] = &["mp3", "wav"];

/// MIME labels by file extension for the data-URL prefix
const AUDIO_MIME_TYPES: &[(&str, &str)] = &[
    ("mp3", "audio/mp3"),
    ("wav", "audio/wav"),
    ("flac", "audio/flac"),
    ("ogg", "audio/ogg"),
    ("opus", "audio/ogg"),
    ("m4a", "audio/mp4"),
    ("aac", "audio/aac"),
];

/// Label used when the extension is missing or unrecognized
const FALLBACK_MIME: &str = "audio/mp3";

/// Failure reasons for loading an audio file, distinguishable by the caller.
#[derive(Debug, Error)]
pub enum AudioLoadError {
    #[error("audio file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("permission denied reading audio file: {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("failed to read audio file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
}

impl AudioLoadError {
    pub fn kind(&self) -> &'static str {
        match self {
            AudioLoadError::NotFound(_) => "not-found",
            AudioLoadError::PermissionDenied(_) => "permission-denied",
            AudioLoadError::Read { .. } => "read-error",
        }
    }
}

// Crosses the IPC boundary as { kind, message } so the renderer can tell
// the failure reasons apart.
impl Serialize for AudioLoadError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AudioLoadError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Pick the data-URL MIME label from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let Some(extension) = path.extension() else {
        return FALLBACK_MIME;
    };
    let ext_str = extension.to_string_lossy().to_lowercase();

    AUDIO_MIME_TYPES
        .iter()
        .find(|(ext, _)| *ext == ext_str)
        .map(|(_, mime)| *mime)
        .unwrap_or(FALLBACK_MIME)
}

/// Read the file at `path` in full and encode it as a base64 data URL
/// suitable for use as a playable media source.
///
/// The read is synchronous and attempt-once.
pub fn load_as_data_url<P: AsRef<Path>>(path: P) -> Result<String, AudioLoadError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => AudioLoadError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => AudioLoadError::PermissionDenied(path.to_path_buf()),
        _ => AudioLoadError::Read {
            path: path.to_path_buf(),
            source: error,
        },
    })?;

    Ok(format!(
        "data:{};base64,{}",
        mime_for_path(path),
        BASE64.encode(&bytes)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file(name: &str, ext: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be set")
            .as_nanos();
        std::env::temp_dir().join(format!("wavenote-{name}-{nanos}.{ext}"))
    }

    #[test]
    fn encodes_mp3_file_as_data_url() {
        let path = temp_file("encode", "mp3");
        let contents: &[u8] = &[0xFF, 0xFB, 0x90, 0x00, 0x12, 0x34];
        fs::write(&path, contents).expect("fixture should write");

        let url = load_as_data_url(&path).expect("load should succeed");
        let suffix = url
            .strip_prefix("data:audio/mp3;base64,")
            .expect("data URL should carry the mp3 prefix");
        let decoded = BASE64.decode(suffix).expect("suffix should be base64");
        assert_eq!(decoded, contents);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn labels_wav_files_by_extension() {
        let path = temp_file("wav-label", "wav");
        fs::write(&path, b"RIFF").expect("fixture should write");

        let url = load_as_data_url(&path).expect("load should succeed");
        assert!(url.starts_with("data:audio/wav;base64,"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = temp_file("missing", "mp3");
        let error = load_as_data_url(&path).expect_err("load should fail");
        assert_eq!(error.kind(), "not-found");
    }

    #[test]
    fn directory_is_a_read_error() {
        let error = load_as_data_url(std::env::temp_dir()).expect_err("load should fail");
        assert_eq!(error.kind(), "read-error");
    }

    #[test]
    fn mime_lookup_ignores_case_and_falls_back() {
        assert_eq!(mime_for_path(Path::new("a/b/Track.MP3")), "audio/mp3");
        assert_eq!(mime_for_path(Path::new("take.FLAC")), "audio/flac");
        assert_eq!(mime_for_path(Path::new("noext")), "audio/mp3");
        assert_eq!(mime_for_path(Path::new("weird.xyz")), "audio/mp3");
    }

    #[test]
    fn error_serializes_with_kind_and_message() {
        let error = AudioLoadError::NotFound(PathBuf::from("/tmp/gone.mp3"));
        let json = serde_json::to_value(&error).expect("error should serialize");
        assert_eq!(json["kind"], "not-found");
        assert!(json["message"]
            .as_str()
            .expect("message should be a string")
            .contains("gone.mp3"));
    }
}
