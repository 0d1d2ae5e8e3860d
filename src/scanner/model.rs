use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ScanError;

/// One playable audio file found during a scan.
///
/// Serialized field names (`localPath`, `fileSize`) match what the host
/// transport expects on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioTrack {
    /// Stable within one scan, derived from the file path.
    pub id: String,
    /// Display title; never empty (falls back to the filename-derived title).
    pub name: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    /// Duration in milliseconds; 0 means unknown. Positive values are always
    /// at least the configured minimum, shorter tracks are dropped whole.
    pub duration: u64,
    pub local_path: PathBuf,
    pub file_size: u64,
}

/// Structured scan result handed to the transport layer.
#[derive(Debug, Serialize)]
pub struct ScanOutcome {
    pub success: bool,
    pub files: Vec<AudioTrack>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScanOutcome {
    pub fn from_result(result: Result<Vec<AudioTrack>, ScanError>) -> Self {
        match result {
            Ok(files) => Self {
                success: true,
                files,
                error: None,
            },
            Err(e) => Self {
                success: false,
                files: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

pub(crate) fn track_id(path: &Path) -> String {
    let mut hasher = DefaultHasher::new();
    path.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}
