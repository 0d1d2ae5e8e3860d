//! Per-file operations on previously scanned tracks: resolving a playable
//! URL and best-effort deletion. Both report structured outcomes instead of
//! failing, mirroring the scan result shape.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct FileUrlOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Turn a scanned track's path into a `file://` URL the host player can load.
pub fn local_file_url(local_path: &str) -> FileUrlOutcome {
    if local_path.is_empty() {
        return FileUrlOutcome {
            success: false,
            url: None,
            error: Some("localPath is required".into()),
        };
    }

    let path = Path::new(local_path);
    if !path.exists() {
        return FileUrlOutcome {
            success: false,
            url: None,
            error: Some("File not found".into()),
        };
    }

    // Percent-encode each segment so spaces and non-ASCII names stay a
    // valid URL; separators are kept as-is.
    let encoded = local_path
        .split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/");

    FileUrlOutcome {
        success: true,
        url: Some(format!("file://{encoded}")),
        error: None,
    }
}

/// Delete a local track. Deleting a file that is already gone counts as
/// success.
pub fn delete_local_track(local_path: &str) -> DeleteOutcome {
    if local_path.is_empty() {
        return DeleteOutcome {
            success: false,
            error: Some("localPath is required".into()),
        };
    }

    let path = Path::new(local_path);
    if !path.exists() {
        return DeleteOutcome {
            success: true,
            error: None,
        };
    }

    match fs::remove_file(path) {
        Ok(()) => DeleteOutcome {
            success: true,
            error: None,
        },
        Err(err) => {
            debug!(path = local_path, %err, "delete failed");
            DeleteOutcome {
                success: false,
                error: Some(format!("Failed to delete file: {err}")),
            }
        }
    }
}
