use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::config::ScannerSettings;

use super::classify::{is_audio_file, is_prunable_dir};
use super::metadata::extract;
use super::model::AudioTrack;

/// Walk `root` and collect every playable audio file reachable within the
/// configured depth bound.
///
/// Directories deeper than `max_depth` (root = 0) are not descended into;
/// files sitting directly inside a depth-`max_depth` directory are still
/// visited, hence the `+ 1` on the walker cap. Unreadable directories,
/// vanished entries and symlink loops are skipped without aborting the rest
/// of the walk; an unusable root simply yields an empty list.
pub fn walk(root: &Path, settings: &ScannerSettings) -> Vec<AudioTrack> {
    let mut tracks: Vec<AudioTrack> = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(settings.follow_links)
        .max_depth(settings.max_depth.saturating_add(1));

    for entry in walker
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || !e.file_type().is_dir() || !is_prunable_dir(e.path(), settings)
        })
        .filter_map(|res| match res {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(%err, "skipping unreadable entry");
                None
            }
        })
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_str().unwrap_or("");
        if !is_audio_file(file_name, settings) {
            continue;
        }
        if let Some(track) = extract(entry.path(), settings) {
            tracks.push(track);
        }
    }

    tracks.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.local_path.cmp(&b.local_path))
    });
    tracks
}
