use std::fs;
use std::path::Path;

use lofty::prelude::*;
use lofty::tag::{ItemKey, Tag};
use tracing::{debug, trace};

use crate::config::ScannerSettings;

use super::filename::parse_file_name;
use super::model::{AudioTrack, track_id};

/// Read one candidate file into an [`AudioTrack`].
///
/// Fields are seeded from the filename and overridden by container tags when
/// those carry real data. Returns `None` for unreadable entries and for
/// tracks shorter than `settings.min_duration_ms`; tag-read failures degrade
/// to the filename-derived fields instead of failing the scan.
pub fn extract(path: &Path, settings: &ScannerSettings) -> Option<AudioTrack> {
    let file_meta = fs::metadata(path).ok()?;

    let file_name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
    let parsed = parse_file_name(file_name);

    let mut name = parsed.title;
    let mut artist = parsed.artist;
    let mut album: Option<String> = None;
    let mut duration_ms: u64 = 0;

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            let millis = tagged.properties().duration().as_millis() as u64;
            if millis > 0 {
                if millis < settings.min_duration_ms {
                    trace!(path = %path.display(), millis, "dropping short track");
                    return None;
                }
                duration_ms = millis;
            }

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.get_string(ItemKey::TrackTitle) {
                    if !v.trim().is_empty() {
                        name = v.trim().to_string();
                    }
                }
                artist = real_tag_value(tag, &ItemKey::TrackArtist, settings).or(artist);
                album = real_tag_value(tag, &ItemKey::AlbumTitle, settings);
            }
        }
        Err(err) => {
            // Corrupt or unsupported container: keep the filename-derived
            // fields and an unknown duration.
            debug!(path = %path.display(), %err, "tag read failed, keeping filename fields");
        }
    }

    Some(AudioTrack {
        id: track_id(path),
        name,
        artist,
        album,
        duration: duration_ms,
        local_path: path.to_path_buf(),
        file_size: file_meta.len(),
    })
}

/// A tag value that is non-empty and not one of the "no data" sentinels.
fn real_tag_value(tag: &Tag, key: &ItemKey, settings: &ScannerSettings) -> Option<String> {
    tag.get_string(*key)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .filter(|v| !settings.unknown_tag_sentinels.iter().any(|s| s == v))
        .map(str::to_string)
}
