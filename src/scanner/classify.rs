use std::path::Path;

use crate::config::ScannerSettings;

/// Whether `file_name` looks like a playable audio file, by case-insensitive
/// suffix match against the configured extension list.
pub fn is_audio_file(file_name: &str, settings: &ScannerSettings) -> bool {
    if file_name.is_empty() {
        return false;
    }
    let lower = file_name.to_ascii_lowercase();
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .any(|e| lower.ends_with(&format!(".{e}")))
}

/// Whether a directory must be skipped entirely: dot-directories, plus any
/// path containing a reserved segment (app-private storage, trash, caches).
pub fn is_prunable_dir(path: &Path, settings: &ScannerSettings) -> bool {
    let hidden = path
        .file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false);
    if hidden {
        return true;
    }

    let full = path.to_string_lossy();
    settings
        .pruned_segments
        .iter()
        .any(|seg| !seg.is_empty() && full.contains(seg.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_audio_file_matches_allow_list_case_insensitive() {
        let settings = ScannerSettings::default();
        assert!(is_audio_file("Song.mp3", &settings));
        assert!(is_audio_file("Song.MP3", &settings));
        assert!(is_audio_file("Song.FlAc", &settings));
        assert!(is_audio_file("book.m4b", &settings));
        assert!(is_audio_file("take.opus", &settings));
        assert!(!is_audio_file("Song.mp3x", &settings));
        assert!(!is_audio_file("Song.txt", &settings));
        assert!(!is_audio_file("Song", &settings));
        assert!(!is_audio_file("", &settings));
    }

    #[test]
    fn is_audio_file_is_suffix_only() {
        let settings = ScannerSettings::default();
        // Dotfiles match on suffix alone; hidden handling applies to
        // directories, not files.
        assert!(is_audio_file(".hidden.mp3", &settings));
        assert!(is_audio_file(".mp3", &settings));
        assert!(is_audio_file("archive.tar.mp3", &settings));
    }

    #[test]
    fn is_audio_file_respects_configured_extensions() {
        let settings = ScannerSettings {
            extensions: vec![".MID".into(), "  ".into()],
            ..ScannerSettings::default()
        };
        assert!(is_audio_file("riff.mid", &settings));
        assert!(!is_audio_file("riff.mp3", &settings));
    }

    #[test]
    fn prunes_dot_directories_and_reserved_segments() {
        let settings = ScannerSettings::default();
        assert!(is_prunable_dir(
            Path::new("/storage/emu/0/.thumbnails"),
            &settings
        ));
        assert!(is_prunable_dir(
            Path::new("/storage/emu/0/Android/data/com.app"),
            &settings
        ));
        assert!(is_prunable_dir(
            Path::new("/storage/emu/0/Android/obb/com.game"),
            &settings
        ));
        assert!(is_prunable_dir(Path::new("/storage/emu/0/x/.trash"), &settings));
        assert!(!is_prunable_dir(Path::new("/storage/emu/0/Music"), &settings));
        assert!(!is_prunable_dir(Path::new("/storage/emu/0/Android"), &settings));
    }
}
