use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tunescan/config.toml` or
/// `~/.config/tunescan/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TUNESCAN__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scanner: ScannerSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScannerSettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Cap on directory recursion depth (root = 0). Directories deeper than
    /// this are never descended into.
    pub max_depth: usize,
    /// Tracks with a known duration below this many milliseconds are dropped
    /// from results entirely. Tracks with an unknown duration are kept.
    pub min_duration_ms: u64,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Path segments marking directories to skip whole (app-private storage,
    /// trash, caches).
    pub pruned_segments: Vec<String>,
    /// Tag values that mean "no data" and never override filename-derived
    /// fields.
    pub unknown_tag_sentinels: Vec<String>,
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            extensions: vec![
                "mp3".into(),
                "flac".into(),
                "wav".into(),
                "m4a".into(),
                "aac".into(),
                "ogg".into(),
                "wma".into(),
                "ape".into(),
                "opus".into(),
                "m4b".into(),
            ],
            max_depth: 20,
            min_duration_ms: 60_000,
            follow_links: true,
            pruned_segments: vec![
                "/Android/data/".into(),
                "/Android/obb/".into(),
                ".trash".into(),
                ".cache".into(),
            ],
            unknown_tag_sentinels: vec!["<unknown>".into()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Pretty-print the JSON outcome on stdout.
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { pretty: true }
    }
}
