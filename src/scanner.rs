//! Filesystem scanner: traversal, classification and tag extraction.
//!
//! The pipeline lives in the submodules: `classify` decides what to look at,
//! `filename` derives fallback fields, `metadata` reads container tags and
//! `walk` ties them together over a directory tree.

mod classify;
mod filename;
mod metadata;
mod model;
mod walk;

pub use classify::{is_audio_file, is_prunable_dir};
pub use filename::{ParsedName, parse_file_name};
pub use metadata::extract;
pub use model::{AudioTrack, ScanOutcome};
pub use walk::walk;

#[cfg(test)]
mod tests;
