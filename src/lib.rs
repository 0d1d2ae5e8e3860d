//! tunescan: locate playable audio files under a storage root.
//!
//! The crate walks a directory tree, classifies entries against an audio
//! extension allow-list, reads container tags per file and aggregates the
//! survivors into a stable track list. One scan runs at a time; concurrent
//! requests are rejected, not queued.

pub mod access;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod files;
pub mod scanner;

pub use coordinator::ScanCoordinator;
pub use error::ScanError;
pub use scanner::{AudioTrack, ScanOutcome};
