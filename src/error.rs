use thiserror::Error;

/// Scan-level failures. Per-file and per-directory problems are absorbed
/// inside the walk; only whole-scan conditions surface here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// A scan was requested while another one is in flight.
    #[error("scan already in progress")]
    Busy,
    /// The worker thread died before reporting a result.
    #[error("scan worker terminated unexpectedly")]
    WorkerLost,
}
