//! Single-flight scan coordination.
//!
//! One scan may run at a time, gated by an atomic flag. The walk itself runs
//! on a dedicated worker thread; the caller blocks until the result is
//! marshaled back over a channel. Rejected requests are not queued.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;

use tracing::info;

use crate::config::ScannerSettings;
use crate::error::ScanError;
use crate::scanner::{AudioTrack, walk};

pub struct ScanCoordinator {
    scanning: Arc<AtomicBool>,
    settings: ScannerSettings,
}

impl ScanCoordinator {
    pub fn new(settings: ScannerSettings) -> Self {
        Self {
            scanning: Arc::new(AtomicBool::new(false)),
            settings,
        }
    }

    /// Whether a scan is currently in flight.
    pub fn is_scanning(&self) -> bool {
        self.scanning.load(Ordering::SeqCst)
    }

    /// Run a full scan of `root` on a worker thread and wait for the result.
    ///
    /// Returns [`ScanError::Busy`] without touching the filesystem when a
    /// scan is already in flight. The scanning flag returns to idle before
    /// the result is delivered, on every exit path including a worker panic.
    pub fn start_full_scan(&self, root: &Path) -> Result<Vec<AudioTrack>, ScanError> {
        let Some(guard) = ScanGuard::acquire(&self.scanning) else {
            return Err(ScanError::Busy);
        };

        let root = root.to_path_buf();
        let settings = self.settings.clone();
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("tunescan-walk".into())
            .spawn(move || {
                let files = walk(&root, &settings);
                info!(root = %root.display(), count = files.len(), "scan complete");
                // Back to idle before the hand-off; a panic above drops the
                // guard and the sender, surfacing as WorkerLost below.
                drop(guard);
                let _ = tx.send(files);
            })
            .map_err(|_| ScanError::WorkerLost)?;

        rx.recv().map_err(|_| ScanError::WorkerLost)
    }
}

/// Exclusive ownership of the scanning flag for one scan's lifetime.
struct ScanGuard {
    flag: Arc<AtomicBool>,
}

impl ScanGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self { flag: flag.clone() })
    }
}

impl Drop for ScanGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
