//! Cleanup of partially-written downloads.

use log::debug;
use std::path::PathBuf;

use crate::runtime::Runtime;

/// RAII guard that removes a partial download unless disarmed.
///
/// A failed download must leave nothing at or beside the install path,
/// so the temporary file is registered before the download starts and
/// only released once the rename into place has happened.
pub struct PartialFileGuard<'a, R: Runtime> {
    runtime: &'a R,
    path: PathBuf,
    armed: bool,
}

impl<'a, R: Runtime> PartialFileGuard<'a, R> {
    /// Create a new guard watching `path`.
    pub fn new(runtime: &'a R, path: PathBuf) -> Self {
        Self {
            runtime,
            path,
            armed: true,
        }
    }

    /// Mark the operation as successful; the file is kept.
    pub fn disarm(mut self) {
        self.armed = false;
    }
}

impl<R: Runtime> Drop for PartialFileGuard<'_, R> {
    fn drop(&mut self) {
        if self.armed && self.runtime.exists(&self.path) {
            debug!("Cleaning up partial file: {:?}", self.path);
            if let Err(e) = self.runtime.remove_file(&self.path) {
                debug!("Failed to clean up {:?}: {}", self.path, e);
            }
        }
    }
}
