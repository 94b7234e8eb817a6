//! Deferred level deletion.
//!
//! A live world's directory cannot be removed while the host still holds it
//! open, so deletion is scheduled into an explicit queue the embedder drains
//! at orderly shutdown, after the host has released its handles.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct DeletionQueue {
    pending: Vec<PathBuf>,
}

impl DeletionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, level: impl Into<PathBuf>) {
        self.pending.push(level.into());
    }

    pub fn pending(&self) -> &[PathBuf] {
        &self.pending
    }

    /// Deletes every scheduled directory. Failures are logged per entry and
    /// do not stop the drain. Returns how many were deleted.
    pub fn drain(&mut self) -> usize {
        let mut deleted = 0;
        for level in self.pending.drain(..) {
            match delete_level(&level) {
                Ok(()) => deleted += 1,
                Err(error) => log::error!("Failed to delete world {}: {error}", level.display()),
            }
        }
        deleted
    }
}

/// Recursively removes a level directory.
pub fn delete_level(level: &Path) -> Result<()> {
    std::fs::remove_dir_all(level)
        .with_context(|| format!("Failed to delete level {}", level.display()))
}
