//! The seam to the world-hosting runtime.
//!
//! Resolution itself never talks to a live server; everything it needs from
//! one comes in through the [`WorldHost`] trait, so the whole pipeline runs
//! in tests against a mock.

use anchormc_resolve::{NamespacedKey, WorldCreationDescriptor};
use std::path::Path;
use thiserror::Error;

pub mod deletion;
pub mod loader;

pub use deletion::{DeletionQueue, delete_level};
pub use loader::load_levels;

/// Handle to a world the host runtime has created.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldHandle {
    pub key: NamespacedKey,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum HostError {
    /// The generator plugin a level names could not be used. The payload is
    /// enough for an actionable message: the plugin and its optional sub-id.
    #[error("cannot use generator {plugin}")]
    Generator { plugin: String, id: Option<String> },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Capability the host runtime provides. Injected, never ambient global
/// state.
pub trait WorldHost {
    /// Creates a world from a resolved descriptor. `Ok(None)` means the
    /// host declined or failed creation; callers report it and do not retry.
    fn create_world(
        &self,
        descriptor: &WorldCreationDescriptor,
    ) -> Result<Option<WorldHandle>, HostError>;

    /// Whether a world backed by this directory is already live.
    fn is_world_loaded(&self, level: &Path) -> bool;
}
