//! Batch loading of a world container.

use crate::{HostError, WorldHandle, WorldHost};
use anchormc_resolve::{list_levels, resolve_level};
use std::path::Path;

/// Resolves and creates every eligible level beneath `container`.
///
/// Levels the default load policy rejects are skipped silently; any other
/// per-level failure is logged and the batch continues. Returns the handles
/// of the worlds that came up.
pub fn load_levels(container: &Path, host: &dyn WorldHost) -> Vec<WorldHandle> {
    let mut loaded = Vec::new();

    for level in list_levels(container) {
        if host.is_world_loaded(level.path()) {
            continue;
        }

        let descriptor = match resolve_level(&level) {
            Ok(Some(descriptor)) => descriptor,
            Ok(None) => continue,
            Err(error) => {
                log::error!(
                    "An unexpected error occurred while loading the level {}: {error}",
                    level.path().display()
                );
                continue;
            }
        };

        match host.create_world(&descriptor) {
            Ok(Some(handle)) => {
                log::debug!(
                    "Loaded dimension {} at {}",
                    handle.key,
                    level.path().display()
                );
                loaded.push(handle);
            }
            Ok(None) => {
                log::error!("Failed to create world {}", descriptor.key);
            }
            Err(HostError::Generator { plugin, id }) => {
                let generator = match id {
                    Some(id) => format!("{plugin}:{id}"),
                    None => plugin,
                };
                log::error!("Skip loading dimension {}", descriptor.name);
                log::error!("Cannot use generator {generator}");
            }
            Err(error) => {
                log::error!(
                    "An unexpected error occurred while loading the level {}: {error}",
                    level.path().display()
                );
            }
        }
    }

    loaded
}
