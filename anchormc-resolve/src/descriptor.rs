//! Descriptor assembly.
//!
//! Orchestrates topology detection, extras gating, generator classification
//! and scalar extraction into the one immutable value handed to the host
//! runtime.

use crate::data::LevelData;
use crate::error::ResolveError;
use crate::extras::{self, LevelExtras};
use crate::flat::FlatPreset;
use crate::key::{DEFAULT_NAMESPACE, NamespacedKey};
use crate::level::{Environment, LevelDirectory};
use crate::preset::{self, WorldPreset};
use serde::Serialize;

/// Everything the host runtime needs to create a world. Owns no reference
/// back to the source directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldCreationDescriptor {
    pub name: String,
    pub key: NamespacedKey,
    pub environment: Environment,
    pub seed: i64,
    pub hardcore: bool,
    pub structures: bool,
    /// The classified preset. `None` means no rule matched; consumers
    /// display normal but must not assume the data was normal-type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<WorldPreset>,
    /// Serialized flat settings, only set for flat worlds with settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_settings: Option<String>,
}

/// Resolves a level with the environment heuristic and the default load
/// predicate.
pub fn resolve_level(
    level: &LevelDirectory,
) -> Result<Option<WorldCreationDescriptor>, ResolveError> {
    resolve_level_with(level, None, extras::default_load_predicate)
}

/// Resolves a level, overriding the environment heuristic and/or the load
/// predicate. `Ok(None)` means the predicate rejected the level.
pub fn resolve_level_with<F>(
    level: &LevelDirectory,
    environment: Option<Environment>,
    predicate: F,
) -> Result<Option<WorldCreationDescriptor>, ResolveError>
where
    F: FnOnce(&Option<LevelExtras>) -> bool,
{
    let data = LevelData::load(level)?;
    resolve(level, &data, environment, predicate)
}

/// Assembles a descriptor from already-decoded level data.
///
/// The predicate is consulted first so that rejected levels never pay for
/// generator and preset parsing.
pub fn resolve<F>(
    level: &LevelDirectory,
    data: &LevelData,
    environment: Option<Environment>,
    predicate: F,
) -> Result<Option<WorldCreationDescriptor>, ResolveError>
where
    F: FnOnce(&Option<LevelExtras>) -> bool,
{
    let extras = data.extras();
    if !predicate(&extras) {
        log::debug!("Skipping level {} by load policy", level.path().display());
        return Ok(None);
    }

    let environment = environment.unwrap_or_else(|| level.environment());

    let generator = data.generator(environment)?;
    let preset = generator.and_then(preset::classify);
    let flat = match (preset, generator) {
        (Some(WorldPreset::Flat), Some(generator)) => Some(FlatPreset::parse(generator)?),
        _ => None,
    };

    let hardcore = data.hardcore()?;
    let seed = data.seed()?;
    let structures = data.structures()?;

    let name = level.name();
    let key = extras
        .and_then(|extras| extras.key)
        .unwrap_or_else(|| derived_key(&name));

    let flat_settings = match flat.as_ref().filter(|preset| !preset.is_empty()) {
        Some(preset) => Some(
            preset
                .to_json()
                .map_err(|error| ResolveError::Data(error.into()))?,
        ),
        None => None,
    };

    Ok(Some(WorldCreationDescriptor {
        name,
        key,
        environment,
        seed,
        hardcore,
        structures,
        preset,
        flat_settings,
    }))
}

/// Identity key fallback: normalize the directory name into the default
/// namespace. Spaces become underscores, parentheses are dropped.
fn derived_key(name: &str) -> NamespacedKey {
    let key = name.to_lowercase().replace(['(', ')'], "").replace(' ', "_");
    NamespacedKey::new(DEFAULT_NAMESPACE, key)
}
