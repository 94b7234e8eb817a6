//! Resolution of persisted levels into world-creation descriptors.
//!
//! The hard part of loading a saved level is not creating the world (the
//! host runtime does that) but reconstructing a faithful descriptor from
//! ambiguous, partially-legacy, optionally-absent persisted data: which
//! dimensions physically exist, which generator preset the data implies,
//! and which flat-world layers to rebuild. Every resolution is synchronous,
//! reads a fresh snapshot and mutates nothing.

pub mod data;
pub mod descriptor;
pub mod error;
pub mod extras;
pub mod flat;
pub mod key;
pub mod level;
pub mod preset;
pub mod presets;

pub use data::LevelData;
pub use descriptor::{WorldCreationDescriptor, resolve, resolve_level, resolve_level_with};
pub use error::ResolveError;
pub use extras::{LevelExtras, default_load_predicate};
pub use flat::{FlatPreset, Layer};
pub use key::NamespacedKey;
pub use level::{Environment, LevelDirectory, list_levels};
pub use preset::WorldPreset;
pub use presets::{Preset, find_presets};
