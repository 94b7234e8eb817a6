//! The level data interpreter.
//!
//! Walks the persisted tag tree of one level: scalar world parameters live
//! under `Data` / `Data.WorldGenSettings`, the generator configuration under
//! `Data.WorldGenSettings.dimensions.<dimension>.generator`.

use crate::error::ResolveError;
use crate::extras::{self, LevelExtras};
use crate::level::{Environment, LevelDirectory};
use anchormc_nbt as nbt;
use anyhow::anyhow;
use fastnbt::Value;

/// Dimension registry key of the overworld.
pub const OVERWORLD: &str = "minecraft:overworld";
/// Dimension registry key of the nether.
pub const THE_NETHER: &str = "minecraft:the_nether";
/// Dimension registry key of the end.
pub const THE_END: &str = "minecraft:the_end";

const VANILLA_PREFIX: &str = "minecraft";

/// A level's decoded tag tree. Never mutated; every resolution reads a fresh
/// snapshot and holds no state beyond the root.
#[derive(Debug)]
pub struct LevelData {
    root: Value,
}

impl LevelData {
    /// Reads and decodes the level's data file, preferring `level.dat` over
    /// `level.dat_old`.
    pub fn load(level: &LevelDirectory) -> Result<Self, ResolveError> {
        let path = level
            .data_file()
            .ok_or_else(|| anyhow!("No level data file in {}", level.path().display()))?;
        Ok(Self {
            root: nbt::read_nbt_file(&path)?,
        })
    }

    /// Wraps an already-decoded root, for callers with their own tag source.
    pub fn from_root(root: Value) -> Self {
        Self { root }
    }

    pub fn data(&self) -> Option<&Value> {
        nbt::compound(&self.root, "Data")
    }

    pub fn world_gen_settings(&self) -> Option<&Value> {
        self.data()
            .and_then(|data| nbt::compound(data, "WorldGenSettings"))
    }

    pub fn dimensions(&self) -> Option<&Value> {
        self.world_gen_settings()
            .and_then(|settings| nbt::compound(settings, "dimensions"))
    }

    /// The dimension registry key to resolve for an environment.
    ///
    /// The three standard environments map through a fixed table. A custom
    /// environment scans the registry for any key outside the vanilla
    /// namespace; a custom environment without such a key is inconsistent
    /// and fails resolution.
    pub fn dimension_key(&self, environment: Environment) -> Result<String, ResolveError> {
        match environment {
            Environment::Normal => Ok(OVERWORLD.to_string()),
            Environment::Nether => Ok(THE_NETHER.to_string()),
            Environment::TheEnd => Ok(THE_END.to_string()),
            Environment::Custom => self
                .dimensions()
                .and_then(nbt::entries)
                .and_then(|entries| entries.keys().find(|key| !key.starts_with(VANILLA_PREFIX)))
                .cloned()
                .ok_or(ResolveError::CustomDimensionNotFound),
        }
    }

    /// The generator compound of the requested dimension, if present.
    pub fn generator(&self, environment: Environment) -> Result<Option<&Value>, ResolveError> {
        let key = self.dimension_key(environment)?;
        Ok(self
            .dimensions()
            .and_then(|dimensions| nbt::compound(dimensions, &key))
            .and_then(|dimension| nbt::compound(dimension, "generator")))
    }

    /// The level's extras side-channel.
    pub fn extras(&self) -> Option<LevelExtras> {
        self.data().and_then(extras::extras)
    }

    pub fn hardcore(&self) -> Result<bool, ResolveError> {
        self.data()
            .and_then(|data| nbt::boolean(data, "hardcore"))
            .ok_or(ResolveError::MissingField("hardcore"))
    }

    /// The world seed, at full 64-bit precision.
    pub fn seed(&self) -> Result<i64, ResolveError> {
        self.world_gen_settings()
            .and_then(|settings| nbt::long(settings, "seed"))
            .ok_or(ResolveError::MissingField("seed"))
    }

    pub fn structures(&self) -> Result<bool, ResolveError> {
        self.world_gen_settings()
            .and_then(|settings| nbt::boolean(settings, "generate_features"))
            .ok_or(ResolveError::MissingField("generate_features"))
    }
}
