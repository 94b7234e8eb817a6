//! Flat generator settings.

use crate::error::ResolveError;
use anchormc_nbt as nbt;
use fastnbt::Value;
use serde::Serialize;
use std::collections::BTreeSet;

/// One flat-world layer. Order in the containing list is bottom-to-top
/// build order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layer {
    pub block: String,
    pub height: i32,
}

/// Settings of a flat generator. Every field is independently optional; a
/// preset with nothing set is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlatPreset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lakes: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub layers: Vec<Layer>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub structure_overrides: BTreeSet<String>,
}

impl FlatPreset {
    /// Decodes the generator's `settings` compound.
    ///
    /// A flat generator without a settings block is legal and yields an
    /// empty preset. Layer entries are mandatory-complete: a layer missing
    /// its block or height is meaningless and fails the parse. Duplicate
    /// layers stay distinct and in insertion order.
    pub fn parse(generator: &Value) -> Result<Self, ResolveError> {
        let Some(settings) = nbt::compound(generator, "settings") else {
            return Ok(FlatPreset::default());
        };

        let mut preset = FlatPreset {
            biome: nbt::string(settings, "biome").map(str::to_string),
            features: nbt::boolean(settings, "features"),
            lakes: nbt::boolean(settings, "lakes"),
            ..FlatPreset::default()
        };

        if let Some(layers) = nbt::list(settings, "layers") {
            for layer in layers {
                let block = nbt::string(layer, "block")
                    .ok_or(ResolveError::MissingField("block"))?;
                let height =
                    nbt::int(layer, "height").ok_or(ResolveError::MissingField("height"))?;
                preset.layers.push(Layer {
                    block: block.to_string(),
                    height,
                });
            }
        }

        if let Some(overrides) = nbt::list(settings, "structure_overrides") {
            for entry in overrides {
                if let Value::String(structure) = entry {
                    preset.structure_overrides.insert(structure.clone());
                }
            }
        }

        Ok(preset)
    }

    pub fn is_empty(&self) -> bool {
        self.biome.is_none()
            && self.features.is_none()
            && self.lakes.is_none()
            && self.layers.is_empty()
            && self.structure_overrides.is_empty()
    }

    /// Serializes into the generic settings-string slot the host expects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
