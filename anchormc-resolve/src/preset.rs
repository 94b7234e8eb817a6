//! World preset classification.

use anchormc_nbt as nbt;
use fastnbt::Value;
use serde::{Serialize, Serializer};

/// The closed set of generator presets a level can resolve to.
///
/// Each variant carries the canonical identifier the vanilla format uses for
/// it; the same string serves classification matching and reverse lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldPreset {
    Normal,
    Flat,
    LargeBiomes,
    Amplified,
    SingleBiome,
    Checkerboard,
    Debug,
}

impl WorldPreset {
    pub const ALL: [WorldPreset; 7] = [
        WorldPreset::Normal,
        WorldPreset::Flat,
        WorldPreset::LargeBiomes,
        WorldPreset::Amplified,
        WorldPreset::SingleBiome,
        WorldPreset::Checkerboard,
        WorldPreset::Debug,
    ];

    pub fn id(self) -> &'static str {
        match self {
            WorldPreset::Normal => "minecraft:noise",
            WorldPreset::Flat => "minecraft:flat",
            WorldPreset::LargeBiomes => "minecraft:large_biomes",
            WorldPreset::Amplified => "minecraft:amplified",
            WorldPreset::SingleBiome => "minecraft:fixed",
            WorldPreset::Checkerboard => "minecraft:checkerboard",
            WorldPreset::Debug => "minecraft:debug",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.id() == id)
    }
}

impl Serialize for WorldPreset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// Classifies a `generator` compound into at most one preset.
///
/// Rule order is load-bearing: the `settings` string and `biome_source.type`
/// are more specific than the generic `type` discriminator and win over it,
/// so a large-biomes world whose `type` also says flat still classifies as
/// large biomes. First match short-circuits; no match is a valid outcome and
/// does not mean the generator was normal-type.
pub fn classify(generator: &Value) -> Option<WorldPreset> {
    if let Some(settings) = generator_settings(generator) {
        if settings == WorldPreset::LargeBiomes.id() {
            return Some(WorldPreset::LargeBiomes);
        }
        if settings == WorldPreset::Amplified.id() {
            return Some(WorldPreset::Amplified);
        }
    }

    if let Some(source) = nbt::compound(generator, "biome_source")
        .and_then(|source| nbt::string(source, "type"))
    {
        if source == WorldPreset::SingleBiome.id() {
            return Some(WorldPreset::SingleBiome);
        }
        if source == WorldPreset::Checkerboard.id() {
            return Some(WorldPreset::Checkerboard);
        }
    }

    match generator_type(generator)? {
        id if id == WorldPreset::Debug.id() => Some(WorldPreset::Debug),
        id if id == WorldPreset::Flat.id() => Some(WorldPreset::Flat),
        id if id == WorldPreset::Normal.id() => Some(WorldPreset::Normal),
        _ => None,
    }
}

/// The generator's `settings` field, only when it is a plain string.
/// Flat generators store a compound there instead, which must not match.
pub fn generator_settings(generator: &Value) -> Option<&str> {
    nbt::string(generator, "settings")
}

/// The generator's top-level `type` discriminator.
pub fn generator_type(generator: &Value) -> Option<&str> {
    nbt::string(generator, "type")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(fields: Vec<(&str, Value)>) -> Value {
        Value::Compound(
            fields
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    fn string(value: &str) -> Value {
        Value::String(value.to_string())
    }

    #[test]
    fn test_classify_by_type() {
        for (id, expected) in [
            ("minecraft:noise", WorldPreset::Normal),
            ("minecraft:flat", WorldPreset::Flat),
            ("minecraft:debug", WorldPreset::Debug),
        ] {
            let generator = compound(vec![("type", string(id))]);
            assert_eq!(classify(&generator), Some(expected));
        }
    }

    #[test]
    fn test_classify_by_settings_string() {
        let generator = compound(vec![
            ("type", string("minecraft:noise")),
            ("settings", string("minecraft:large_biomes")),
        ]);
        assert_eq!(classify(&generator), Some(WorldPreset::LargeBiomes));

        let generator = compound(vec![("settings", string("minecraft:amplified"))]);
        assert_eq!(classify(&generator), Some(WorldPreset::Amplified));
    }

    #[test]
    fn test_classify_by_biome_source() {
        let generator = compound(vec![
            ("type", string("minecraft:noise")),
            (
                "biome_source",
                compound(vec![("type", string("minecraft:fixed"))]),
            ),
        ]);
        assert_eq!(classify(&generator), Some(WorldPreset::SingleBiome));

        let generator = compound(vec![(
            "biome_source",
            compound(vec![("type", string("minecraft:checkerboard"))]),
        )]);
        assert_eq!(classify(&generator), Some(WorldPreset::Checkerboard));
    }

    #[test]
    fn test_settings_string_outranks_type() {
        // settings says large biomes, type says flat: rule 1 wins over rule 6
        let generator = compound(vec![
            ("settings", string("minecraft:large_biomes")),
            ("type", string("minecraft:flat")),
        ]);
        assert_eq!(classify(&generator), Some(WorldPreset::LargeBiomes));
    }

    #[test]
    fn test_compound_settings_does_not_match() {
        // flat worlds store a settings compound; only the string form counts
        let generator = compound(vec![
            ("settings", compound(vec![("biome", string("plains"))])),
            ("type", string("minecraft:flat")),
        ]);
        assert_eq!(classify(&generator), Some(WorldPreset::Flat));
    }

    #[test]
    fn test_classify_unknown() {
        let generator = compound(vec![("type", string("othermod:weird"))]);
        assert_eq!(classify(&generator), None);
        assert_eq!(classify(&compound(vec![])), None);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let generator = compound(vec![
            ("settings", string("minecraft:amplified")),
            (
                "biome_source",
                compound(vec![("type", string("minecraft:fixed"))]),
            ),
            ("type", string("minecraft:flat")),
        ]);
        for _ in 0..3 {
            assert_eq!(classify(&generator), Some(WorldPreset::Amplified));
        }
    }

    #[test]
    fn test_id_round_trip() {
        for preset in WorldPreset::ALL {
            assert_eq!(WorldPreset::from_id(preset.id()), Some(preset));
        }
        assert_eq!(WorldPreset::from_id("minecraft:unknown"), None);
    }
}
