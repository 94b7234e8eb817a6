//! Standalone preset documents.
//!
//! Independent of any level: a preset file is either the settings body
//! wrapped in a `"settings"` envelope or the body directly at the root.

use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const PRESET_EXTENSION: &str = "json";

/// A named, reusable generator-settings document.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    settings: serde_json::Value,
}

impl Preset {
    /// Loads a preset file, unwrapping the optional `"settings"` envelope.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open preset file {}", path.display()))?;
        let root: serde_json::Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse preset file {}", path.display()))?;

        let serde_json::Value::Object(mut body) = root else {
            bail!("Preset root in {} is not an object", path.display());
        };

        let settings = match body.remove("settings") {
            Some(settings @ serde_json::Value::Object(_)) => settings,
            Some(_) => bail!("\"settings\" in {} is not an object", path.display()),
            None => serde_json::Value::Object(body),
        };

        Ok(Self { settings })
    }

    pub fn settings(&self) -> &serde_json::Value {
        &self.settings
    }
}

/// Candidate preset files in a directory, matched by extension. Order is
/// filesystem-dependent; callers must not rely on it.
pub fn find_presets(data_folder: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(data_folder) else {
        return Vec::new();
    };
    entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext == PRESET_EXTENSION)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_with_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classic_flat.json");
        fs::write(&path, r#"{"settings": {"biome": "minecraft:plains"}}"#).unwrap();

        let preset = Preset::load(&path).unwrap();
        assert_eq!(preset.settings()["biome"], "minecraft:plains");
    }

    #[test]
    fn test_load_raw_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.json");
        fs::write(&path, r#"{"biome": "minecraft:desert", "lakes": false}"#).unwrap();

        let preset = Preset::load(&path).unwrap();
        assert_eq!(preset.settings()["biome"], "minecraft:desert");
        assert_eq!(preset.settings()["lakes"], false);
    }

    #[test]
    fn test_load_rejects_non_object_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"settings": 42}"#).unwrap();
        assert!(Preset::load(&path).is_err());
    }

    #[test]
    fn test_find_presets_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.json"), "{}").unwrap();
        fs::write(dir.path().join("two.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub.json")).unwrap();

        let mut names: Vec<_> = find_presets(dir.path())
            .into_iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["one.json", "two.json"]);
    }

    #[test]
    fn test_find_presets_missing_dir() {
        assert!(find_presets(Path::new("/definitely/not/here")).is_empty());
    }
}
