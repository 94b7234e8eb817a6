//! Level directories and the dimension topology heuristic.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Subordinate nether dimension directory name.
pub const NETHER_DIR: &str = "DIM-1";
/// Subordinate end dimension directory name.
pub const END_DIR: &str = "DIM1";

const LEVEL_DATA: &str = "level.dat";
const LEVEL_DATA_OLD: &str = "level.dat_old";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Normal,
    Nether,
    TheEnd,
    Custom,
}

impl Environment {
    /// Parses a user-facing name, accepting `-` for `_`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('-', "_").as_str() {
            "normal" => Some(Environment::Normal),
            "nether" => Some(Environment::Nether),
            "the_end" => Some(Environment::TheEnd),
            "custom" => Some(Environment::Custom),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Environment::Normal => "normal",
            Environment::Nether => "nether",
            Environment::TheEnd => "the_end",
            Environment::Custom => "custom",
        }
    }
}

/// A world directory inside the server's world container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDirectory {
    path: PathBuf,
}

impl LevelDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// A directory is a level iff at least one of the two data files exists.
    pub fn is_level(&self) -> bool {
        self.path.is_dir() && self.data_file().is_some()
    }

    /// The level data file, preferring `level.dat` over the stale copy.
    pub fn data_file(&self) -> Option<PathBuf> {
        let primary = self.path.join(LEVEL_DATA);
        if primary.is_file() {
            return Some(primary);
        }
        let fallback = self.path.join(LEVEL_DATA_OLD);
        fallback.is_file().then_some(fallback)
    }

    pub fn has_nether_dimension(&self) -> bool {
        self.path.join(NETHER_DIR).is_dir()
    }

    pub fn has_end_dimension(&self) -> bool {
        self.path.join(END_DIR).is_dir()
    }

    /// Default environment guess from which subordinate dimensions exist.
    ///
    /// A level carrying both children is a parent, never itself a child
    /// dimension, so both-present means overworld. This is a heuristic;
    /// callers wanting certainty pass an explicit environment instead.
    pub fn environment(&self) -> Environment {
        let end = self.has_end_dimension();
        let nether = self.has_nether_dimension();
        if end && nether {
            return Environment::Normal;
        }
        if end {
            return Environment::TheEnd;
        }
        if nether {
            return Environment::Nether;
        }
        Environment::Normal
    }
}

/// Level directories directly beneath `container`. Order is
/// filesystem-dependent.
pub fn list_levels(container: &Path) -> Vec<LevelDirectory> {
    let Ok(entries) = std::fs::read_dir(container) else {
        log::warn!("Failed to list world container {}", container.display());
        return Vec::new();
    };
    entries
        .flatten()
        .map(|entry| LevelDirectory::new(entry.path()))
        .filter(|level| level.is_level())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn level_with(dir: &Path, name: &str, data_files: &[&str], dims: &[&str]) -> LevelDirectory {
        let path = dir.join(name);
        fs::create_dir(&path).unwrap();
        for file in data_files {
            fs::write(path.join(file), b"").unwrap();
        }
        for dim in dims {
            fs::create_dir(path.join(dim)).unwrap();
        }
        LevelDirectory::new(path)
    }

    #[test]
    fn test_is_level_requires_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let primary = level_with(dir.path(), "primary", &["level.dat"], &[]);
        let fallback = level_with(dir.path(), "fallback", &["level.dat_old"], &[]);
        let empty = level_with(dir.path(), "empty", &[], &[]);

        assert!(primary.is_level());
        assert!(fallback.is_level());
        assert!(!empty.is_level());
        assert!(!LevelDirectory::new(dir.path().join("missing")).is_level());
    }

    #[test]
    fn test_data_file_prefers_primary() {
        let dir = tempfile::tempdir().unwrap();
        let level = level_with(dir.path(), "both", &["level.dat", "level.dat_old"], &[]);
        assert_eq!(level.data_file().unwrap(), level.path().join("level.dat"));
    }

    #[test]
    fn test_environment_heuristic() {
        let dir = tempfile::tempdir().unwrap();
        let both = level_with(dir.path(), "both", &["level.dat"], &["DIM-1", "DIM1"]);
        let nether = level_with(dir.path(), "nether", &["level.dat"], &["DIM-1"]);
        let end = level_with(dir.path(), "end", &["level.dat"], &["DIM1"]);
        let bare = level_with(dir.path(), "bare", &["level.dat"], &[]);

        assert_eq!(both.environment(), Environment::Normal);
        assert_eq!(nether.environment(), Environment::Nether);
        assert_eq!(end.environment(), Environment::TheEnd);
        assert_eq!(bare.environment(), Environment::Normal);
    }

    #[test]
    fn test_list_levels_skips_non_levels() {
        let dir = tempfile::tempdir().unwrap();
        level_with(dir.path(), "world", &["level.dat"], &[]);
        level_with(dir.path(), "not_a_world", &[], &[]);
        fs::write(dir.path().join("stray.txt"), b"").unwrap();

        let levels = list_levels(dir.path());
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].name(), "world");
    }

    #[test]
    fn test_environment_names() {
        assert_eq!(Environment::from_name("the-end"), Some(Environment::TheEnd));
        assert_eq!(Environment::from_name("NORMAL"), Some(Environment::Normal));
        assert_eq!(Environment::from_name("void"), None);
        assert_eq!(Environment::TheEnd.name(), "the_end");
    }
}
