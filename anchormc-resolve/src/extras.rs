//! Plugin-private side-channel metadata.
//!
//! The host runtime keeps a free-form `BukkitValues` compound inside the
//! level's `Data` tag for third parties. We reserve two namespaced keys in
//! it: an explicit world key overriding the derived identity, and an enabled
//! flag gating automatic loading.

use crate::key::NamespacedKey;
use anchormc_nbt as nbt;
use fastnbt::Value;

const SIDE_CHANNEL: &str = "BukkitValues";
/// Reserved key for the explicit world identity override.
pub const WORLD_KEY_TAG: &str = "worlds:world_key";
/// Reserved key for the enabled flag.
pub const ENABLED_TAG: &str = "worlds:enabled";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelExtras {
    /// Explicit world identity, overriding the key derived from the
    /// directory name. Malformed stored values are treated as absent.
    pub key: Option<NamespacedKey>,
    /// Whether the level wants to be auto-loaded. Defaults to true when the
    /// flag is missing.
    pub enabled: bool,
}

/// Reads the side-channel out of the `Data` compound. Absent side-channel
/// means absent extras, not an error.
pub fn extras(data: &Value) -> Option<LevelExtras> {
    let values = nbt::compound(data, SIDE_CHANNEL)?;
    Some(LevelExtras {
        key: nbt::string(values, WORLD_KEY_TAG).and_then(NamespacedKey::parse),
        enabled: nbt::boolean(values, ENABLED_TAG).unwrap_or(true),
    })
}

/// Default load gate: only levels that carry the side-channel and are still
/// enabled get picked up automatically. A vanilla level with no extras at
/// all is left alone.
pub fn default_load_predicate(extras: &Option<LevelExtras>) -> bool {
    extras.as_ref().is_some_and(|extras| extras.enabled)
}
