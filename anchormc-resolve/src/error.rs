use thiserror::Error;

/// Errors that abort a single level's resolution.
///
/// Resolution is all-or-nothing; no partial descriptor is ever produced.
/// Callers iterating multiple levels catch these per level and continue.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A required field was absent from the level data. Hardcore, seed and
    /// structure generation are never defaulted; a level missing one of them
    /// is treated as corrupt.
    #[error("missing required field \"{0}\"")]
    MissingField(&'static str),

    /// A custom environment was requested but the dimension registry holds
    /// nothing outside the vanilla namespace.
    #[error("could not find custom dimension")]
    CustomDimensionNotFound,

    /// Anything unexpected while reading or decoding the tag tree.
    #[error(transparent)]
    Data(#[from] anyhow::Error),
}
