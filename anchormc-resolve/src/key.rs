use serde::{Serialize, Serializer};
use std::fmt;

/// Namespace used for keys derived from a level's directory name.
pub const DEFAULT_NAMESPACE: &str = "worlds";

const VANILLA_NAMESPACE: &str = "minecraft";

/// A `namespace:key` identifier as used by the host runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacedKey {
    namespace: String,
    key: String,
}

impl NamespacedKey {
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }

    /// Parses `namespace:key`. A bare key falls back to the vanilla
    /// namespace. Malformed input yields `None` rather than an error; the
    /// extras resolver treats such values as absent.
    pub fn parse(input: &str) -> Option<Self> {
        let (namespace, key) = match input.split_once(':') {
            Some((namespace, key)) => (namespace, key),
            None => (VANILLA_NAMESPACE, input),
        };
        let namespace = if namespace.is_empty() {
            VANILLA_NAMESPACE
        } else {
            namespace
        };
        (valid_namespace(namespace) && valid_key(key)).then(|| Self::new(namespace, key))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

fn valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty()
        && namespace
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'_' | b'.' | b'-'))
}

fn valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.bytes().all(|b| {
            b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'_' | b'.' | b'-' | b'/')
        })
}

impl fmt::Display for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

impl Serialize for NamespacedKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
