//! Binding credentials with redacted Debug output.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Credentials issued for a service binding.
///
/// A mapping from credential key to arbitrary JSON value. The map is the
/// payload callers came for, so it serializes normally - but `Debug` is
/// redacted so secrets never end up in logs or panic messages.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials {
    inner: Map<String, Value>,
}

impl Credentials {
    /// Look up a single credential value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Number of credential entries (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if no credentials were issued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over credential keys (safe to log; values are not exposed).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }
}

impl From<Map<String, Value>> for Credentials {
    fn from(inner: Map<String, Value>) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credentials([REDACTED; {} entries])", self.inner.len())
    }
}
