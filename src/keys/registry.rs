use std::collections::HashMap;

use super::normalize::normalize;
use crate::error::RegistryError;

/// Immutable table from normalized identifier to canonical key.
///
/// Built once at startup from a closed list of keys and shared read-only
/// afterwards; lookups never allocate more than the normalized query.
#[derive(Debug, Clone, Default)]
pub struct KeyRegistry {
    by_normalized: HashMap<String, String>,
}

impl KeyRegistry {
    /// Register every key under its normalized form.
    ///
    /// Two distinct keys that normalize to the same string cannot both be
    /// resolved and are rejected. Repeating the same key is harmless.
    pub fn build<I, K>(keys: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut by_normalized: HashMap<String, String> = HashMap::new();

        for key in keys {
            let key = key.into();
            let normalized = normalize(&key);
            match by_normalized.get(&normalized) {
                Some(existing) if *existing == key => {}
                Some(existing) => {
                    return Err(RegistryError::Collision {
                        first: existing.clone(),
                        second: key,
                        normalized,
                    });
                }
                None => {
                    by_normalized.insert(normalized, key);
                }
            }
        }

        log::debug!("key registry built with {} entries", by_normalized.len());
        Ok(Self { by_normalized })
    }

    /// Canonical key for `candidate`, or `None` if it is not registered.
    pub fn is_valid(&self, candidate: &str) -> Option<&str> {
        self.by_normalized
            .get(&normalize(candidate))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_normalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_normalized.is_empty()
    }
}
