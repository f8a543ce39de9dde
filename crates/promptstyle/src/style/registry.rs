//! Key-ordered registry of style records.

use std::collections::BTreeMap;

use super::error::RegistryError;
use super::record::{StyleMetadata, StyleRecord};

/// Registry of style records indexed by key.
///
/// Iteration follows key order, which is also the order styles are shown in
/// a picker. Lookups never fail: an absent key is `None`.
///
/// If the same key is declared twice the later record wins, and
/// [`validate`](Self::validate) reports the collision.
///
/// # Example
///
/// ```rust
/// use promptstyle::{StyleRecord, StyleRegistry};
/// use serde_json::json;
///
/// let registry = StyleRegistry::new(&[
///     StyleRecord::new(1, "Flat", "🔷", "Flat shapes", "background: #000F47;", |s| json!({ "object": s })),
///     StyleRecord::coming_soon(2, "Style 2", "🔜", "Coming soon", "background: #9e9e9e;"),
/// ]);
///
/// assert_eq!(registry.len(), 2);
/// assert!(registry.contains(2));
/// assert!(registry.get(3).is_none());
/// assert!(registry.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: BTreeMap<u32, StyleRecord>,
    /// Records that were shadowed by a later declaration of the same key.
    shadowed: Vec<StyleRecord>,
}

impl StyleRegistry {
    /// Builds a registry from a table of records.
    pub fn new(records: &[StyleRecord]) -> Self {
        let mut registry = Self::default();
        for record in records {
            registry.insert(*record);
        }
        registry
    }

    fn insert(&mut self, record: StyleRecord) {
        if let Some(previous) = self.styles.insert(record.key, record) {
            self.shadowed.push(previous);
        }
    }

    pub fn get(&self, key: u32) -> Option<&StyleRecord> {
        self.styles.get(&key)
    }

    pub fn contains(&self, key: u32) -> bool {
        self.styles.contains_key(&key)
    }

    /// Returns the display fields of the record at `key`.
    pub fn metadata(&self, key: u32) -> Option<StyleMetadata> {
        self.get(key).map(StyleRecord::metadata)
    }

    /// Returns the number of registered styles, coming-soon ones included.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Returns the registered keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.styles.keys().copied()
    }

    /// Returns the records in key order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleRecord> {
        self.styles.values()
    }

    /// Checks that every key was declared exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateKey`] for the first shadowed record.
    pub fn validate(&self) -> Result<(), RegistryError> {
        match self.shadowed.first() {
            None => Ok(()),
            Some(first) => {
                let second = self
                    .styles
                    .get(&first.key)
                    .map(|r| r.name)
                    .unwrap_or_default();
                Err(RegistryError::DuplicateKey {
                    key: first.key,
                    first: first.name,
                    second,
                })
            }
        }
    }
}
