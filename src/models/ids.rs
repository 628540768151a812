//! Bidirectional mapping between external ids and sequential stop indices.

use std::collections::HashMap;

/// An explicit bidirectional map `externalId ↔ sequentialIndex`, owned by the
/// [`Problem`](crate::models::Problem) it was built for.
///
/// The encoder and solver only ever see dense indices; the decoder uses this
/// map to translate every index back to the caller's identifier before
/// producing output.
///
/// # Examples
///
/// ```
/// use pdp_routing::models::IdMap;
///
/// let mut ids = IdMap::new();
/// ids.insert("depot", 0);
/// ids.insert("n1", 1);
/// assert_eq!(ids.index_of("n1"), Some(1));
/// assert_eq!(ids.id_of(0), Some("depot"));
/// assert_eq!(ids.index_of("n9"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdMap {
    to_index: HashMap<String, usize>,
    to_id: HashMap<usize, String>,
}

impl IdMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pairing, replacing any previous entry for either key.
    pub fn insert(&mut self, id: impl Into<String>, index: usize) {
        let id = id.into();
        self.to_index.insert(id.clone(), index);
        self.to_id.insert(index, id);
    }

    /// Resolves an external id to its sequential index.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.to_index.get(id).copied()
    }

    /// Resolves a sequential index back to its external id.
    pub fn id_of(&self, index: usize) -> Option<&str> {
        self.to_id.get(&index).map(|s| s.as_str())
    }

    /// Number of registered pairings.
    pub fn len(&self) -> usize {
        self.to_index.len()
    }

    /// Returns `true` if no pairing is registered.
    pub fn is_empty(&self) -> bool {
        self.to_index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut ids = IdMap::new();
        ids.insert("a", 0);
        ids.insert("b", 1);
        assert_eq!(ids.len(), 2);
        assert_eq!(ids.index_of("a"), Some(0));
        assert_eq!(ids.id_of(1), Some("b"));
    }

    #[test]
    fn test_missing() {
        let ids = IdMap::new();
        assert!(ids.is_empty());
        assert_eq!(ids.index_of("x"), None);
        assert_eq!(ids.id_of(3), None);
    }

    #[test]
    fn test_replace() {
        let mut ids = IdMap::new();
        ids.insert("a", 0);
        ids.insert("a", 2);
        assert_eq!(ids.index_of("a"), Some(2));
        assert_eq!(ids.id_of(2), Some("a"));
    }
}
