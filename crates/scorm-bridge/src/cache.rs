use std::collections::BTreeMap;
use std::sync::RwLock;

use scorm_types::{CmiElement, WireValue};

/// Local copy of the attempt's CMI data.
///
/// Seeded from the host-supplied snapshot at session start and mutated
/// optimistically on every accepted write, before the backend has
/// acknowledged anything. Volatile elements are read around this cache, so
/// stale entries for them are harmless. Held behind a `RwLock` so the drain
/// task and the calling thread can share it; values are cloned on read.
pub struct CmiCache {
    entries: RwLock<BTreeMap<CmiElement, WireValue>>,
}

impl CmiCache {
    pub fn new(snapshot: BTreeMap<CmiElement, WireValue>) -> Self {
        Self {
            entries: RwLock::new(snapshot),
        }
    }

    pub fn get(&self, element: &CmiElement) -> Option<WireValue> {
        self.entries
            .read()
            .expect("lock poisoned")
            .get(element)
            .cloned()
    }

    pub fn insert(&self, element: CmiElement, value: WireValue) {
        self.entries
            .write()
            .expect("lock poisoned")
            .insert(element, value);
    }

    /// Number of cached elements.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }
}

impl Default for CmiCache {
    fn default() -> Self {
        Self::new(BTreeMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> CmiCache {
        let mut snapshot = BTreeMap::new();
        snapshot.insert(
            CmiElement::from("cmi.core.lesson_location"),
            WireValue::from("page-1"),
        );
        CmiCache::new(snapshot)
    }

    #[test]
    fn serves_seeded_values() {
        let cache = seeded();
        assert_eq!(
            cache.get(&CmiElement::from("cmi.core.lesson_location")),
            Some(WireValue::from("page-1"))
        );
    }

    #[test]
    fn missing_elements_read_as_none() {
        let cache = seeded();
        assert_eq!(cache.get(&CmiElement::from("cmi.suspend_data")), None);
    }

    #[test]
    fn insert_overwrites() {
        let cache = seeded();
        cache.insert(
            CmiElement::from("cmi.core.lesson_location"),
            WireValue::from("page-2"),
        );
        assert_eq!(
            cache.get(&CmiElement::from("cmi.core.lesson_location")),
            Some(WireValue::from("page-2"))
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn empty_by_default() {
        assert!(CmiCache::default().is_empty());
    }
}
