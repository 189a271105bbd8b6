use flickmark_models::{MediaType, WishlistCandidate, WishlistItem};
use tracing::{debug, warn};

use crate::storage::{Storage, StorageError, WriteStatus};

pub const WISHLIST_KEY: &str = "wishlist";

/// Result of [`WishlistStore::add`].
#[derive(Debug)]
pub enum AddOutcome {
    Added(WriteStatus),
    /// An entry with the same (id, type) already exists. First write wins;
    /// the existing entry is kept untouched.
    AlreadyPresent,
    /// The candidate was missing an id or a media type. No state change.
    Rejected,
}

/// Result of [`WishlistStore::remove`].
#[derive(Debug)]
pub enum RemoveOutcome {
    Removed { count: usize, status: WriteStatus },
    NotFound,
}

/// The authoritative in-memory wishlist, write-through mirrored to storage.
///
/// Storage failures never propagate out of the public operations: reads
/// degrade to an empty collection, writes degrade to memory-only and report
/// the failure in the returned [`WriteStatus`].
pub struct WishlistStore<S: Storage> {
    storage: S,
    items: Vec<WishlistItem>,
}

impl<S: Storage> WishlistStore<S> {
    /// Load the persisted collection. A missing key, an unreadable backend,
    /// or malformed JSON all yield an empty wishlist.
    pub fn open(storage: S) -> Self {
        let items = match storage.get(WISHLIST_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<WishlistItem>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    warn!("Persisted wishlist is malformed, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read persisted wishlist, starting empty: {}", e);
                Vec::new()
            }
        };
        Self { storage, items }
    }

    /// Append a candidate to the wishlist. Idempotent on (id, type).
    pub fn add(&mut self, candidate: WishlistCandidate) -> AddOutcome {
        let Some(item) = candidate.into_item() else {
            warn!("Rejected wishlist candidate with missing id or media type");
            return AddOutcome::Rejected;
        };

        let exists = self
            .items
            .iter()
            .any(|existing| existing.id == item.id && existing.media_type == item.media_type);
        if exists {
            return AddOutcome::AlreadyPresent;
        }

        debug!(id = %item.id, media_type = %item.media_type, "Adding wishlist entry");
        self.items.push(item);
        AddOutcome::Added(self.persist())
    }

    /// Remove entries matching `id`. With a media type, only the entry in
    /// that namespace is removed; without one, every entry with that id is
    /// removed regardless of namespace.
    pub fn remove(&mut self, id: &str, media_type: Option<MediaType>) -> RemoveOutcome {
        let before = self.items.len();
        self.items.retain(|item| match media_type {
            Some(t) => !(item.id == id && item.media_type == t),
            None => item.id != id,
        });

        let count = before - self.items.len();
        if count == 0 {
            return RemoveOutcome::NotFound;
        }
        debug!(id, count, "Removed wishlist entries");
        RemoveOutcome::Removed {
            count,
            status: self.persist(),
        }
    }

    /// Whether an entry matching `id` exists, under the same matching rule
    /// as [`remove`](Self::remove).
    pub fn contains(&self, id: &str, media_type: Option<MediaType>) -> bool {
        self.items.iter().any(|item| match media_type {
            Some(t) => item.id == id && item.media_type == t,
            None => item.id == id,
        })
    }

    /// Empty the collection and erase the persisted record entirely.
    pub fn clear(&mut self) -> WriteStatus {
        self.items.clear();
        match self.storage.remove(WISHLIST_KEY) {
            Ok(()) => WriteStatus::Persisted,
            Err(e) => {
                warn!("Failed to erase persisted wishlist: {}", e);
                WriteStatus::MemoryOnly(e)
            }
        }
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // Full-collection replace on every mutation. The in-memory state has
    // already changed when this runs; a failed write is reported, not
    // retried and not rolled back.
    fn persist(&mut self) -> WriteStatus {
        let payload = match serde_json::to_string(&self.items) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to encode wishlist for persistence: {}", e);
                return WriteStatus::MemoryOnly(StorageError::Encode {
                    key: WISHLIST_KEY.to_string(),
                    source: e,
                });
            }
        };
        match self.storage.set(WISHLIST_KEY, &payload) {
            Ok(()) => WriteStatus::Persisted,
            Err(e) => {
                warn!("Failed to persist wishlist, keeping in-memory state: {}", e);
                WriteStatus::MemoryOnly(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use flickmark_models::CatalogId;
    use tempfile::TempDir;

    fn candidate(id: impl Into<CatalogId>, media_type: MediaType, title: &str) -> WishlistCandidate {
        WishlistCandidate {
            id: Some(id.into()),
            media_type: Some(media_type),
            title: Some(title.to_string()),
            rating: Some(7.5),
            ..Default::default()
        }
    }

    /// Storage stub whose writes always fail, for the degraded-write path.
    struct FailingStorage;

    impl Storage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "quota exceeded"),
            })
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "quota exceeded"),
            })
        }
    }

    #[test]
    fn test_add_is_idempotent_per_id_and_type() {
        let mut store = WishlistStore::open(MemoryStorage::new());
        assert!(matches!(
            store.add(candidate(7u64, MediaType::Movie, "X")),
            AddOutcome::Added(WriteStatus::Persisted)
        ));
        assert!(matches!(
            store.add(candidate(7u64, MediaType::Movie, "different title")),
            AddOutcome::AlreadyPresent
        ));
        assert_eq!(store.len(), 1);
        // First write wins: the original entry is kept, not overwritten.
        assert_eq!(store.items()[0].title, "X");
    }

    #[test]
    fn test_numeric_id_is_normalized_to_string() {
        let mut store = WishlistStore::open(MemoryStorage::new());
        store.add(candidate(42u64, MediaType::Movie, "X"));
        assert!(store.contains("42", Some(MediaType::Movie)));
        assert!(!store.contains("42", Some(MediaType::Tv)));
    }

    #[test]
    fn test_same_id_in_both_namespaces_is_two_entries() {
        let mut store = WishlistStore::open(MemoryStorage::new());
        store.add(candidate("1", MediaType::Movie, "A"));
        store.add(candidate("1", MediaType::Tv, "B"));
        assert_eq!(store.len(), 2);

        store.remove("1", Some(MediaType::Movie));
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].media_type, MediaType::Tv);
        assert_eq!(store.items()[0].title, "B");
    }

    #[test]
    fn test_remove_without_type_removes_across_namespaces() {
        // A typeless remove matches the id in both namespaces, even though
        // (id, type) is the uniqueness key. Pinned here so any change to
        // that rule is deliberate.
        let mut store = WishlistStore::open(MemoryStorage::new());
        store.add(candidate("5", MediaType::Movie, "A"));
        store.add(candidate("5", MediaType::Tv, "B"));

        match store.remove("5", None) {
            RemoveOutcome::Removed { count, .. } => assert_eq!(count, 2),
            other => panic!("expected Removed, got {:?}", other),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_entry_is_not_found() {
        let mut store = WishlistStore::open(MemoryStorage::new());
        assert!(matches!(store.remove("9", None), RemoveOutcome::NotFound));
    }

    #[test]
    fn test_rejects_candidate_missing_id_or_type() {
        let mut store = WishlistStore::open(MemoryStorage::new());
        let no_id = WishlistCandidate {
            media_type: Some(MediaType::Movie),
            title: Some("X".to_string()),
            ..Default::default()
        };
        let no_type = WishlistCandidate {
            id: Some(CatalogId::Number(7)),
            title: Some("X".to_string()),
            ..Default::default()
        };
        assert!(matches!(store.add(no_id), AddOutcome::Rejected));
        assert!(matches!(store.add(no_type), AddOutcome::Rejected));
        assert!(store.is_empty());
    }

    #[test]
    fn test_persistence_round_trip_preserves_order() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = WishlistStore::open(FileStorage::new(dir.path()));
            store.add(candidate("3", MediaType::Movie, "C"));
            store.add(candidate("1", MediaType::Movie, "A"));
            store.add(candidate("2", MediaType::Tv, "B"));
        }

        // Fresh load, as after a process restart.
        let store = WishlistStore::open(FileStorage::new(dir.path()));
        let titles: Vec<&str> = store.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_clear_erases_the_persisted_key() {
        let dir = TempDir::new().unwrap();
        let mut store = WishlistStore::open(FileStorage::new(dir.path()));
        store.add(candidate("1", MediaType::Movie, "A"));
        assert!(store.clear().is_persisted());
        assert!(store.is_empty());

        // The key is gone, not rewritten as an empty array.
        let storage = FileStorage::new(dir.path());
        assert!(storage.get(WISHLIST_KEY).unwrap().is_none());
        assert!(WishlistStore::open(storage).is_empty());
    }

    #[test]
    fn test_malformed_persisted_data_loads_empty() {
        let storage = MemoryStorage::with_entry(WISHLIST_KEY, "{not json");
        let store = WishlistStore::open(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_write_failure_degrades_to_memory_only() {
        let mut store = WishlistStore::open(FailingStorage);
        match store.add(candidate("1", MediaType::Movie, "A")) {
            AddOutcome::Added(WriteStatus::MemoryOnly(_)) => {}
            other => panic!("expected memory-only add, got {:?}", other),
        }
        // The in-memory state still updated.
        assert_eq!(store.len(), 1);
        assert!(store.contains("1", Some(MediaType::Movie)));
    }

    #[test]
    fn test_add_then_duplicate_then_remove_scenario() {
        let mut store = WishlistStore::open(MemoryStorage::new());
        assert!(store.is_empty());

        store.add(candidate(7u64, MediaType::Movie, "X"));
        assert_eq!(store.len(), 1);

        store.add(candidate(7u64, MediaType::Movie, "renamed"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].title, "X");

        store.remove("7", Some(MediaType::Movie));
        assert_eq!(store.len(), 0);
    }
}
