use crate::slot::FavoritesSlot;
use std::collections::BTreeSet;
use tuto_catalog::models::RecordId;

/// The persisted set of record ids marked as favourite.
///
/// The store is write-through: every mutating call re-persists the whole set
/// before returning, so the slot and the returned set never disagree. It is
/// also unfailable from the caller's point of view — an absent or
/// unparseable slot degrades to an empty set, and a failed write is logged
/// rather than surfaced, because browsing must never block on favourites
/// persistence.
///
/// The favourites set outlives any one catalogue: ids are not checked
/// against catalogue contents here. Cross-referencing for display is
/// [`Catalog::favorites`](tuto_catalog::Catalog::favorites).
///
/// # Examples
///
/// ```
/// use tuto_favorites::FavoritesStore;
/// use tuto_favorites::slot::MemorySlot;
/// use tuto_catalog::models::RecordId;
///
/// let store = FavoritesStore::new(MemorySlot::default());
/// let favorites = store.toggle(&RecordId::from("1"));
/// assert!(favorites.contains(&RecordId::from("1")));
/// assert!(store.toggle(&RecordId::from("1")).is_empty());
/// ```
pub struct FavoritesStore {
    slot: Box<dyn FavoritesSlot>,
}

impl FavoritesStore {
    pub fn new(slot: impl FavoritesSlot + 'static) -> Self {
        Self { slot: Box::new(slot) }
    }

    /// The current favourites set. Never fails.
    ///
    /// An absent slot is an empty set; a corrupt one is logged and treated
    /// as empty rather than blocking browsing.
    pub fn get(&self) -> BTreeSet<RecordId> {
        let payload = match self.slot.read() {
            Ok(Some(payload)) => payload,
            Ok(None) => return BTreeSet::new(),
            Err(err) => {
                tracing::warn!(error = %err, "favourites slot unreadable; starting empty");
                return BTreeSet::new();
            },
        };
        // Ids persisted by older sessions may be JSON numbers; RecordId
        // canonicalises them on the way in.
        match serde_json::from_str(&payload) {
            Ok(ids) => ids,
            Err(err) => {
                tracing::warn!(error = %err, "favourites slot corrupt; starting empty");
                BTreeSet::new()
            },
        }
    }

    /// Whether `id` is currently favourited.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.get().contains(id)
    }

    /// Add `id` if absent, remove it if present; persist; return the new set.
    ///
    /// Toggling the same id twice restores the original set.
    pub fn toggle(&self, id: &RecordId) -> BTreeSet<RecordId> {
        let mut favorites = self.get();
        if !favorites.remove(id) {
            favorites.insert(id.clone());
        }
        self.persist(&favorites);
        favorites
    }

    /// Unconditionally remove `id`; persist; return the new set.
    ///
    /// Idempotent — removing an absent id is a no-op that still re-persists
    /// the unchanged set.
    pub fn remove(&self, id: &RecordId) -> BTreeSet<RecordId> {
        let mut favorites = self.get();
        favorites.remove(id);
        self.persist(&favorites);
        favorites
    }

    fn persist(&self, favorites: &BTreeSet<RecordId>) {
        let payload = match serde_json::to_string(favorites) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = %err, "favourites set unserialisable; not persisted");
                return;
            },
        };
        if let Err(err) = self.slot.write(&payload) {
            tracing::warn!(error = %err, "favourites write failed; in-memory set still returned");
        }
    }
}
