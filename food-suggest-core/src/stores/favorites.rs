//! Saved (favorite) meals.

use std::collections::BTreeSet;

use super::Listeners;
use crate::storage::KvStore;

const STORAGE_KEY: &str = "saved_meal_ids";

/// Owns the set of saved meal ids.
///
/// Persisted as a JSON array of ids; the `BTreeSet` keeps serialization
/// order deterministic.
pub struct FavoritesStore {
    kv: KvStore,
    saved: BTreeSet<String>,
    listeners: Listeners<BTreeSet<String>>,
}

impl FavoritesStore {
    /// Creates the store, loading any previously saved ids.
    ///
    /// An absent or undecodable payload starts the store empty.
    pub fn new(kv: KvStore) -> Self {
        let saved = kv.get(STORAGE_KEY).unwrap_or_default();
        Self {
            kv,
            saved,
            listeners: Listeners::new(),
        }
    }

    /// Whether a meal is saved. No side effects.
    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.contains(id)
    }

    /// The current set of saved ids, sorted.
    pub fn saved(&self) -> &BTreeSet<String> {
        &self.saved
    }

    /// Saves the meal if it isn't saved, unsaves it if it is.
    ///
    /// Always valid for any id; persists afterward.
    pub fn toggle(&mut self, id: &str) {
        if !self.saved.remove(id) {
            self.saved.insert(id.to_string());
        }
        self.kv.set(STORAGE_KEY, &self.saved);
        self.listeners.notify(&self.saved);
    }

    /// Registers a listener called after each mutation.
    pub fn subscribe(&mut self, callback: impl Fn(&BTreeSet<String>) + 'static) {
        self.listeners.subscribe(callback);
    }
}
