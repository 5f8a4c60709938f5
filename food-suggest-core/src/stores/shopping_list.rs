//! Shopping list with merge-on-add and a versioned load path.

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use super::Listeners;
use crate::models::ShoppingItem;
use crate::storage::KvStore;

const STORAGE_KEY: &str = "shopping_list_items_v2";
const LEGACY_STORAGE_KEY: &str = "shopping_list_items_v1";

/// Pre-`source_meal` item shape, read only for migration.
#[derive(Deserialize)]
struct LegacyItem {
    id: Uuid,
    name: String,
    quantity: String,
    is_checked: bool,
}

/// Owns the ordered shopping list.
///
/// Invariant: at most one item per (name, source meal) pair, compared
/// case-insensitively with a missing or blank source treated as the
/// single "no source" key. Adding a duplicate updates the existing item
/// instead of inserting a new row.
pub struct ShoppingListStore {
    kv: KvStore,
    items: Vec<ShoppingItem>,
    listeners: Listeners<[ShoppingItem]>,
}

impl ShoppingListStore {
    /// Creates the store, loading the current-version payload.
    ///
    /// If that is absent or undecodable, the legacy payload is tried and
    /// upgraded in place (`source_meal = None`), then persisted once
    /// under the current key. Failing both, the list starts empty.
    pub fn new(kv: KvStore) -> Self {
        let items = Self::load(&kv);
        Self {
            kv,
            items,
            listeners: Listeners::new(),
        }
    }

    fn load(kv: &KvStore) -> Vec<ShoppingItem> {
        if let Some(items) = kv.get::<Vec<ShoppingItem>>(STORAGE_KEY) {
            return items;
        }

        if let Some(legacy) = kv.get::<Vec<LegacyItem>>(LEGACY_STORAGE_KEY) {
            let upgraded: Vec<ShoppingItem> = legacy
                .into_iter()
                .map(|item| ShoppingItem {
                    id: item.id,
                    name: item.name,
                    quantity: item.quantity,
                    is_checked: item.is_checked,
                    source_meal: None,
                })
                .collect();
            info!(items = upgraded.len(), "migrated legacy shopping list");
            kv.set(STORAGE_KEY, &upgraded);
            return upgraded;
        }

        Vec::new()
    }

    /// The current items, in insertion order.
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Adds an item, or merges into an existing one.
    ///
    /// The name is trimmed; an empty result is silently ignored. A match
    /// on the (name, source) key updates that item's quantity and resets
    /// its checkmark; otherwise a new unchecked item is appended.
    pub fn add(&mut self, name: &str, quantity: &str, source_meal: Option<&str>) {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return;
        }

        let name_key = trimmed.to_lowercase();
        let source_key = normalize_source(source_meal);

        if let Some(item) = self.items.iter_mut().find(|item| {
            item.name.to_lowercase() == name_key
                && normalize_source(item.source_meal.as_deref()) == source_key
        }) {
            item.quantity = quantity.to_string();
            item.is_checked = false;
        } else {
            let source = source_meal
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            self.items.push(ShoppingItem::new(trimmed, quantity, source));
        }

        self.persist();
    }

    /// Adds every (name, quantity) entry in order; later duplicates win.
    pub fn add_all<'a, I>(&mut self, entries: I, source_meal: Option<&str>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, quantity) in entries {
            self.add(name, quantity, source_meal);
        }
    }

    /// Flips the checkmark on an item. Unknown ids are ignored.
    pub fn toggle(&mut self, id: Uuid) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.is_checked = !item.is_checked;
            self.persist();
        }
    }

    /// Removes an item by id. Unknown ids are ignored.
    pub fn remove(&mut self, id: Uuid) {
        let len_before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() != len_before {
            self.persist();
        }
    }

    /// Removes items at the given positions.
    ///
    /// Positions are applied highest first so the remaining indices stay
    /// valid; out-of-range positions are skipped.
    pub fn remove_indices(&mut self, indices: &[usize]) {
        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();

        for index in sorted {
            if index < self.items.len() {
                self.items.remove(index);
            }
        }

        self.persist();
    }

    /// Empties the list.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Registers a listener called after each mutation.
    pub fn subscribe(&mut self, callback: impl Fn(&[ShoppingItem]) + 'static) {
        self.listeners.subscribe(callback);
    }

    fn persist(&self) {
        self.kv.set(STORAGE_KEY, &self.items);
        self.listeners.notify(&self.items);
    }
}

/// Normalizes a source-meal label into its grouping key.
///
/// Blank and missing sources collapse to the same `None` key.
fn normalize_source(source: Option<&str>) -> Option<String> {
    source
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn test_store() -> (ShoppingListStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let kv = KvStore::new(temp_dir.path().to_path_buf());
        (ShoppingListStore::new(kv), temp_dir)
    }

    #[test]
    fn test_add_appends_unchecked_item() {
        let (mut store, _temp) = test_store();
        store.add("Milk", "1L", None);

        assert_eq!(store.items().len(), 1);
        let item = &store.items()[0];
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity, "1L");
        assert!(!item.is_checked);
        assert!(item.source_meal.is_none());
    }

    #[test]
    fn test_add_trims_name_and_ignores_empty() {
        let (mut store, _temp) = test_store();

        store.add("  Eggs  ", "12", None);
        assert_eq!(store.items()[0].name, "Eggs");

        store.add("   ", "1", None);
        store.add("", "1", None);
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_add_merges_same_name_and_source() {
        let (mut store, _temp) = test_store();

        store.add("Milk", "1L", Some("Pasta"));
        let id = store.items()[0].id;
        store.toggle(id);
        assert!(store.items()[0].is_checked);

        store.add("Milk", "2L", Some("Pasta"));

        assert_eq!(store.items().len(), 1);
        let item = &store.items()[0];
        assert_eq!(item.id, id);
        assert_eq!(item.quantity, "2L");
        assert!(!item.is_checked);
    }

    #[test]
    fn test_add_merge_is_case_insensitive() {
        let (mut store, _temp) = test_store();

        store.add("milk", "1L", Some("pasta"));
        store.add("MILK", "2L", Some("PASTA"));

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, "2L");
    }

    #[test]
    fn test_add_different_sources_stay_separate() {
        let (mut store, _temp) = test_store();

        store.add("Milk", "1L", Some("Pasta"));
        store.add("Milk", "2L", Some("Oatmeal"));
        store.add("Milk", "3L", None);

        assert_eq!(store.items().len(), 3);
    }

    #[test]
    fn test_blank_source_equals_no_source() {
        let (mut store, _temp) = test_store();

        store.add("Milk", "1L", None);
        store.add("Milk", "2L", Some("  "));

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, "2L");
    }

    #[test]
    fn test_add_all_later_duplicates_win() {
        let (mut store, _temp) = test_store();

        store.add_all(
            [("Tomatoes", "2"), ("Garlic", "1 head"), ("Tomatoes", "4")],
            Some("Pasta Pomodoro"),
        );

        assert_eq!(store.items().len(), 2);
        assert_eq!(store.items()[0].name, "Tomatoes");
        assert_eq!(store.items()[0].quantity, "4");
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let (mut store, _temp) = test_store();
        store.add("Milk", "1L", None);

        store.toggle(Uuid::new_v4());
        assert!(!store.items()[0].is_checked);
    }

    #[test]
    fn test_remove_by_id() {
        let (mut store, _temp) = test_store();
        store.add("Milk", "1L", None);
        store.add("Eggs", "12", None);

        let id = store.items()[0].id;
        store.remove(id);

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].name, "Eggs");

        // Unknown id is a no-op
        store.remove(id);
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_remove_indices_highest_first() {
        let (mut store, _temp) = test_store();
        store.add("Milk", "", None);
        store.add("Eggs", "", None);
        store.add("Bread", "", None);

        store.remove_indices(&[0, 2]);

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].name, "Eggs");
    }

    #[test]
    fn test_remove_indices_out_of_range_skipped() {
        let (mut store, _temp) = test_store();
        store.add("Milk", "", None);

        store.remove_indices(&[5, 0, 5]);
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_clear() {
        let (mut store, _temp) = test_store();
        store.add("Milk", "1L", None);
        store.add("Eggs", "12", None);

        store.clear();
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_persists_across_reload() {
        let temp_dir = TempDir::new().unwrap();
        let kv = KvStore::new(temp_dir.path().to_path_buf());

        let mut store = ShoppingListStore::new(kv.clone());
        store.add("Milk", "1L", Some("Oatmeal"));

        let reloaded = ShoppingListStore::new(kv);
        assert_eq!(reloaded.items().len(), 1);
        assert_eq!(reloaded.items()[0].name, "Milk");
        assert_eq!(reloaded.items()[0].source_meal.as_deref(), Some("Oatmeal"));
    }

    #[test]
    fn test_legacy_payload_migrates_once() {
        let temp_dir = TempDir::new().unwrap();
        let kv = KvStore::new(temp_dir.path().to_path_buf());

        let legacy = json!([
            {"id": Uuid::new_v4(), "name": "Milk", "quantity": "1L", "is_checked": true},
            {"id": Uuid::new_v4(), "name": "Eggs", "quantity": "12", "is_checked": false},
        ]);
        kv.save(LEGACY_STORAGE_KEY, &legacy).unwrap();

        let store = ShoppingListStore::new(kv.clone());
        assert_eq!(store.items().len(), 2);
        assert!(store.items().iter().all(|i| i.source_meal.is_none()));
        assert!(store.items()[0].is_checked);

        // Migration persisted under the current key; reloading is stable
        assert!(kv.exists(STORAGE_KEY));
        let reloaded = ShoppingListStore::new(kv);
        assert_eq!(reloaded.items(), store.items());
    }

    #[test]
    fn test_corrupt_current_payload_falls_back_to_legacy() {
        let temp_dir = TempDir::new().unwrap();
        let kv = KvStore::new(temp_dir.path().to_path_buf());
        std::fs::create_dir_all(kv.data_dir()).unwrap();
        std::fs::write(kv.path(STORAGE_KEY), b"[{broken").unwrap();

        let legacy = json!([
            {"id": Uuid::new_v4(), "name": "Bread", "quantity": "", "is_checked": false},
        ]);
        kv.save(LEGACY_STORAGE_KEY, &legacy).unwrap();

        let store = ShoppingListStore::new(kv);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].name, "Bread");
    }

    #[test]
    fn test_both_payloads_missing_starts_empty() {
        let (store, _temp) = test_store();
        assert!(store.items().is_empty());
    }
}
