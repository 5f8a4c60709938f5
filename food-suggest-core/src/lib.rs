//! FoodSuggest Core Library
//!
//! Shared models, state stores, and persistence for FoodSuggest
//! applications. The stores own small in-memory collections, persist
//! them to a flat key-value layer after every mutation, and notify
//! registered listeners synchronously.

pub mod catalog;
pub mod models;
pub mod storage;
pub mod stores;

pub use catalog::Catalog;
pub use models::{macros_kcal, DailySummary, IntakeEntry, MacroTargets, Meal, ShoppingItem};
pub use storage::{KvStore, StorageError};
pub use stores::{
    DailyIntakeStore, FavoritesStore, Language, SettingsStore, ShoppingListStore, Theme,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
