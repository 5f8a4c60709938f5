//! State stores: owned collections, persisted after every mutation.
//!
//! Each store exclusively owns its collection, persists it through the
//! key-value layer after every mutation, and notifies registered
//! listeners synchronously. All stores are single-writer and never
//! surface persistence failures to callers.

pub mod favorites;
pub mod intake;
pub mod settings;
pub mod shopping_list;

pub use favorites::FavoritesStore;
pub use intake::DailyIntakeStore;
pub use settings::{Language, SettingsStore, Theme};
pub use shopping_list::ShoppingListStore;

/// Registered observers for a store's state.
///
/// Callbacks run synchronously after each mutation, in registration
/// order, with a reference to the store's current collection. There is
/// no unsubscribe; observers live as long as the store.
pub struct Listeners<T: ?Sized> {
    callbacks: Vec<Box<dyn Fn(&T)>>,
}

impl<T: ?Sized> Listeners<T> {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, callback: impl Fn(&T) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    pub fn notify(&self, state: &T) {
        for callback in &self.callbacks {
            callback(state);
        }
    }
}

impl<T: ?Sized> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}
