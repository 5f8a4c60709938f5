//! Data models shared across the stores.

pub mod intake_entry;
pub mod macro_targets;
pub mod meal;
pub mod shopping_item;

pub use intake_entry::{DailySummary, IntakeEntry};
pub use macro_targets::MacroTargets;
pub use meal::{macros_kcal, Meal};
pub use shopping_item::ShoppingItem;
