use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single item on the shopping list.
///
/// `quantity` is free text so "1L" or "a few" both work. `source_meal`
/// names the recipe that produced the item; `None` means it was added by
/// hand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: String,
    pub is_checked: bool,
    pub source_meal: Option<String>,
}

impl ShoppingItem {
    /// Creates a new unchecked item with a fresh identifier.
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        source_meal: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity: quantity.into(),
            is_checked: false,
            source_meal,
        }
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.is_checked { "[x]" } else { "[ ]" };
        if self.quantity.is_empty() {
            write!(f, "{} {}", check, self.name)
        } else {
            write!(f, "{} {:<20} {}", check, self.name, self.quantity)
        }
    }
}
