use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily macro targets in grams.
///
/// Static configuration; not user-editable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    pub carbs: i32,
    pub protein: i32,
    pub fat: i32,
}

impl MacroTargets {
    pub const DEFAULT: Self = Self {
        carbs: 250,
        protein: 140,
        fat: 70,
    };
}

impl Default for MacroTargets {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for MacroTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}g carbs, {}g protein, {}g fat",
            self.carbs, self.protein, self.fat
        )
    }
}
