use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilocalories per gram of carbohydrate or protein.
pub const KCAL_PER_GRAM_CARB_PROTEIN: i32 = 4;
/// Kilocalories per gram of fat.
pub const KCAL_PER_GRAM_FAT: i32 = 9;

/// Derives kilocalories from macro grams (4/4/9 conversion).
///
/// Presentation helper; the stores persist the catalog's `calories` value
/// as-is and never recompute it.
pub fn macros_kcal(carbs: i32, protein: i32, fat: i32) -> i32 {
    (carbs + protein) * KCAL_PER_GRAM_CARB_PROTEIN + fat * KCAL_PER_GRAM_FAT
}

/// A meal from the catalog.
///
/// Read-only data supplied by the catalog collaborator. The stores consume
/// only the id, name, calories, and macro values; everything else is
/// presentation data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    /// Stable catalog identifier (slug)
    pub id: String,
    pub name: String,
    /// Symbolic image reference for the UI layer
    pub image_name: String,
    pub calories: i32,
    /// Protein in grams
    pub protein: i32,
    /// Carbohydrates in grams
    pub carbs: i32,
    /// Fat in grams
    pub fat: i32,
    pub description: String,
    pub category: String,
    /// Ingredient names, used to build shopping lists
    pub ingredients: Vec<String>,
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.len()))?;
        writeln!(f, "Category: {}", self.category)?;
        writeln!(f, "Calories: {} kcal", self.calories)?;
        writeln!(
            f,
            "Macros: {}g carbs, {}g protein, {}g fat",
            self.carbs, self.protein, self.fat
        )?;

        if !self.description.is_empty() {
            writeln!(f, "\n{}", self.description)?;
        }

        if !self.ingredients.is_empty() {
            writeln!(f, "\nIngredients:")?;
            for ingredient in &self.ingredients {
                writeln!(f, "  - {}", ingredient)?;
            }
        }

        Ok(())
    }
}
