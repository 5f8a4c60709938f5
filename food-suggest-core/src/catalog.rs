//! Built-in meal catalog.
//!
//! The read-only collaborator the stores consume meals from. Fixed,
//! in-memory data; the stores never mutate it.

use crate::models::Meal;

/// Ordered, read-only collection of meals.
pub struct Catalog {
    meals: Vec<Meal>,
}

impl Catalog {
    /// All meals, in catalog order.
    pub fn all(&self) -> &[Meal] {
        &self.meals
    }

    /// Looks up a meal by id.
    pub fn get(&self, id: &str) -> Option<&Meal> {
        self.meals.iter().find(|meal| meal.id == id)
    }

    /// Meals in a category (case-insensitive).
    pub fn by_category(&self, category: &str) -> Vec<&Meal> {
        let category_lower = category.to_lowercase();
        self.meals
            .iter()
            .filter(|meal| meal.category.to_lowercase() == category_lower)
            .collect()
    }

    /// Distinct category names, in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for meal in &self.meals {
            if !categories.contains(&meal.category.as_str()) {
                categories.push(&meal.category);
            }
        }
        categories
    }
}

fn meal(
    id: &str,
    name: &str,
    image_name: &str,
    calories: i32,
    protein: i32,
    carbs: i32,
    fat: i32,
    description: &str,
    category: &str,
    ingredients: &[&str],
) -> Meal {
    Meal {
        id: id.to_string(),
        name: name.to_string(),
        image_name: image_name.to_string(),
        calories,
        protein,
        carbs,
        fat,
        description: description.to_string(),
        category: category.to_string(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            meals: vec![
                meal(
                    "grilled-chicken-bowl",
                    "Grilled Chicken Bowl",
                    "bowl",
                    520,
                    42,
                    48,
                    18,
                    "Grilled chicken breast served with brown rice, avocado, and seasonal vegetables. High-protein and balanced.",
                    "High Protein",
                    &["Chicken breast", "Brown rice", "Avocado", "Broccoli", "Olive oil"],
                ),
                meal(
                    "creamy-mushroom-pasta",
                    "Creamy Mushroom Pasta",
                    "fork.knife",
                    610,
                    18,
                    72,
                    24,
                    "Pasta with creamy mushroom sauce, garlic, and parmesan cheese. Comfort food with rich flavor.",
                    "Comfort",
                    &["Pasta", "Mushrooms", "Cream", "Garlic", "Parmesan"],
                ),
                meal(
                    "baked-salmon-veggies",
                    "Baked Salmon & Veggies",
                    "fish",
                    480,
                    38,
                    32,
                    22,
                    "Oven-baked salmon with olive oil roasted vegetables. Rich in omega-3.",
                    "Healthy",
                    &["Salmon fillet", "Zucchini", "Bell pepper", "Olive oil", "Lemon"],
                ),
                meal(
                    "chicken-wrap",
                    "Chicken Wrap",
                    "wrap",
                    450,
                    30,
                    40,
                    16,
                    "Whole wheat wrap with grilled chicken, yogurt sauce, and fresh greens.",
                    "Quick Meal",
                    &["Whole wheat tortilla", "Chicken breast", "Yogurt", "Lettuce", "Tomato"],
                ),
                meal(
                    "avocado-egg-toast",
                    "Avocado Egg Toast",
                    "toast",
                    390,
                    16,
                    34,
                    20,
                    "Toasted sourdough bread topped with smashed avocado and poached eggs.",
                    "Breakfast",
                    &["Sourdough bread", "Avocado", "Eggs", "Chili flakes"],
                ),
                meal(
                    "lentil-curry",
                    "Lentil Curry",
                    "leaf",
                    430,
                    22,
                    58,
                    12,
                    "Spiced red lentil curry cooked with coconut milk and herbs.",
                    "Vegetarian",
                    &["Red lentils", "Coconut milk", "Onion", "Curry paste", "Rice"],
                ),
                meal(
                    "homemade-beef-burger",
                    "Homemade Beef Burger",
                    "takeoutbag.and.cup.and.straw",
                    680,
                    36,
                    45,
                    38,
                    "Juicy beef patty with cheddar cheese and homemade sauce.",
                    "Comfort",
                    &["Ground beef", "Burger buns", "Cheddar", "Onion", "Pickles"],
                ),
                meal(
                    "falafel-plate",
                    "Falafel Plate",
                    "leaf.circle",
                    510,
                    21,
                    52,
                    24,
                    "Crispy falafel with hummus, salad, and pita bread.",
                    "Vegetarian",
                    &["Chickpeas", "Pita bread", "Hummus", "Parsley", "Cucumber"],
                ),
                meal(
                    "teriyaki-chicken-rice",
                    "Teriyaki Chicken Rice",
                    "takeoutbag.and.cup.and.straw.fill",
                    560,
                    34,
                    62,
                    16,
                    "Sweet and savory teriyaki chicken served over steamed rice.",
                    "Asian",
                    &["Chicken thighs", "Rice", "Soy sauce", "Honey", "Sesame seeds"],
                ),
                meal(
                    "oatmeal-with-fruits",
                    "Oatmeal with Fruits",
                    "sunrise",
                    350,
                    14,
                    55,
                    8,
                    "Oatmeal topped with banana, berries, and honey.",
                    "Breakfast",
                    &["Oats", "Milk", "Banana", "Berries", "Honey"],
                ),
            ],
        }
    }
}
