use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::meal::Meal;

/// A single logged instance of a meal being eaten.
///
/// Entries snapshot the meal's name and nutrition at logging time, so
/// later catalog changes never rewrite history. Append-only: the intake
/// store never edits or removes entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntakeEntry {
    pub id: Uuid,
    pub meal_id: String,
    pub meal_name: String,
    pub calories: i32,
    pub carbs: i32,
    pub protein: i32,
    pub fat: i32,
    pub timestamp: DateTime<Utc>,
}

impl IntakeEntry {
    /// Creates an entry for a meal eaten now.
    pub fn from_meal(meal: &Meal) -> Self {
        Self {
            id: Uuid::new_v4(),
            meal_id: meal.id.clone(),
            meal_name: meal.name.clone(),
            calories: meal.calories,
            carbs: meal.carbs,
            protein: meal.protein,
            fat: meal.fat,
            timestamp: Utc::now(),
        }
    }

    /// The local calendar day this entry falls on.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Local).date_naive()
    }
}

impl fmt::Display for IntakeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} kcal)",
            self.timestamp.with_timezone(&Local).format("%H:%M"),
            self.meal_name,
            self.calories
        )
    }
}

/// One calendar day of intake history.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_calories: i32,
    /// Entries for the day, newest first
    pub entries: Vec<IntakeEntry>,
}
