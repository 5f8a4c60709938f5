//! Daily intake log and derived macro totals.

use chrono::Local;
use std::collections::BTreeMap;

use super::Listeners;
use crate::models::{DailySummary, IntakeEntry, MacroTargets, Meal};
use crate::storage::KvStore;

const STORAGE_KEY: &str = "intake_entries_v1";

/// Owns the append-only log of eaten meals.
///
/// Today's macro totals are derived from entries whose timestamp falls
/// within the current local calendar day; they are recomputed at load
/// and after every `add`, so prior sessions' history counts correctly.
pub struct DailyIntakeStore {
    kv: KvStore,
    entries: Vec<IntakeEntry>,
    targets: MacroTargets,
    carbs_consumed: i32,
    protein_consumed: i32,
    fat_consumed: i32,
    listeners: Listeners<[IntakeEntry]>,
}

impl DailyIntakeStore {
    /// Creates the store, loading any previously logged entries.
    pub fn new(kv: KvStore) -> Self {
        let entries = kv.get(STORAGE_KEY).unwrap_or_default();
        let mut store = Self {
            kv,
            entries,
            targets: MacroTargets::DEFAULT,
            carbs_consumed: 0,
            protein_consumed: 0,
            fat_consumed: 0,
            listeners: Listeners::new(),
        };
        store.recompute_today();
        store
    }

    /// Logs a meal as eaten now.
    ///
    /// The entry snapshots the meal's name and nutrition; later catalog
    /// edits never change logged history.
    pub fn add(&mut self, meal: &Meal) {
        self.entries.push(IntakeEntry::from_meal(meal));
        self.recompute_today();
        self.kv.set(STORAGE_KEY, &self.entries);
        self.listeners.notify(&self.entries);
    }

    /// All logged entries, oldest first.
    pub fn entries(&self) -> &[IntakeEntry] {
        &self.entries
    }

    /// The fixed daily macro targets.
    pub fn targets(&self) -> MacroTargets {
        self.targets
    }

    /// Grams of carbohydrate eaten today.
    pub fn carbs_consumed(&self) -> i32 {
        self.carbs_consumed
    }

    /// Grams of protein eaten today.
    pub fn protein_consumed(&self) -> i32 {
        self.protein_consumed
    }

    /// Grams of fat eaten today.
    pub fn fat_consumed(&self) -> i32 {
        self.fat_consumed
    }

    /// Per-day history for the most recent `limit_days` days with entries.
    ///
    /// Days are returned newest first; entries within a day newest first.
    /// Read-only.
    pub fn daily_summaries(&self, limit_days: usize) -> Vec<DailySummary> {
        let mut by_day: BTreeMap<_, Vec<IntakeEntry>> = BTreeMap::new();
        for entry in &self.entries {
            by_day.entry(entry.local_date()).or_default().push(entry.clone());
        }

        by_day
            .into_iter()
            .rev()
            .take(limit_days)
            .map(|(date, mut entries)| {
                entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                let total_calories = entries.iter().map(|e| e.calories).sum();
                DailySummary {
                    date,
                    total_calories,
                    entries,
                }
            })
            .collect()
    }

    /// Registers a listener called after each mutation.
    pub fn subscribe(&mut self, callback: impl Fn(&[IntakeEntry]) + 'static) {
        self.listeners.subscribe(callback);
    }

    fn recompute_today(&mut self) {
        let today = Local::now().date_naive();
        let todays = self.entries.iter().filter(|e| e.local_date() == today);

        self.carbs_consumed = 0;
        self.protein_consumed = 0;
        self.fat_consumed = 0;
        for entry in todays {
            self.carbs_consumed += entry.carbs;
            self.protein_consumed += entry.protein;
            self.fat_consumed += entry.fat;
        }
    }
}
