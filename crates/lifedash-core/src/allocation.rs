//! Per-category spent/remaining hour totals with free-time derivation.

use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryMap};
use crate::lifespan::LifespanFigures;

/// Hours in a day, the budget free time is derived from.
pub const HOURS_PER_DAY: f64 = 24.0;

/// One activity's lifetime totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub category: Category,
    /// Daily rate this entry was projected from
    pub hours_per_day: f64,
    /// hours_per_day x days lived
    pub hours_spent: f64,
    /// hours_per_day x days remaining
    pub hours_remaining: f64,
}

/// Full allocation breakdown for one computation pass.
///
/// Entries keep the category-map order, with a synthesized Free Time entry
/// appended last when there is any residual daily time. When committed
/// hours reach exactly 24 no Free Time entry is emitted at all.
///
/// A user-entered category named "Free Time" counts toward the committed
/// total like any other entry, but the synthesized residual overwrites it
/// in place (last-write-wins, as for any colliding name) so the name stays
/// unique within the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    pub entries: Vec<AllocationEntry>,
    /// Sum of all entered daily hours, excluding free time
    pub total_committed_hours: f64,
    /// max(0, 24 - total committed)
    pub free_hours_per_day: f64,
    /// Advisory: committed hours exceed 24; results are still complete
    pub is_over_committed: bool,
}

impl AllocationReport {
    /// Project the category mapping over days lived and days remaining.
    pub fn compute(categories: &CategoryMap, lifespan: &LifespanFigures) -> Self {
        let total_committed_hours = categories.total_hours_per_day();
        let free_hours_per_day = (HOURS_PER_DAY - total_committed_hours).max(0.0);
        let is_over_committed = total_committed_hours > HOURS_PER_DAY;

        let days_lived = lifespan.days_lived as f64;
        let project = |rate: f64, category: Category| AllocationEntry {
            category,
            hours_per_day: rate,
            hours_spent: rate * days_lived,
            hours_remaining: rate * lifespan.days_remaining,
        };

        let mut entries: Vec<AllocationEntry> = categories
            .iter()
            .map(|(category, rate)| project(rate, category.clone()))
            .collect();

        if free_hours_per_day > 0.0 {
            let free = project(free_hours_per_day, Category::FreeTime);
            match entries
                .iter_mut()
                .find(|e| e.category.name() == free.category.name())
            {
                Some(slot) => *slot = free,
                None => entries.push(free),
            }
        }

        Self {
            entries,
            total_committed_hours,
            free_hours_per_day,
            is_over_committed,
        }
    }

    /// Entry for a category by display name.
    pub fn get(&self, name: &str) -> Option<&AllocationEntry> {
        self.entries.iter().find(|e| e.category.name() == name)
    }

    /// Total hours spent across all categories, free time included.
    pub fn hours_spent_total(&self) -> f64 {
        self.entries.iter().map(|e| e.hours_spent).sum()
    }

    /// Total hours remaining across all categories, free time included.
    pub fn hours_remaining_total(&self) -> f64 {
        self.entries.iter().map(|e| e.hours_remaining).sum()
    }
}
