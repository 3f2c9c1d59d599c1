//! Activity categories and input normalization.
//!
//! Raw dashboard input is six fixed daily-hour values plus an ordered list
//! of user-defined categories. [`normalize`] merges them into a single
//! insertion-ordered [`CategoryMap`]: built-ins first in fixed order, then
//! custom entries in entry order. A custom entry whose name collides with
//! an existing entry overwrites that entry's hours in place
//! (last-write-wins); entries with empty names are dropped entirely.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};

/// The six fixed daily-hour inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyHours {
    #[serde(default = "default_job")]
    pub job: f64,
    #[serde(default = "default_eating")]
    pub eating: f64,
    #[serde(default = "default_travel")]
    pub travel: f64,
    #[serde(default = "default_sleep")]
    pub sleep: f64,
    #[serde(default = "default_exercise")]
    pub exercise: f64,
    #[serde(default = "default_family")]
    pub family: f64,
}

fn default_job() -> f64 {
    8.0
}
fn default_eating() -> f64 {
    2.0
}
fn default_travel() -> f64 {
    1.0
}
fn default_sleep() -> f64 {
    7.0
}
fn default_exercise() -> f64 {
    0.5
}
fn default_family() -> f64 {
    2.0
}

impl Default for DailyHours {
    fn default() -> Self {
        Self {
            job: default_job(),
            eating: default_eating(),
            travel: default_travel(),
            sleep: default_sleep(),
            exercise: default_exercise(),
            family: default_family(),
        }
    }
}

/// A user-defined activity with its daily commitment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomCategory {
    pub name: String,
    pub hours_per_day: f64,
}

/// A named activity slot in the category mapping.
///
/// Built-in variants carry the fixed display names; `Custom` carries a
/// user-supplied name; `FreeTime` is synthesized by the allocation engine,
/// never entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Working,
    Eating,
    Traveling,
    Sleeping,
    Exercise,
    FriendsFamily,
    Custom(String),
    FreeTime,
}

impl Category {
    /// The built-in categories in their fixed display order.
    pub const BUILTINS: [Category; 6] = [
        Category::Working,
        Category::Eating,
        Category::Traveling,
        Category::Sleeping,
        Category::Exercise,
        Category::FriendsFamily,
    ];

    /// Display name for this category.
    pub fn name(&self) -> &str {
        match self {
            Category::Working => "Working",
            Category::Eating => "Eating",
            Category::Traveling => "Traveling",
            Category::Sleeping => "Sleeping",
            Category::Exercise => "Exercise",
            Category::FriendsFamily => "Friends/Family",
            Category::Custom(name) => name,
            Category::FreeTime => "Free Time",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Insertion-ordered mapping from category to daily hours.
///
/// Names are unique: inserting a category whose name matches an existing
/// entry overwrites that entry's hours without changing its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryMap {
    entries: Vec<(Category, f64)>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite by display name, keeping the original position.
    pub fn insert(&mut self, category: Category, hours_per_day: f64) {
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.name() == category.name())
        {
            Some(slot) => slot.1 = hours_per_day,
            None => self.entries.push((category, hours_per_day)),
        }
    }

    /// Daily hours for a category by display name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(category, _)| category.name() == name)
            .map(|(_, hours)| *hours)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, f64)> {
        self.entries.iter().map(|(category, hours)| (category, *hours))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entered daily hours.
    pub fn total_hours_per_day(&self) -> f64 {
        self.entries.iter().map(|(_, hours)| hours).sum()
    }
}

/// Validate and merge fixed and custom inputs into one ordered mapping.
///
/// # Errors
///
/// Fails with a validation error when any hour value is outside [0, 24]
/// or not finite. Empty or whitespace-only custom names are dropped
/// silently, including their hours.
pub fn normalize(daily: &DailyHours, custom: &[CustomCategory]) -> Result<CategoryMap, CoreError> {
    let mut map = CategoryMap::new();

    for (category, hours) in [
        (Category::Working, daily.job),
        (Category::Eating, daily.eating),
        (Category::Traveling, daily.travel),
        (Category::Sleeping, daily.sleep),
        (Category::Exercise, daily.exercise),
        (Category::FriendsFamily, daily.family),
    ] {
        check_hours(category.name(), hours)?;
        map.insert(category, hours);
    }

    for entry in custom {
        let name = entry.name.trim();
        if name.is_empty() {
            continue;
        }
        check_hours(name, entry.hours_per_day)?;
        map.insert(Category::Custom(name.to_string()), entry.hours_per_day);
    }

    Ok(map)
}

pub(crate) fn check_hours(category: &str, hours: f64) -> Result<(), ValidationError> {
    if !hours.is_finite() || !(0.0..=24.0).contains(&hours) {
        return Err(ValidationError::HoursOutOfRange {
            category: category.to_string(),
            hours,
        });
    }
    Ok(())
}
