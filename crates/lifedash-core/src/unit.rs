//! Display units and their fixed hour-based conversion factors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Time unit used for presenting durations.
///
/// Every quantity in the core is hour-denominated; a display unit only
/// rescales values at the presentation edge. Factors are fixed calendar
/// averages: a month is 30.4375 days, a year 365.25 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DisplayUnit {
    Hours,
    Days,
    Weeks,
    Months,
    #[default]
    Years,
}

impl DisplayUnit {
    /// All units, in coarsest-first display order.
    pub const ALL: [DisplayUnit; 5] = [
        DisplayUnit::Years,
        DisplayUnit::Months,
        DisplayUnit::Weeks,
        DisplayUnit::Days,
        DisplayUnit::Hours,
    ];

    /// How many hours one of this unit represents.
    pub fn hours_per_unit(self) -> f64 {
        match self {
            DisplayUnit::Hours => 1.0,
            DisplayUnit::Days => 24.0,
            DisplayUnit::Weeks => 24.0 * 7.0,
            DisplayUnit::Months => 24.0 * 30.4375,
            DisplayUnit::Years => 24.0 * 365.25,
        }
    }

    /// Convert an hour-denominated value into this unit.
    pub fn from_hours(self, hours: f64) -> f64 {
        hours / self.hours_per_unit()
    }

    /// Convert a value in this unit back into hours.
    pub fn to_hours(self, value: f64) -> f64 {
        value * self.hours_per_unit()
    }

    /// Display name, matching the on-screen selector labels.
    pub fn name(self) -> &'static str {
        match self {
            DisplayUnit::Hours => "Hours",
            DisplayUnit::Days => "Days",
            DisplayUnit::Weeks => "Weeks",
            DisplayUnit::Months => "Months",
            DisplayUnit::Years => "Years",
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisplayUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hours" | "hour" => Ok(DisplayUnit::Hours),
            "days" | "day" => Ok(DisplayUnit::Days),
            "weeks" | "week" => Ok(DisplayUnit::Weeks),
            "months" | "month" => Ok(DisplayUnit::Months),
            "years" | "year" => Ok(DisplayUnit::Years),
            _ => Err(CoreError::UnknownUnit(s.to_string())),
        }
    }
}
