//! Tabular summary rows with unit-converted values and percentage splits.

use serde::{Deserialize, Serialize};

use crate::allocation::AllocationReport;
use crate::unit::DisplayUnit;

/// One line of the detailed time summary, in the chosen display unit.
///
/// Percentages split spent vs remaining within the row; they sum to 100
/// whenever the row total is positive, and are both 0 for an all-zero row
/// (never a division by zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub activity: String,
    pub spent: f64,
    pub remaining: f64,
    pub pct_spent: f64,
    pub pct_remaining: f64,
}

/// Build one summary row per allocation entry, in entry order.
pub fn build_summary(report: &AllocationReport, unit: DisplayUnit) -> Vec<SummaryRow> {
    report
        .entries
        .iter()
        .map(|entry| {
            let spent = unit.from_hours(entry.hours_spent);
            let remaining = unit.from_hours(entry.hours_remaining);
            let total = spent + remaining;
            let (pct_spent, pct_remaining) = if total > 0.0 {
                (spent / total * 100.0, remaining / total * 100.0)
            } else {
                (0.0, 0.0)
            };
            SummaryRow {
                activity: entry.category.name().to_string(),
                spent,
                remaining,
                pct_spent,
                pct_remaining,
            }
        })
        .collect()
}
