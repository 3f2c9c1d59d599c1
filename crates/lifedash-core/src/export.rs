//! Export shapes consumed by download/file collaborators.
//!
//! Two lossless renditions of a [`DashboardResult`]: a flat table (CSV)
//! and a nested document (JSON). Both carry raw hours; display-unit
//! conversion is for on-screen summaries only.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dashboard::DashboardResult;
use crate::error::CoreError;

/// One row of the flat export table, in raw hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub activity: String,
    pub time_spent_hrs: f64,
    pub time_remaining_hrs: f64,
}

/// Flatten a result into export rows, one per category in order.
pub fn export_rows(result: &DashboardResult) -> Vec<ExportRow> {
    result
        .categories
        .iter()
        .map(|entry| ExportRow {
            activity: entry.category.name().to_string(),
            time_spent_hrs: entry.hours_spent,
            time_remaining_hrs: entry.hours_remaining,
        })
        .collect()
}

/// Render export rows as CSV with the canonical header.
pub fn to_csv(rows: &[ExportRow]) -> String {
    let mut out = String::from("Activity,Time Spent (hrs),Time Remaining (hrs)\n");
    for row in rows {
        out.push_str(&csv_field(&row.activity));
        out.push(',');
        out.push_str(&row.time_spent_hrs.to_string());
        out.push(',');
        out.push_str(&row.time_remaining_hrs.to_string());
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Nested export document keyed by category name, raw hours throughout.
///
/// Maps preserve category order (serde_json with `preserve_order`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub time_spent: Map<String, Value>,
    pub time_future: Map<String, Value>,
    pub categories: Map<String, Value>,
}

impl ExportDocument {
    /// Build the nested document from a computed result.
    pub fn from_result(result: &DashboardResult) -> Self {
        let mut time_spent = Map::new();
        let mut time_future = Map::new();
        let mut categories = Map::new();
        for entry in &result.categories {
            let name = entry.category.name().to_string();
            time_spent.insert(name.clone(), Value::from(entry.hours_spent));
            time_future.insert(name.clone(), Value::from(entry.hours_remaining));
            categories.insert(name, Value::from(entry.hours_per_day));
        }
        Self {
            time_spent,
            time_future,
            categories,
        }
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
