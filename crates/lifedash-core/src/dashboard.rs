//! The single computation pipeline: request in, result out.
//!
//! Raw inputs flow one way: normalized categories, lifespan figures,
//! allocation totals, then unit-converted summary rows. Every value is
//! recomputed from scratch on each call; there is no cached state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::allocation::{AllocationEntry, AllocationReport, HOURS_PER_DAY};
use crate::category::{self, CustomCategory, DailyHours};
use crate::error::CoreError;
use crate::lifespan::LifespanFigures;
use crate::summary::{build_summary, SummaryRow};
use crate::unit::DisplayUnit;

/// Everything one computation pass needs, passed by value.
///
/// The reference date stands in for "today"; callers that want wall-clock
/// behavior resolve it themselves before building the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub date_of_birth: NaiveDate,
    pub expected_age_years: f64,
    #[serde(default)]
    pub daily_hours: DailyHours,
    #[serde(default)]
    pub custom_categories: Vec<CustomCategory>,
    pub reference_date: NaiveDate,
    #[serde(default)]
    pub display_unit: DisplayUnit,
}

/// Computed dashboard data, consumed by display and export layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResult {
    pub age_years: f64,
    pub expected_age_years: f64,
    pub days_lived: i64,
    pub days_remaining: f64,
    pub hours_remaining: f64,
    pub weeks_remaining: f64,
    pub months_remaining: f64,
    pub display_unit: DisplayUnit,
    /// Remaining lifespan expressed in `display_unit`
    pub remaining_in_unit: f64,
    /// Ordered per-category totals, Free Time last when present
    pub categories: Vec<AllocationEntry>,
    pub total_committed_hours: f64,
    pub free_hours_per_day: f64,
    pub is_over_committed: bool,
    /// One row per category, in `display_unit`
    pub summary: Vec<SummaryRow>,
}

impl DashboardRequest {
    /// Run the full pipeline.
    ///
    /// # Errors
    ///
    /// Fails on out-of-range hours, an expected age outside [1, 120], or
    /// a birth date after the reference date. Over-commitment is not an
    /// error: the result is complete with `is_over_committed` set.
    pub fn compute(&self) -> Result<DashboardResult, CoreError> {
        let categories = category::normalize(&self.daily_hours, &self.custom_categories)?;
        let lifespan = LifespanFigures::compute(
            self.date_of_birth,
            self.expected_age_years,
            self.reference_date,
        )?;
        let allocation = AllocationReport::compute(&categories, &lifespan);
        let summary = build_summary(&allocation, self.display_unit);

        Ok(DashboardResult {
            age_years: lifespan.age_years,
            expected_age_years: self.expected_age_years,
            days_lived: lifespan.days_lived,
            days_remaining: lifespan.days_remaining,
            hours_remaining: lifespan.hours_remaining,
            weeks_remaining: lifespan.weeks_remaining,
            months_remaining: lifespan.months_remaining,
            display_unit: self.display_unit,
            remaining_in_unit: lifespan.remaining_in(self.display_unit),
            total_committed_hours: allocation.total_committed_hours,
            free_hours_per_day: allocation.free_hours_per_day,
            is_over_committed: allocation.is_over_committed,
            categories: allocation.entries,
            summary,
        })
    }
}

impl DashboardResult {
    /// Free days left across the remaining lifespan, the headline insight.
    pub fn free_days_remaining(&self) -> f64 {
        self.free_hours_per_day * self.days_remaining / HOURS_PER_DAY
    }

    /// Entry for a category by display name.
    pub fn category(&self, name: &str) -> Option<&AllocationEntry> {
        self.categories.iter().find(|e| e.category.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> DashboardRequest {
        DashboardRequest {
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            expected_age_years: 63.0,
            daily_hours: DailyHours::default(),
            custom_categories: Vec::new(),
            reference_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            display_unit: DisplayUnit::Years,
        }
    }

    #[test]
    fn result_carries_lifespan_and_allocation_figures() {
        let result = request().compute().unwrap();
        assert_eq!(result.days_lived, 8766);
        assert_eq!(result.age_years, 24.0);
        assert_eq!(result.total_committed_hours, 20.5);
        assert_eq!(result.free_hours_per_day, 3.5);
        assert!(!result.is_over_committed);
        assert_eq!(result.categories.len(), 7);
        assert_eq!(result.summary.len(), 7);
    }

    #[test]
    fn remaining_in_unit_matches_display_unit() {
        let mut req = request();
        req.display_unit = DisplayUnit::Weeks;
        let result = req.compute().unwrap();
        assert!((result.remaining_in_unit - result.weeks_remaining).abs() < 1e-9);
    }

    #[test]
    fn free_days_remaining_scales_free_hours_over_days_left() {
        let result = request().compute().unwrap();
        let expected = 3.5 * result.days_remaining / 24.0;
        assert!((result.free_days_remaining() - expected).abs() < 1e-9);
    }

    #[test]
    fn request_round_trips_through_json() {
        let req = request();
        let json = serde_json::to_string(&req).unwrap();
        let back: DashboardRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }
}
