//! Lifespan figures derived from date of birth and expected age.
//!
//! The reference date ("today") is always supplied by the caller; the core
//! never reads a system clock, so every computation is reproducible.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::unit::DisplayUnit;

/// Average calendar days per year.
pub const DAYS_PER_YEAR: f64 = 365.25;
/// Average calendar days per month (365.25 / 12).
pub const DAYS_PER_MONTH: f64 = 30.4375;

/// Age and remaining-time quantities for one person.
///
/// All remaining figures floor at zero: once the expected age has been
/// reached or exceeded they are exactly 0, never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifespanFigures {
    /// Real-valued age, days lived / 365.25
    pub age_years: f64,
    /// Whole calendar days between birth and the reference date
    pub days_lived: i64,
    /// max(0, expected lifespan in days - days lived)
    pub days_remaining: f64,
    pub hours_remaining: f64,
    pub weeks_remaining: f64,
    pub months_remaining: f64,
}

impl LifespanFigures {
    /// Derive lifespan figures from a birth date, an expected age and the
    /// caller-supplied reference date.
    ///
    /// # Errors
    ///
    /// Fails when the birth date is after the reference date or the
    /// expected age is outside [1, 120] years.
    pub fn compute(
        date_of_birth: NaiveDate,
        expected_age_years: f64,
        reference_date: NaiveDate,
    ) -> Result<Self, CoreError> {
        if date_of_birth > reference_date {
            return Err(ValidationError::BirthAfterReference {
                date_of_birth,
                reference_date,
            }
            .into());
        }
        if !expected_age_years.is_finite() || !(1.0..=120.0).contains(&expected_age_years) {
            return Err(ValidationError::ExpectedAgeOutOfRange(expected_age_years).into());
        }

        let days_lived = (reference_date - date_of_birth).num_days();
        let days_remaining = (expected_age_years * DAYS_PER_YEAR - days_lived as f64).max(0.0);

        Ok(Self {
            age_years: days_lived as f64 / DAYS_PER_YEAR,
            days_lived,
            days_remaining,
            hours_remaining: days_remaining * 24.0,
            weeks_remaining: days_remaining / 7.0,
            months_remaining: days_remaining / DAYS_PER_MONTH,
        })
    }

    /// Remaining lifespan expressed in the given display unit.
    pub fn remaining_in(&self, unit: DisplayUnit) -> f64 {
        unit.from_hours(self.hours_remaining)
    }

    /// Remaining lifespan in years.
    pub fn years_remaining(&self) -> f64 {
        self.days_remaining / DAYS_PER_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn figures_for_reference_scenario() {
        let figures =
            LifespanFigures::compute(date(2000, 1, 1), 63.0, date(2024, 1, 1)).unwrap();
        assert_eq!(figures.days_lived, 8766);
        assert_eq!(figures.age_years, 24.0);
        assert_eq!(figures.days_remaining, 63.0 * 365.25 - 8766.0);
        assert_eq!(figures.hours_remaining, figures.days_remaining * 24.0);
    }

    #[test]
    fn remaining_floors_at_zero_when_expected_age_exceeded() {
        let figures =
            LifespanFigures::compute(date(1900, 1, 1), 63.0, date(2024, 1, 1)).unwrap();
        assert_eq!(figures.days_remaining, 0.0);
        assert_eq!(figures.hours_remaining, 0.0);
        assert_eq!(figures.weeks_remaining, 0.0);
        assert_eq!(figures.months_remaining, 0.0);
        assert!(figures.age_years > 63.0);
    }

    #[test]
    fn born_today_has_zero_days_lived() {
        let today = date(2024, 6, 15);
        let figures = LifespanFigures::compute(today, 80.0, today).unwrap();
        assert_eq!(figures.days_lived, 0);
        assert_eq!(figures.age_years, 0.0);
        assert_eq!(figures.days_remaining, 80.0 * 365.25);
    }

    #[test]
    fn birth_after_reference_is_rejected() {
        let err =
            LifespanFigures::compute(date(2030, 1, 1), 63.0, date(2024, 1, 1)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::BirthAfterReference { .. })
        ));
    }

    #[test]
    fn expected_age_outside_range_is_rejected() {
        for age in [0.0, 0.5, 121.0, -10.0, f64::NAN] {
            let err =
                LifespanFigures::compute(date(2000, 1, 1), age, date(2024, 1, 1)).unwrap_err();
            assert!(matches!(
                err,
                CoreError::Validation(ValidationError::ExpectedAgeOutOfRange(_))
            ));
        }
    }

    #[test]
    fn remaining_in_unit_uses_fixed_factors() {
        let figures =
            LifespanFigures::compute(date(2000, 1, 1), 63.0, date(2024, 1, 1)).unwrap();
        assert!((figures.remaining_in(DisplayUnit::Days) - figures.days_remaining).abs() < 1e-9);
        assert!((figures.remaining_in(DisplayUnit::Weeks) - figures.weeks_remaining).abs() < 1e-9);
        assert!(
            (figures.remaining_in(DisplayUnit::Months) - figures.months_remaining).abs() < 1e-9
        );
        assert!((figures.remaining_in(DisplayUnit::Years) - figures.years_remaining()).abs() < 1e-9);
    }
}
