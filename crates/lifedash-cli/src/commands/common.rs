//! Shared input flags for commands that run the computation.
//!
//! Flags override the persisted profile; everything left unset falls back
//! to profile values. The reference date defaults to the current local
//! date, resolved here so the core stays clock-free.

use chrono::{Local, NaiveDate};
use clap::Args;
use lifedash_core::{CustomCategory, DashboardRequest, DisplayUnit, Profile};

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub dob: Option<NaiveDate>,
    /// Expected age in years
    #[arg(long)]
    pub expected_age: Option<f64>,
    /// Job hours per day
    #[arg(long)]
    pub job: Option<f64>,
    /// Eating hours per day
    #[arg(long)]
    pub eating: Option<f64>,
    /// Travel hours per day
    #[arg(long)]
    pub travel: Option<f64>,
    /// Sleep hours per day
    #[arg(long)]
    pub sleep: Option<f64>,
    /// Exercise hours per day
    #[arg(long)]
    pub exercise: Option<f64>,
    /// Friends/family hours per day
    #[arg(long)]
    pub family: Option<f64>,
    /// Extra category as NAME=HOURS (repeatable)
    #[arg(long = "custom", value_name = "NAME=HOURS")]
    pub custom: Vec<String>,
    /// Display unit (hours, days, weeks, months, years)
    #[arg(long)]
    pub unit: Option<DisplayUnit>,
    /// Reference date standing in for "today" (defaults to the current date)
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<NaiveDate>,
}

impl InputArgs {
    /// Merge flags over the profile into a computation request.
    pub fn to_request(
        &self,
        profile: &Profile,
    ) -> Result<DashboardRequest, Box<dyn std::error::Error>> {
        let reference = self
            .as_of
            .unwrap_or_else(|| Local::now().date_naive());
        let mut request = profile.request(reference);

        if let Some(dob) = self.dob {
            request.date_of_birth = dob;
        }
        if let Some(age) = self.expected_age {
            request.expected_age_years = age;
        }
        if let Some(v) = self.job {
            request.daily_hours.job = v;
        }
        if let Some(v) = self.eating {
            request.daily_hours.eating = v;
        }
        if let Some(v) = self.travel {
            request.daily_hours.travel = v;
        }
        if let Some(v) = self.sleep {
            request.daily_hours.sleep = v;
        }
        if let Some(v) = self.exercise {
            request.daily_hours.exercise = v;
        }
        if let Some(v) = self.family {
            request.daily_hours.family = v;
        }
        for pair in &self.custom {
            let (name, hours) = pair
                .split_once('=')
                .ok_or_else(|| format!("invalid --custom '{pair}': expected NAME=HOURS"))?;
            let hours_per_day: f64 = hours
                .parse()
                .map_err(|_| format!("invalid hours in --custom '{pair}'"))?;
            request.custom_categories.push(CustomCategory {
                name: name.to_string(),
                hours_per_day,
            });
        }
        if let Some(unit) = self.unit {
            request.display_unit = unit;
        }

        Ok(request)
    }
}
