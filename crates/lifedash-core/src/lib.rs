//! # Lifedash Core Library
//!
//! Core business logic for Lifedash, a lifetime time-allocation dashboard.
//! Given a date of birth, an expected lifespan and per-activity daily-hour
//! commitments, it computes how much time has been spent and how much
//! remains per activity, and produces unit-converted summaries for display
//! and export.
//!
//! The library is CLI-first: every operation is available through the
//! `lifedash` binary, which is a thin presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Input normalization**: fixed and custom activity inputs merged into
//!   one insertion-ordered category mapping with last-write-wins names
//! - **Lifespan figures**: calendar arithmetic from date of birth and a
//!   caller-supplied reference date (the core never reads a clock)
//! - **Allocation**: per-category spent/remaining hour totals with derived
//!   free time and over-commitment detection
//! - **Summary**: unit-converted rows with percentage splits
//! - **Export**: flat CSV rows and a nested JSON document, in raw hours
//! - **Profile**: TOML-persisted defaults for the CLI
//!
//! ## Key Components
//!
//! - [`DashboardRequest`]: immutable input for one computation pass
//! - [`DashboardResult`]: everything display and export layers consume
//! - [`Profile`]: persisted user defaults

pub mod allocation;
pub mod category;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod lifespan;
pub mod summary;
pub mod unit;

pub use allocation::{AllocationEntry, AllocationReport, HOURS_PER_DAY};
pub use category::{normalize, Category, CategoryMap, CustomCategory, DailyHours};
pub use config::Profile;
pub use dashboard::{DashboardRequest, DashboardResult};
pub use error::{ConfigError, CoreError, ValidationError};
pub use export::{export_rows, to_csv, ExportDocument, ExportRow};
pub use lifespan::{LifespanFigures, DAYS_PER_MONTH, DAYS_PER_YEAR};
pub use summary::{build_summary, SummaryRow};
pub use unit::DisplayUnit;
