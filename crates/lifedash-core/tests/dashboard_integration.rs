//! Integration tests for the full dashboard pipeline.

use chrono::NaiveDate;
use lifedash_core::{
    export_rows, to_csv, Category, CustomCategory, DailyHours, DashboardRequest, DisplayUnit,
    ExportDocument,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn base_request() -> DashboardRequest {
    DashboardRequest {
        date_of_birth: date(2000, 1, 1),
        expected_age_years: 63.0,
        daily_hours: DailyHours::default(),
        custom_categories: Vec::new(),
        reference_date: date(2024, 1, 1),
        display_unit: DisplayUnit::Years,
    }
}

fn custom(name: &str, hours_per_day: f64) -> CustomCategory {
    CustomCategory {
        name: name.to_string(),
        hours_per_day,
    }
}

#[test]
fn reference_scenario_end_to_end() {
    let result = base_request().compute().unwrap();

    assert_eq!(result.days_lived, 8766);
    assert_eq!(result.age_years, 24.0);
    assert_eq!(result.total_committed_hours, 20.5);
    assert_eq!(result.free_hours_per_day, 3.5);
    assert!(!result.is_over_committed);
    assert_eq!(result.days_remaining, 63.0 * 365.25 - 8766.0);

    let free = result.category("Free Time").unwrap();
    assert_eq!(free.hours_spent, 30_681.0); // 8766 * 3.5
    assert_eq!(free.hours_remaining, 3.5 * result.days_remaining);

    // Free Time is the last category and the last summary row.
    assert_eq!(result.categories.last().unwrap().category, Category::FreeTime);
    assert_eq!(result.summary.last().unwrap().activity, "Free Time");
}

#[test]
fn days_lived_plus_remaining_cover_the_expected_lifespan() {
    let result = base_request().compute().unwrap();
    let total = result.days_lived as f64 + result.days_remaining;
    assert!((total - 63.0 * 365.25).abs() < 1e-9);
}

#[test]
fn duplicate_custom_names_are_last_write_wins() {
    let mut request = base_request();
    request.custom_categories = vec![custom("Reading", 1.0), custom("Reading", 2.5)];
    let result = request.compute().unwrap();

    let reading = result.category("Reading").unwrap();
    assert_eq!(reading.hours_per_day, 2.5);
    assert_eq!(
        result
            .categories
            .iter()
            .filter(|e| e.category.name() == "Reading")
            .count(),
        1
    );
    assert_eq!(result.total_committed_hours, 20.5 + 2.5);
}

#[test]
fn custom_free_time_name_merges_with_the_residual() {
    let mut request = base_request();
    request.custom_categories = vec![custom("Free Time", 2.0)];
    let result = request.compute().unwrap();

    assert_eq!(result.total_committed_hours, 22.5);
    assert_eq!(result.free_hours_per_day, 1.5);

    // Exactly one entry carries the name, so both export shapes agree.
    let frees: Vec<_> = result
        .categories
        .iter()
        .filter(|e| e.category.name() == "Free Time")
        .collect();
    assert_eq!(frees.len(), 1);
    assert_eq!(frees[0].hours_per_day, 1.5);

    let rows = export_rows(&result);
    assert_eq!(
        rows.iter().filter(|r| r.activity == "Free Time").count(),
        1
    );
    let doc = ExportDocument::from_result(&result);
    assert_eq!(
        doc.categories.get("Free Time").and_then(|v| v.as_f64()),
        Some(1.5)
    );
    assert_eq!(doc.time_spent.len(), result.categories.len());
}

#[test]
fn empty_named_custom_category_never_enters_the_result() {
    let mut request = base_request();
    request.custom_categories = vec![custom("", 5.0)];
    let result = request.compute().unwrap();

    assert_eq!(result.total_committed_hours, 20.5);
    assert_eq!(result.categories.len(), 7); // six built-ins + Free Time
    let rows = export_rows(&result);
    assert!(rows.iter().all(|r| !r.activity.is_empty()));
}

#[test]
fn expected_age_already_exceeded_yields_zero_remaining() {
    let mut request = base_request();
    request.date_of_birth = date(1950, 1, 1);
    let result = request.compute().unwrap();

    assert_eq!(result.days_remaining, 0.0);
    assert_eq!(result.hours_remaining, 0.0);
    assert_eq!(result.remaining_in_unit, 0.0);
    assert_eq!(result.free_days_remaining(), 0.0);
    for entry in &result.categories {
        assert_eq!(entry.hours_remaining, 0.0);
        assert!(entry.hours_spent >= 0.0);
    }
    // Rows with any spent time are fully "spent".
    for row in &result.summary {
        if row.spent > 0.0 {
            assert_eq!(row.pct_spent, 100.0);
            assert_eq!(row.pct_remaining, 0.0);
        }
    }
}

#[test]
fn over_committed_input_still_computes_and_flags() {
    let mut request = base_request();
    request.custom_categories = vec![custom("Overtime", 10.0)];
    let result = request.compute().unwrap();

    assert!(result.is_over_committed);
    assert_eq!(result.total_committed_hours, 30.5);
    assert_eq!(result.free_hours_per_day, 0.0);
    assert!(result.category("Free Time").is_none());
    assert_eq!(result.summary.len(), 7); // six built-ins + Overtime
}

#[test]
fn summary_is_unit_converted_while_export_stays_in_hours() {
    let mut request = base_request();
    request.display_unit = DisplayUnit::Years;
    let result = request.compute().unwrap();

    let working_row = result
        .summary
        .iter()
        .find(|r| r.activity == "Working")
        .unwrap();
    let working = result.category("Working").unwrap();
    assert!((working_row.spent - working.hours_spent / 8766.0).abs() < 1e-9);

    let rows = export_rows(&result);
    let working_export = rows.iter().find(|r| r.activity == "Working").unwrap();
    assert_eq!(working_export.time_spent_hrs, working.hours_spent);

    let doc = ExportDocument::from_result(&result);
    assert_eq!(
        doc.time_spent.get("Working").and_then(|v| v.as_f64()),
        Some(working.hours_spent)
    );
}

#[test]
fn csv_export_is_one_row_per_category() {
    let mut request = base_request();
    request.custom_categories = vec![custom("Reading", 1.0)];
    let result = request.compute().unwrap();

    let csv = to_csv(&export_rows(&result));
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Activity,Time Spent (hrs),Time Remaining (hrs)");
    assert_eq!(lines.len(), 1 + result.categories.len());
    assert!(lines[1].starts_with("Working,"));
    assert!(lines.last().unwrap().starts_with("Free Time,"));
}

#[test]
fn result_is_deterministic_for_identical_requests() {
    let request = base_request();
    let a = request.compute().unwrap();
    let b = request.compute().unwrap();
    assert_eq!(a, b);
}
