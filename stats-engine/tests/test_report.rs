//! FILENAME: stats-engine/tests/test_report.rs
//! Integration tests for the full validate -> aggregate -> assemble pipeline.

use model::{validate_all, RawRow, RawValue};
use stats_engine::{assemble, assemble_filtered, RecordFilter, ReportOptions};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn row(subsidiary: impl Into<RawValue>, salary: impl Into<RawValue>) -> RawRow {
    RawRow::new(RawValue::Empty, subsidiary, RawValue::Empty, salary)
}

// ============================================================================
// PIPELINE SCENARIOS
// ============================================================================

#[test]
fn test_reference_scenario() {
    // A:100, A:200, B:300 -> global count=3 mean=200 max=300 min=100;
    // A count=2 mean=150 max=200 min=100; B count=1 all 300.
    let rows = vec![row("A", 100.0), row("A", 200.0), row("B", 300.0)];
    let (records, summary) = validate_all(&rows);
    assert_eq!(summary.excluded(), 0);

    let report = assemble(&records, &ReportOptions::default()).unwrap();

    assert_eq!(report.global.count, 3);
    let global = report.global.summary.unwrap();
    assert_eq!(global.mean, 200.0);
    assert_eq!(global.max, 300.0);
    assert_eq!(global.min, 100.0);

    let a = report.subsidiary("A").unwrap();
    assert_eq!(a.count, 2);
    let a_summary = a.summary.unwrap();
    assert_eq!(a_summary.mean, 150.0);
    assert_eq!(a_summary.max, 200.0);
    assert_eq!(a_summary.min, 100.0);

    let b = report.subsidiary("B").unwrap();
    assert_eq!(b.count, 1);
    let b_summary = b.summary.unwrap();
    assert_eq!(b_summary.mean, 300.0);
    assert_eq!(b_summary.max, 300.0);
    assert_eq!(b_summary.min, 300.0);
}

#[test]
fn test_negative_salary_excluded_without_crashing() {
    // A:-50 is excluded; A:150 survives alone.
    let rows = vec![row("A", -50.0), row("A", 150.0)];
    let (records, summary) = validate_all(&rows);

    assert_eq!(summary.invalid_salary, 1);
    assert_eq!(records.len(), 1);

    let report = assemble(&records, &ReportOptions::default()).unwrap();
    let a = report.subsidiary("A").unwrap();
    assert_eq!(a.count, 1);
    let a_summary = a.summary.unwrap();
    assert_eq!(a_summary.mean, 150.0);
    assert_eq!(a_summary.max, 150.0);
    assert_eq!(a_summary.min, 150.0);
}

#[test]
fn test_empty_subsidiary_excluded_from_all_groupings() {
    let rows = vec![row("", 500.0), row("A", 100.0)];
    let (records, summary) = validate_all(&rows);

    assert_eq!(summary.missing_subsidiary, 1);

    let report = assemble(&records, &ReportOptions::default()).unwrap();
    assert_eq!(report.global.count, 1);
    assert_eq!(report.subsidiaries.len(), 1);
}

#[test]
fn test_empty_dataset_produces_no_data_report() {
    let report = assemble(&[], &ReportOptions::default()).unwrap();
    assert_eq!(report.global.count, 0);
    assert!(report.global.summary.is_none());
    assert!(report.subsidiaries.is_empty());
}

#[test]
fn test_repeated_runs_are_structurally_identical() {
    let rows = vec![
        row("TechCorp", 3200.0),
        row("DesignWorks", 1800.0),
        row("ProjectLead", 2500.0),
        row("TechCorp", 4100.0),
    ];
    let (records, _) = validate_all(&rows);
    let options = ReportOptions::default().with_roles();

    let first = assemble(&records, &options).unwrap();
    let second = assemble(&records, &options).unwrap();
    assert_eq!(first, second);

    let order: Vec<_> = first
        .subsidiaries
        .iter()
        .map(|r| r.group_key.subsidiary().unwrap().to_string())
        .collect();
    assert_eq!(order, vec!["DesignWorks", "ProjectLead", "TechCorp"]);
}

#[test]
fn test_filter_restricts_before_aggregation() {
    let rows = vec![
        row("TechCorp", 3200.0),
        row("TechCorp", 900.0),
        row("DesignWorks", 1800.0),
    ];
    let (records, _) = validate_all(&rows);

    let filter = RecordFilter {
        subsidiaries: Some(vec!["TechCorp".to_string()]),
        min_salary: Some(1000.0),
        ..Default::default()
    };
    let report =
        assemble_filtered(&records, |r| filter.matches(r), &ReportOptions::default()).unwrap();

    assert_eq!(report.global.count, 1);
    assert_eq!(report.subsidiaries.len(), 1);
    assert_eq!(report.subsidiary("TechCorp").unwrap().count, 1);
}

#[test]
fn test_configured_subsidiary_set_distinguishes_empty_from_missing() {
    let rows = vec![row("A", 100.0)];
    let (records, _) = validate_all(&rows);

    // "B" is part of the configured company structure but has no data.
    let options = ReportOptions::default()
        .with_subsidiary_order(vec!["A".to_string(), "B".to_string()]);
    let report = assemble(&records, &options).unwrap();

    let b = report.subsidiary("B").unwrap();
    assert_eq!(b.count, 0);
    assert!(b.summary.is_none());

    // Without a configured set, an unknown subsidiary simply is not there.
    let unconfigured = assemble(&records, &ReportOptions::default()).unwrap();
    assert!(unconfigured.subsidiary("B").is_none());
}
