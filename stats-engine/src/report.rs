//! FILENAME: stats-engine/src/report.rs
//! Report assembly - composes aggregation passes into the final result set.
//!
//! The assembler runs the engine once per configured grouping mode, orders
//! the per-subsidiary results deterministically, and cross-checks that the
//! per-subsidiary counts sum to the global count. A mismatch aborts the run
//! with `InconsistentAggregation` rather than producing mismatched totals.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use model::EmployeeRecord;

use crate::definition::{GroupBy, GroupKey, ReportOptions};
use crate::engine::{aggregate, StatisticsResult};

// ============================================================================
// ERRORS
// ============================================================================

/// Structural aggregation failures. Unlike per-record validation errors,
/// these abort the run and must be surfaced to the presentation layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("dataset is empty but a non-empty report was required")]
    EmptyDataset,

    #[error(
        "per-subsidiary counts ({subsidiary_total}) do not sum to the global count ({global_count})"
    )]
    InconsistentAggregation {
        global_count: u64,
        subsidiary_total: u64,
    },
}

// ============================================================================
// REPORT
// ============================================================================

/// The full output of one aggregation run: the company-wide statistics plus
/// the ordered per-subsidiary breakdown (and optionally per-role results).
///
/// Immutable and self-describing: consumers never need the raw input rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Company-wide statistics over every valid record.
    pub global: StatisticsResult,

    /// One result per subsidiary, in canonical order (configured order
    /// first, then lexicographic).
    pub subsidiaries: Vec<StatisticsResult>,

    /// Per-(subsidiary, role) results, present when requested.
    pub roles: Option<Vec<StatisticsResult>>,
}

impl Report {
    /// Looks up the result for one subsidiary.
    pub fn subsidiary(&self, name: &str) -> Option<&StatisticsResult> {
        self.subsidiaries
            .iter()
            .find(|r| r.group_key.subsidiary() == Some(name))
    }
}

// ============================================================================
// ASSEMBLY
// ============================================================================

/// Assembles a `Report` from validated records.
///
/// Runs the aggregator once with `Global`, once with `Subsidiary`, and,
/// when `options.include_roles` is set, once with `SubsidiaryRole`.
pub fn assemble(
    records: &[EmployeeRecord],
    options: &ReportOptions,
) -> Result<Report, ReportError> {
    if options.require_non_empty && records.is_empty() {
        return Err(ReportError::EmptyDataset);
    }

    let mut global_results = aggregate(records, GroupBy::Global);
    let global = global_results
        .remove(&GroupKey::Global)
        .unwrap_or_else(|| StatisticsResult::empty(GroupKey::Global));

    let per_subsidiary = aggregate(records, GroupBy::Subsidiary);
    let subsidiaries = order_subsidiaries(per_subsidiary, options);

    let subsidiary_total: u64 = subsidiaries.iter().map(|r| r.count).sum();
    if subsidiary_total != global.count {
        warn!(
            "aggregation mismatch: global count {} vs per-subsidiary total {}",
            global.count, subsidiary_total
        );
        return Err(ReportError::InconsistentAggregation {
            global_count: global.count,
            subsidiary_total,
        });
    }

    let roles = if options.include_roles {
        let per_role = aggregate(records, GroupBy::SubsidiaryRole);
        Some(per_role.into_values().collect())
    } else {
        None
    };

    debug!(
        "assembled report: {} records across {} subsidiaries",
        global.count,
        subsidiaries.len()
    );

    Ok(Report {
        global,
        subsidiaries,
        roles,
    })
}

/// Assembles a `Report` from the subset of records matching `filter`.
///
/// The predicate is applied BEFORE aggregation, so every statistic in the
/// resulting report describes the filtered record set.
pub fn assemble_filtered<F>(
    records: &[EmployeeRecord],
    mut filter: F,
    options: &ReportOptions,
) -> Result<Report, ReportError>
where
    F: FnMut(&EmployeeRecord) -> bool,
{
    let filtered: Vec<EmployeeRecord> = records.iter().filter(|r| filter(r)).cloned().collect();
    assemble(&filtered, options)
}

/// Orders per-subsidiary results: configured canonical order first (with
/// `count = 0` placeholders for configured subsidiaries absent from the
/// data), then any remaining subsidiaries lexicographically.
fn order_subsidiaries(
    mut results: BTreeMap<GroupKey, StatisticsResult>,
    options: &ReportOptions,
) -> Vec<StatisticsResult> {
    let Some(order) = &options.subsidiary_order else {
        // BTreeMap iteration is already lexicographic.
        return results.into_values().collect();
    };

    let mut ordered = Vec::with_capacity(order.len().max(results.len()));

    for name in order {
        let key = GroupKey::Subsidiary(name.clone());
        match results.remove(&key) {
            Some(result) => ordered.push(result),
            None => ordered.push(StatisticsResult::empty(key)),
        }
    }

    // Data subsidiaries missing from the configured order are appended, not
    // dropped, so the count consistency check still holds.
    ordered.extend(results.into_values());
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(subsidiary: &str, role: Option<&str>, salary: f64) -> EmployeeRecord {
        EmployeeRecord::new("E", subsidiary, role.map(|r| r.to_string()), salary)
    }

    fn sample_records() -> Vec<EmployeeRecord> {
        vec![
            record("A", Some("Engineer"), 100.0),
            record("A", Some("Manager"), 200.0),
            record("B", Some("Engineer"), 300.0),
        ]
    }

    #[test]
    fn test_assemble_basic() {
        let report = assemble(&sample_records(), &ReportOptions::default()).unwrap();

        assert_eq!(report.global.count, 3);
        assert_eq!(report.global.summary.unwrap().mean, 200.0);

        assert_eq!(report.subsidiaries.len(), 2);
        assert_eq!(report.subsidiary("A").unwrap().count, 2);
        assert_eq!(report.subsidiary("B").unwrap().count, 1);
        assert!(report.roles.is_none());
    }

    #[test]
    fn test_counts_sum_to_global() {
        let report = assemble(&sample_records(), &ReportOptions::default()).unwrap();
        let total: u64 = report.subsidiaries.iter().map(|r| r.count).sum();
        assert_eq!(total, report.global.count);
    }

    #[test]
    fn test_empty_input_is_not_an_error_by_default() {
        let report = assemble(&[], &ReportOptions::default()).unwrap();
        assert_eq!(report.global.count, 0);
        assert_eq!(report.global.summary, None);
        assert!(report.subsidiaries.is_empty());
    }

    #[test]
    fn test_empty_input_fails_when_required_non_empty() {
        let options = ReportOptions {
            require_non_empty: true,
            ..Default::default()
        };
        assert_eq!(assemble(&[], &options), Err(ReportError::EmptyDataset));
    }

    #[test]
    fn test_configured_order_is_honored() {
        let options = ReportOptions::default()
            .with_subsidiary_order(vec!["B".to_string(), "A".to_string()]);
        let report = assemble(&sample_records(), &options).unwrap();

        let names: Vec<_> = report
            .subsidiaries
            .iter()
            .map(|r| r.group_key.subsidiary().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_configured_but_absent_subsidiary_yields_count_zero() {
        let options = ReportOptions::default().with_subsidiary_order(vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
        ]);
        let report = assemble(&sample_records(), &options).unwrap();

        assert_eq!(report.subsidiaries.len(), 3);
        let c = report.subsidiary("C").unwrap();
        assert_eq!(c.count, 0);
        assert_eq!(c.summary, None);
    }

    #[test]
    fn test_data_subsidiary_outside_order_is_appended() {
        let options =
            ReportOptions::default().with_subsidiary_order(vec!["B".to_string()]);
        let report = assemble(&sample_records(), &options).unwrap();

        let names: Vec<_> = report
            .subsidiaries
            .iter()
            .map(|r| r.group_key.subsidiary().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["B", "A"]);

        // The appended subsidiary keeps the totals consistent.
        let total: u64 = report.subsidiaries.iter().map(|r| r.count).sum();
        assert_eq!(total, report.global.count);
    }

    #[test]
    fn test_role_breakdown() {
        let options = ReportOptions::default().with_roles();
        let report = assemble(&sample_records(), &options).unwrap();

        let roles = report.roles.unwrap();
        assert_eq!(roles.len(), 3);
        let total: u64 = roles.iter().map(|r| r.count).sum();
        assert_eq!(total, report.global.count);
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let records = sample_records();
        let options = ReportOptions::default().with_roles();
        let first = assemble(&records, &options).unwrap();
        let second = assemble(&records, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_filtered_assembly() {
        let records = sample_records();
        let report = assemble_filtered(
            &records,
            |r: &EmployeeRecord| r.salary >= 200.0,
            &ReportOptions::default(),
        )
        .unwrap();

        assert_eq!(report.global.count, 2);
        assert_eq!(report.subsidiary("A").unwrap().count, 1);
        assert_eq!(report.subsidiary("B").unwrap().count, 1);
    }

    #[test]
    fn test_report_roundtrips_through_json() {
        let report = assemble(&sample_records(), &ReportOptions::default().with_roles()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
