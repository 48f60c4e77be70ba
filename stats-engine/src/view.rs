//! FILENAME: stats-engine/src/view.rs
//! Report projections for the presentation adapters.
//!
//! Two consumable forms of a `Report`:
//! - `tabular_rows`: flat rows (one per group plus a global row) for CSV
//!   export or a table widget,
//! - `console_lines`: formatted text for a terminal printout.
//!
//! Both are pure projections; neither touches the raw input records.

use serde::{Deserialize, Serialize};

use crate::definition::{GroupKey, UNSPECIFIED_ROLE};
use crate::engine::StatisticsResult;
use crate::report::Report;

/// Label used for the company-wide row in tabular output.
pub const GLOBAL_LABEL: &str = "Global";

/// Placeholder printed for groups with no salary data.
pub const NO_DATA: &str = "no data";

// ============================================================================
// TABULAR FORM
// ============================================================================

/// One flat output row: a group with its statistics.
/// `mean`/`max`/`min` are `None` for groups with no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Group label: subsidiary name, or `GLOBAL_LABEL` for the global row.
    pub group: String,

    /// Role label, only set for subsidiary x role rows.
    pub role: Option<String>,

    pub count: u64,
    pub mean: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
}

impl ReportRow {
    fn from_result(result: &StatisticsResult) -> Self {
        let (group, role) = match &result.group_key {
            GroupKey::Global => (GLOBAL_LABEL.to_string(), None),
            GroupKey::Subsidiary(name) => (name.clone(), None),
            GroupKey::SubsidiaryRole { subsidiary, role } => (
                subsidiary.clone(),
                Some(
                    role.clone()
                        .unwrap_or_else(|| UNSPECIFIED_ROLE.to_string()),
                ),
            ),
        };

        ReportRow {
            group,
            role,
            count: result.count,
            mean: result.summary.map(|s| s.mean),
            max: result.summary.map(|s| s.max),
            min: result.summary.map(|s| s.min),
        }
    }
}

/// Flattens a report into rows: one per subsidiary, one per subsidiary x
/// role pair (when present), then the global row last.
pub fn tabular_rows(report: &Report) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = report
        .subsidiaries
        .iter()
        .map(ReportRow::from_result)
        .collect();

    if let Some(roles) = &report.roles {
        rows.extend(roles.iter().map(ReportRow::from_result));
    }

    rows.push(ReportRow::from_result(&report.global));
    rows
}

// ============================================================================
// CONSOLE FORM
// ============================================================================

/// Renders a report as console-ready lines: the global statistics followed
/// by one block per subsidiary.
pub fn console_lines(report: &Report) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("========================================================".to_string());
    lines.push("Company-wide salary statistics".to_string());
    lines.extend(statistics_lines(&report.global));
    lines.push("========================================================".to_string());

    for result in &report.subsidiaries {
        let name = result.group_key.subsidiary().unwrap_or(GLOBAL_LABEL);
        lines.push(String::new());
        lines.push(format!("Subsidiary: {}", name));
        lines.extend(statistics_lines(result));
    }

    if let Some(roles) = &report.roles {
        for result in roles {
            lines.push(String::new());
            lines.push(format!("Group: {}", result.group_key.label()));
            lines.extend(statistics_lines(result));
        }
    }

    lines
}

fn statistics_lines(result: &StatisticsResult) -> Vec<String> {
    match result.summary {
        Some(summary) => vec![
            format!("Employees: {}", result.count),
            format!("Average salary: {:.2}", summary.mean),
            format!("Highest salary: {:.2}", summary.max),
            format!("Lowest salary: {:.2}", summary.min),
        ],
        None => vec![format!("Employees: 0 ({})", NO_DATA)],
    }
}
