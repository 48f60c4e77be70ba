//! FILENAME: stats-engine/src/definition.rs
//! Aggregation configuration - the serializable inputs to a run.
//!
//! This module contains all the types needed to DESCRIBE an aggregation
//! run. These structures are designed to be:
//! - Serializable (a dashboard can persist and replay them)
//! - Immutable snapshots of caller intent
//! - Free of any reference to the raw input rows

use serde::{Deserialize, Serialize};

use model::EmployeeRecord;

// ============================================================================
// GROUPING
// ============================================================================

/// The grouping dimension for one aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupBy {
    /// One group covering every record.
    Global,
    /// One group per distinct subsidiary.
    Subsidiary,
    /// One group per distinct (subsidiary, role) pair. Records without a
    /// role fall into the `role = None` bucket of their subsidiary.
    SubsidiaryRole,
}

impl Default for GroupBy {
    fn default() -> Self {
        GroupBy::Subsidiary
    }
}

/// Identifies the group a `StatisticsResult` describes.
///
/// Derives `Ord` so grouped results can live in ordered maps: output order
/// is lexicographic by subsidiary (then role), never hash-iteration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GroupKey {
    Global,
    Subsidiary(String),
    SubsidiaryRole {
        subsidiary: String,
        role: Option<String>,
    },
}

impl GroupKey {
    /// The subsidiary this key refers to, if any.
    pub fn subsidiary(&self) -> Option<&str> {
        match self {
            GroupKey::Global => None,
            GroupKey::Subsidiary(name) => Some(name),
            GroupKey::SubsidiaryRole { subsidiary, .. } => Some(subsidiary),
        }
    }

    /// Display label for this group.
    pub fn label(&self) -> String {
        match self {
            GroupKey::Global => "Global".to_string(),
            GroupKey::Subsidiary(name) => name.clone(),
            GroupKey::SubsidiaryRole { subsidiary, role } => match role {
                Some(role) => format!("{} / {}", subsidiary, role),
                None => format!("{} / {}", subsidiary, UNSPECIFIED_ROLE),
            },
        }
    }

    /// Builds the key for `record` under the given grouping mode.
    pub fn for_record(record: &EmployeeRecord, group_by: GroupBy) -> GroupKey {
        match group_by {
            GroupBy::Global => GroupKey::Global,
            GroupBy::Subsidiary => GroupKey::Subsidiary(record.subsidiary.clone()),
            GroupBy::SubsidiaryRole => GroupKey::SubsidiaryRole {
                subsidiary: record.subsidiary.clone(),
                role: record.role.clone(),
            },
        }
    }
}

/// Label used when rendering the missing-role bucket.
pub const UNSPECIFIED_ROLE: &str = "Unspecified";

// ============================================================================
// REPORT OPTIONS
// ============================================================================

/// Controls how a `Report` is assembled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Also produce the per-(subsidiary, role) breakdown.
    pub include_roles: bool,

    /// Fail with `EmptyDataset` instead of producing an all-empty report.
    pub require_non_empty: bool,

    /// Canonical subsidiary ordering. When set, per-subsidiary results
    /// follow this order and every listed subsidiary appears in the report
    /// even with no data (`count = 0`). Subsidiaries found in the data but
    /// not listed here are appended in lexicographic order.
    pub subsidiary_order: Option<Vec<String>>,
}

impl ReportOptions {
    pub fn with_roles(mut self) -> Self {
        self.include_roles = true;
        self
    }

    pub fn with_subsidiary_order(mut self, order: Vec<String>) -> Self {
        self.subsidiary_order = Some(order);
        self
    }
}

// ============================================================================
// RECORD FILTER
// ============================================================================

/// A caller-supplied restriction applied to records BEFORE aggregation.
/// This is the dashboard's filter form: restrict to a subsidiary subset,
/// a role subset, or a salary range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Keep only records from these subsidiaries.
    pub subsidiaries: Option<Vec<String>>,

    /// Keep only records with these roles.
    pub roles: Option<Vec<String>>,

    /// Keep only records with salary >= this value.
    pub min_salary: Option<f64>,

    /// Keep only records with salary <= this value.
    pub max_salary: Option<f64>,
}

impl RecordFilter {
    /// True when no restriction is configured.
    pub fn is_empty(&self) -> bool {
        self.subsidiaries.is_none()
            && self.roles.is_none()
            && self.min_salary.is_none()
            && self.max_salary.is_none()
    }

    /// Whether `record` passes every configured restriction.
    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        if let Some(subsidiaries) = &self.subsidiaries {
            if !subsidiaries.iter().any(|s| s == &record.subsidiary) {
                return false;
            }
        }

        if let Some(roles) = &self.roles {
            match &record.role {
                Some(role) if roles.iter().any(|r| r == role) => {}
                _ => return false,
            }
        }

        if let Some(min) = self.min_salary {
            if record.salary < min {
                return false;
            }
        }

        if let Some(max) = self.max_salary {
            if record.salary > max {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(subsidiary: &str, role: Option<&str>, salary: f64) -> EmployeeRecord {
        EmployeeRecord::new("E", subsidiary, role.map(|r| r.to_string()), salary)
    }

    #[test]
    fn test_group_key_ordering_is_lexicographic() {
        let a = GroupKey::Subsidiary("DesignWorks".to_string());
        let b = GroupKey::Subsidiary("TechCorp".to_string());
        assert!(a < b);
    }

    #[test]
    fn test_group_key_for_record() {
        let rec = record("TechCorp", Some("Engineer"), 3000.0);
        assert_eq!(GroupKey::for_record(&rec, GroupBy::Global), GroupKey::Global);
        assert_eq!(
            GroupKey::for_record(&rec, GroupBy::Subsidiary),
            GroupKey::Subsidiary("TechCorp".to_string())
        );
        assert_eq!(
            GroupKey::for_record(&rec, GroupBy::SubsidiaryRole),
            GroupKey::SubsidiaryRole {
                subsidiary: "TechCorp".to_string(),
                role: Some("Engineer".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_role_label() {
        let key = GroupKey::SubsidiaryRole {
            subsidiary: "TechCorp".to_string(),
            role: None,
        };
        assert_eq!(key.label(), "TechCorp / Unspecified");
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = RecordFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&record("TechCorp", None, 0.0)));
    }

    #[test]
    fn test_salary_range_filter() {
        let filter = RecordFilter {
            min_salary: Some(1000.0),
            max_salary: Some(2000.0),
            ..Default::default()
        };
        assert!(filter.matches(&record("A", None, 1500.0)));
        assert!(filter.matches(&record("A", None, 1000.0)));
        assert!(!filter.matches(&record("A", None, 999.0)));
        assert!(!filter.matches(&record("A", None, 2500.0)));
    }

    #[test]
    fn test_subsidiary_and_role_filter() {
        let filter = RecordFilter {
            subsidiaries: Some(vec!["TechCorp".to_string()]),
            roles: Some(vec!["Engineer".to_string()]),
            ..Default::default()
        };
        assert!(filter.matches(&record("TechCorp", Some("Engineer"), 100.0)));
        assert!(!filter.matches(&record("DesignWorks", Some("Engineer"), 100.0)));
        assert!(!filter.matches(&record("TechCorp", Some("Manager"), 100.0)));
        // A role filter excludes records with no role at all.
        assert!(!filter.matches(&record("TechCorp", None, 100.0)));
    }
}
