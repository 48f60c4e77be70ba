//! FILENAME: stats-engine/src/engine.rs
//! The aggregation core: single-pass grouping into statistics.
//!
//! Algorithm:
//! 1. Partition records into groups keyed by the requested dimension(s)
//! 2. Feed each record's salary into its group's accumulator
//! 3. Finalize each accumulator into a `StatisticsResult`
//!
//! Groups live in a `BTreeMap`, so for a fixed input sequence and grouping
//! mode the output is identical across runs - there is no dependence on
//! hash-iteration order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use model::EmployeeRecord;

use crate::accumulator::{SalaryAccumulator, SalarySummary};
use crate::definition::{GroupBy, GroupKey};

// ============================================================================
// STATISTICS RESULT
// ============================================================================

/// Computed statistics for one group.
///
/// `summary` is `None` exactly when `count == 0`: a group can exist (e.g. a
/// configured subsidiary with no salary data) without having statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    /// The grouping dimension value(s) this result describes.
    pub group_key: GroupKey,

    /// Number of valid records contributing to the statistics.
    pub count: u64,

    /// Mean/max/min over the group, absent when the group is empty.
    pub summary: Option<SalarySummary>,
}

impl StatisticsResult {
    /// An explicit "group exists but has no data" result.
    pub fn empty(group_key: GroupKey) -> Self {
        StatisticsResult {
            group_key,
            count: 0,
            summary: None,
        }
    }

    /// True when no valid records contributed.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Groups `records` by the requested dimension and computes statistics per
/// group in a single pass.
///
/// An empty input yields an empty mapping for keyed groupings; `Global`
/// always yields exactly one result, possibly with `count = 0`, so callers
/// can distinguish "no data" from "aggregation failed".
pub fn aggregate(
    records: &[EmployeeRecord],
    group_by: GroupBy,
) -> BTreeMap<GroupKey, StatisticsResult> {
    let mut groups: BTreeMap<GroupKey, SalaryAccumulator> = BTreeMap::new();

    if group_by == GroupBy::Global {
        // The global group exists even over an empty record set.
        groups.insert(GroupKey::Global, SalaryAccumulator::new());
    }

    for record in records {
        let key = GroupKey::for_record(record, group_by);
        groups.entry(key).or_default().add(record.salary);
    }

    groups
        .into_iter()
        .map(|(key, acc)| {
            let result = StatisticsResult {
                group_key: key.clone(),
                count: acc.count,
                summary: acc.summary(),
            };
            (key, result)
        })
        .collect()
}
