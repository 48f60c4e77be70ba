//! FILENAME: stats-engine/src/accumulator.rs
//! Per-group running statistics.
//!
//! One accumulator per group, fed one salary at a time during the single
//! aggregation pass. The finished summary only exists for groups that saw
//! at least one value: "no data" is `None`, never a zero standing in for
//! a mean or a minimum.

use serde::{Deserialize, Serialize};

// ============================================================================
// ACCUMULATOR
// ============================================================================

/// Accumulator for computing salary statistics incrementally.
/// Plain summation is sufficient at employee-count scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryAccumulator {
    pub count: u64,
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl SalaryAccumulator {
    pub fn new() -> Self {
        SalaryAccumulator {
            count: 0,
            sum: 0.0,
            min: None,
            max: None,
        }
    }

    /// Adds one salary observation.
    pub fn add(&mut self, salary: f64) {
        self.count += 1;
        self.sum += salary;
        self.min = Some(self.min.map_or(salary, |m| m.min(salary)));
        self.max = Some(self.max.map_or(salary, |m| m.max(salary)));
    }

    /// Merges another accumulator into this one.
    pub fn merge(&mut self, other: &SalaryAccumulator) {
        if other.count == 0 {
            return;
        }

        self.count += other.count;
        self.sum += other.sum;

        if let Some(other_min) = other.min {
            self.min = Some(self.min.map_or(other_min, |m| m.min(other_min)));
        }
        if let Some(other_max) = other.max {
            self.max = Some(self.max.map_or(other_max, |m| m.max(other_max)));
        }
    }

    /// Computes the final statistics, or `None` when no values were seen.
    pub fn summary(&self) -> Option<SalarySummary> {
        if self.count == 0 {
            return None;
        }

        Some(SalarySummary {
            mean: self.sum / (self.count as f64),
            // count > 0 guarantees min/max were set by add()
            max: self.max.unwrap_or(0.0),
            min: self.min.unwrap_or(0.0),
        })
    }
}

// ============================================================================
// SUMMARY
// ============================================================================

/// Finished statistics for one group. Exists only when the group saw at
/// least one valid salary, so `min <= mean <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalarySummary {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}
