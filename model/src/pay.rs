//! FILENAME: model/src/pay.rs
//! Monthly salary derivation from wage components.
//!
//! Some datasets carry hourly wage data instead of a salary figure. The
//! conversion assumes 4 paid weeks per month; hours worked beyond the
//! contracted weekly hours are paid at 1.5x the hourly rate.

use serde::{Deserialize, Serialize};

/// Overtime multiplier applied to hours above contract.
pub const OVERTIME_RATE: f64 = 1.5;

/// Paid weeks per month used by the conversion.
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Wage components for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WageProfile {
    /// Amount payable per hour worked.
    pub hourly_rate: f64,

    /// Hours actually worked per week.
    pub weekly_hours_worked: f64,

    /// Hours expected per week under the contract.
    pub contract_hours: f64,
}

impl WageProfile {
    pub fn new(hourly_rate: f64, weekly_hours_worked: f64, contract_hours: f64) -> Self {
        WageProfile {
            hourly_rate,
            weekly_hours_worked,
            contract_hours,
        }
    }

    /// Derives the monthly salary.
    ///
    /// Up to `contract_hours` per week is paid at the straight hourly rate;
    /// hours beyond that are paid at `OVERTIME_RATE` times the hourly rate.
    pub fn monthly_salary(&self) -> f64 {
        if self.weekly_hours_worked <= self.contract_hours {
            self.weekly_hours_worked * self.hourly_rate * WEEKS_PER_MONTH
        } else {
            let overtime_hours = self.weekly_hours_worked - self.contract_hours;
            let contract_pay = self.contract_hours * self.hourly_rate;
            let overtime_pay = overtime_hours * self.hourly_rate * OVERTIME_RATE;
            (contract_pay + overtime_pay) * WEEKS_PER_MONTH
        }
    }
}
