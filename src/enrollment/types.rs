use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One projected month. Numeric fields are rounded half-up when the row is
/// produced; the simulation itself carries unrounded totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentMonthRow {
    pub month: u32,
    pub date: NaiveDate,
    /// `MMM-yyyy`, used as the chart category
    pub label: String,
    pub site_activation_this_month: f64,
    pub activation_cumulative: f64,
    pub screening_this_month: f64,
    pub screening_cumulative: f64,
    pub enrollment_this_month: f64,
    pub enrollment_cumulative: f64,
}
