use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether the projection reached its enrollment target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum TargetStatus {
    Reached,
    /// Planned screening ran out first; `shortfall` subjects are missing and
    /// the enrollment duration is the last projected month.
    ScreeningExhausted { shortfall: f64 },
}

/// Headline figures for a completed projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSummary {
    pub enrollment_duration_months: u32,
    pub last_subject_dosed: NaiveDate,
    /// `MMM d, yyyy`
    pub last_subject_dosed_label: String,
    pub total_screened_required: f64,
    pub enrollment_rate: f64,
    pub activation_rate: f64,
    pub final_enrollment_cumulative: f64,
    pub final_screening_cumulative: f64,
    pub target_status: TargetStatus,
}

impl DerivedSummary {
    pub fn target_reached(&self) -> bool {
        self.target_status == TargetStatus::Reached
    }
}
