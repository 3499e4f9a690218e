use itertools::Itertools;

use crate::enrollment::types::EnrollmentMonthRow;
use crate::parameters::types::EnrollmentParameters;
use crate::summary::error::SummaryError;
use crate::summary::types::{DerivedSummary, TargetStatus};
use crate::util::calendar::{add_months, day_label};

/// Reduces a projection to its headline figures. The duration is looked up
/// from the rows rather than taken from the last row, so a projection that
/// stopped short of the target is reported as such.
pub fn derive_summary(
    params: &EnrollmentParameters,
    rows: &[EnrollmentMonthRow],
) -> Result<DerivedSummary, SummaryError> {
    let last_row = rows.last().ok_or(SummaryError::EmptyProjection)?;
    let target = params.total_enrollment_target() as f64;

    let (enrollment_duration_months, target_status) = match rows
        .iter()
        .find_position(|row| row.enrollment_cumulative >= target)
    {
        Some((index, _)) => (index as u32 + 1, TargetStatus::Reached),
        None => (
            last_row.month,
            TargetStatus::ScreeningExhausted {
                shortfall: target - last_row.enrollment_cumulative,
            },
        ),
    };

    let last_subject_dosed = add_months(
        params.first_subject_dosed(),
        enrollment_duration_months - 1,
    )
    .ok_or(SummaryError::DateOutOfRange)?;

    Ok(DerivedSummary {
        enrollment_duration_months,
        last_subject_dosed,
        last_subject_dosed_label: day_label(last_subject_dosed),
        total_screened_required: params.total_screening_needed(),
        enrollment_rate: params.enrollment_rate(),
        activation_rate: params.activation_rate(),
        final_enrollment_cumulative: last_row.enrollment_cumulative,
        final_screening_cumulative: last_row.screening_cumulative,
        target_status,
    })
}
