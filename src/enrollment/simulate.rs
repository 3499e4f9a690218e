use tracing::{debug, trace, warn};

use crate::enrollment::error::EnrollmentProjectionError;
use crate::enrollment::state::{EnrollmentState, ProjectionConstants};
use crate::enrollment::types::EnrollmentMonthRow;
use crate::parameters::types::EnrollmentParameters;

/// Projections are abandoned after 20 years
pub const MAX_PROJECTION_MONTHS: u32 = 240;

/// Projects enrollment month by month until the enrollment target is reached
/// or planned screening runs out. Returns one row per month starting with the
/// first subject dosed month.
pub fn simulate_enrollment(
    params: &EnrollmentParameters,
) -> Result<Vec<EnrollmentMonthRow>, EnrollmentProjectionError> {
    let constants = ProjectionConstants::new(params);
    debug!(
        activation_rate = constants.activation_rate,
        enrollment_rate = params.enrollment_rate(),
        total_screening_needed = constants.total_screening_needed,
        "starting enrollment projection"
    );

    let mut state = EnrollmentState::default();
    let mut rows = Vec::new();
    while state.enrollment_cumulative < constants.target {
        if state.month >= MAX_PROJECTION_MONTHS {
            warn!(
                max_months = MAX_PROJECTION_MONTHS,
                enrolled = state.enrollment_cumulative,
                "enrollment projection did not reach target"
            );
            return Err(EnrollmentProjectionError::Diverged {
                max_months: MAX_PROJECTION_MONTHS,
                enrolled: state.enrollment_cumulative,
                target: params.total_enrollment_target(),
            });
        }

        let step = state.advance(&constants)?;
        trace!(
            month = step.row.month,
            activation_cumulative = state.activation_cumulative,
            screening_cumulative = state.screening_cumulative,
            enrollment_cumulative = state.enrollment_cumulative,
            "projected month"
        );
        rows.push(step.row);

        if step.screening_exhausted {
            if state.enrollment_cumulative < constants.target {
                warn!(
                    month = state.month,
                    enrolled = state.enrollment_cumulative,
                    "planned screening exhausted before reaching enrollment target"
                );
            }
            break;
        }
    }

    Ok(rows)
}
