use tracing::{info, instrument};

use crate::compute::error::RequestError;
use crate::compute::types::{EnrollmentProjection, ProjectionRequest};
use crate::enrollment::simulate::simulate_enrollment;
use crate::error::CtenrollErr;
use crate::parameters::types::EnrollmentParameters;
use crate::summary::derived_metrics::derive_summary;

/// Projects monthly site activation, screening and enrollment for `params`
/// and summarizes the result. Pure: identical parameters give identical
/// projections.
#[instrument(level = "debug", skip_all, fields(enrollment_target = params.total_enrollment_target()))]
pub fn project_enrollment(
    params: &EnrollmentParameters,
) -> Result<EnrollmentProjection, CtenrollErr> {
    let rows = simulate_enrollment(params)?;
    let summary = derive_summary(params, &rows)?;
    info!(
        months = summary.enrollment_duration_months,
        last_subject_dosed = %summary.last_subject_dosed,
        target_reached = summary.target_reached(),
        "enrollment projection complete"
    );
    Ok(EnrollmentProjection { rows, summary })
}

/// Validates a decoded request and projects it
pub fn project_request(request: &ProjectionRequest) -> Result<EnrollmentProjection, CtenrollErr> {
    let params = request.resolved_input().validate()?;
    project_enrollment(&params)
}

/// JSON in, JSON out: a `ProjectionRequest` body becomes `{rows, summary}`
pub fn project_from_json(request: &str) -> Result<String, CtenrollErr> {
    let request: ProjectionRequest =
        serde_json::from_str(request).map_err(RequestError::Decode)?;
    let projection = project_request(&request)?;
    Ok(serde_json::to_string(&projection).map_err(RequestError::Encode)?)
}
