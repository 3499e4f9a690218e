//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::compute::error::RequestError;
pub use crate::enrollment::error::EnrollmentProjectionError;
pub use crate::parameters::error::InvalidEnrollmentParameters;
pub use crate::summary::error::SummaryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CtenrollErr {
    #[error("while validating enrollment parameters: {0}")]
    InvalidParameters(InvalidEnrollmentParameters),
    #[error("while projecting enrollment: {0}")]
    EnrollmentProjection(EnrollmentProjectionError),
    #[error("while summarizing enrollment projection: {0}")]
    Summary(SummaryError),
    #[error("while handling projection request: {0}")]
    Request(RequestError),
}

impl CtenrollErr {
    /// True when the inputs can't reach the enrollment target within the
    /// projection horizon
    pub fn is_diverged(&self) -> bool {
        matches!(
            self,
            CtenrollErr::EnrollmentProjection(EnrollmentProjectionError::Diverged { .. })
        )
    }
}
