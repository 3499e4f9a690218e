//----------------------------------------
// Enrollment errors
//----------------------------------------

use crate::error::CtenrollErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnrollmentProjectionError {
    #[error(
        "enrollment projection exceeds {max_months} months ({enrolled:.1} of {target} \
        subjects enrolled); check your inputs"
    )]
    Diverged {
        max_months: u32,
        enrolled: f64,
        target: u32,
    },
    #[error("projection month {month} falls outside the supported calendar range")]
    DateOutOfRange { month: u32 },
}

impl From<EnrollmentProjectionError> for CtenrollErr {
    fn from(err: EnrollmentProjectionError) -> Self {
        CtenrollErr::EnrollmentProjection(err)
    }
}
