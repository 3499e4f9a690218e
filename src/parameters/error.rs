//----------------------------------------
// parameter errors
//----------------------------------------
use crate::error::CtenrollErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidEnrollmentParameters {
    #[error("first subject dosed date should be formatted YYYY-MM-DD; got {0:?}")]
    InvalidDate(String),
    #[error("{field} should be a positive integer; got {value}")]
    NonPositiveCount { field: &'static str, value: i64 },
    #[error("{field} is larger than supported; got {value}")]
    CountTooLarge { field: &'static str, value: i64 },
    #[error("screening rate per site per month should be positive and finite; got {0}")]
    BadScreeningRate(f64),
    #[error("screen failure rate should be in [0, 1); got {0}")]
    ScreenFailureRateOutOfBounds(f64),
    #[error("screen failure percentage should be in [0, 100); got {0}")]
    ScreenFailurePercentOutOfBounds(f64),
}

impl From<InvalidEnrollmentParameters> for CtenrollErr {
    fn from(err: InvalidEnrollmentParameters) -> Self {
        CtenrollErr::InvalidParameters(err)
    }
}
