use crate::error::CtenrollErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummaryError {
    #[error("projection has no months to summarize")]
    EmptyProjection,
    #[error("last subject dosed date falls outside the supported calendar range")]
    DateOutOfRange,
}

impl From<SummaryError> for CtenrollErr {
    fn from(err: SummaryError) -> Self {
        CtenrollErr::Summary(err)
    }
}
