//----------------------------------------
// request errors
//----------------------------------------
use crate::error::CtenrollErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("could not decode projection request: {0}")]
    Decode(serde_json::Error),
    #[error("could not encode projection response: {0}")]
    Encode(serde_json::Error),
}

impl From<RequestError> for CtenrollErr {
    fn from(err: RequestError) -> Self {
        CtenrollErr::Request(err)
    }
}
