//----------------------------------------
// parameters mod
//----------------------------------------
pub mod error;
pub mod input;
pub mod types;
