//----------------------------------------
// summary mod
//----------------------------------------
pub mod derived_metrics;
pub mod error;
pub mod types;
