//----------------------------------------
// enrollment mod
//----------------------------------------
pub mod error;
pub(crate) mod ramp;
pub mod simulate;
pub(crate) mod state;
pub mod types;
