//----------------------------------------
// util mod
//----------------------------------------
pub mod calendar;
pub mod rounding;
