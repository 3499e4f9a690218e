//----------------------------------------
// presentation mod
//----------------------------------------
pub mod chart;
pub mod table;
