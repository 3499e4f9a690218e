//----------------------------------------
// Root lib
//----------------------------------------
//! Enrollment projections for clinical trials. Given a first dosing date,
//! an enrollment target, a site count and activation period, a per-site
//! screening rate and a screen failure rate, the library simulates site
//! activation ramp-up, screening throughput and enrollment month by month
//! until the target is reached, and reduces the resulting series to headline
//! figures (enrollment duration, last subject dosed, total screened).

/// This module houses the public API for validating inputs, projecting
/// enrollment and shaping the results for charts and tables
pub mod compute;
mod enrollment;
/// This module contains error types
pub mod error;
mod parameters;
mod presentation;
mod summary;
mod util;
