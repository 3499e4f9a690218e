use chrono::NaiveDate;

use crate::enrollment::error::EnrollmentProjectionError;
use crate::enrollment::ramp::site_activation_for_month;
use crate::enrollment::types::EnrollmentMonthRow;
use crate::parameters::types::EnrollmentParameters;
use crate::util::calendar::{add_months, month_label};
use crate::util::rounding::round_half_up;

/// Values fixed for the whole projection, computed once up front
#[derive(Debug, Clone, Copy)]
pub struct ProjectionConstants {
    pub first_subject_dosed: NaiveDate,
    pub target: f64,
    pub number_of_sites: f64,
    pub activation_rate: f64,
    pub screening_rate: f64,
    pub pass_fraction: f64,
    pub total_screening_needed: f64,
}

impl ProjectionConstants {
    pub fn new(params: &EnrollmentParameters) -> Self {
        ProjectionConstants {
            first_subject_dosed: params.first_subject_dosed(),
            target: params.total_enrollment_target() as f64,
            number_of_sites: params.number_of_sites() as f64,
            activation_rate: params.activation_rate(),
            screening_rate: params.screening_rate_per_site_per_month(),
            pass_fraction: params.screen_failure_rate().pass_fraction(),
            total_screening_needed: params.total_screening_needed(),
        }
    }
}

#[derive(Debug)]
pub struct MonthStep {
    pub row: EnrollmentMonthRow,
    /// Set when all planned screening was used up this month; the projection
    /// stops after this row whether or not the target was reached.
    pub screening_exhausted: bool,
}

/// Running totals carried from one month to the next
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentState {
    pub month: u32,
    pub activation_cumulative: f64,
    pub screening_cumulative: f64,
    pub enrollment_cumulative: f64,
    pub target_reached_month: Option<u32>,
}

impl EnrollmentState {
    /// Simulates the next month and returns its (rounded) row
    pub fn advance(
        &mut self,
        constants: &ProjectionConstants,
    ) -> Result<MonthStep, EnrollmentProjectionError> {
        self.month += 1;
        let month = self.month;
        let date = add_months(constants.first_subject_dosed, month - 1)
            .ok_or(EnrollmentProjectionError::DateOutOfRange { month })?;

        //----------------------------------------
        // Site activation
        let site_activation = site_activation_for_month(month, constants.activation_rate);
        // Overshoot past the site count is dropped, not carried
        if self.activation_cumulative + site_activation > constants.number_of_sites {
            self.activation_cumulative = constants.number_of_sites;
        } else {
            self.activation_cumulative += site_activation;
        }

        //----------------------------------------
        // Screening
        let screening = constants.screening_rate * self.activation_cumulative;

        // Planned screening already used up: take whatever is left and stop
        if self.screening_cumulative > constants.total_screening_needed {
            let remaining = (constants.total_screening_needed - self.screening_cumulative).max(0.0);
            self.screening_cumulative = constants.total_screening_needed;
            let enrollment = remaining * constants.pass_fraction;
            self.enrollment_cumulative += enrollment;
            self.target_reached_month.get_or_insert(month);
            return Ok(MonthStep {
                row: self.row(date, site_activation, remaining, enrollment),
                screening_exhausted: true,
            });
        }

        //----------------------------------------
        // Enrollment
        self.screening_cumulative += screening;
        let enrollment = screening * constants.pass_fraction;
        self.enrollment_cumulative += enrollment;
        if self.enrollment_cumulative >= constants.target && self.target_reached_month.is_none() {
            self.target_reached_month = Some(month);
            self.enrollment_cumulative = constants.target;
            self.screening_cumulative = self
                .screening_cumulative
                .min(constants.total_screening_needed);
        }

        Ok(MonthStep {
            row: self.row(date, site_activation, screening, enrollment),
            screening_exhausted: false,
        })
    }

    fn row(
        &self,
        date: NaiveDate,
        site_activation: f64,
        screening: f64,
        enrollment: f64,
    ) -> EnrollmentMonthRow {
        EnrollmentMonthRow {
            month: self.month,
            date,
            label: month_label(date),
            site_activation_this_month: round_half_up(site_activation),
            activation_cumulative: round_half_up(self.activation_cumulative),
            screening_this_month: round_half_up(screening),
            screening_cumulative: round_half_up(self.screening_cumulative),
            enrollment_this_month: round_half_up(enrollment),
            enrollment_cumulative: round_half_up(self.enrollment_cumulative),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::parameters::types::ScreenFailureRate;

    fn reference_constants() -> ProjectionConstants {
        let params = EnrollmentParameters::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid test date"),
            100,
            350,
            8,
            0.44,
            ScreenFailureRate::from_fraction(0.38).expect("valid screen failure rate"),
        )
        .expect("failed to construct EnrollmentParameters");
        ProjectionConstants::new(&params)
    }

    #[test]
    fn first_month_is_idle() {
        let constants = reference_constants();
        let mut state = EnrollmentState::default();
        let step = state.advance(&constants).expect("failed to advance");
        assert!(!step.screening_exhausted);
        assert_eq!(step.row.month, 1);
        assert_eq!(step.row.label, "Jan-2025");
        assert_eq!(step.row.site_activation_this_month, 0.);
        assert_eq!(step.row.screening_cumulative, 0.);
        assert_eq!(step.row.enrollment_cumulative, 0.);
    }

    #[test]
    fn cumulative_state_is_not_rounded() {
        let constants = reference_constants();
        let mut state = EnrollmentState::default();
        state.advance(&constants).expect("failed to advance");
        let step = state.advance(&constants).expect("failed to advance");
        assert!((state.screening_cumulative - 4.84).abs() < 1e-12);
        assert!((state.enrollment_cumulative - 4.84 * 0.62).abs() < 1e-12);
        assert_eq!(step.row.screening_cumulative, 5.);
        assert_eq!(step.row.enrollment_cumulative, 3.);
    }

    #[test]
    fn activation_overshoot_is_dropped() {
        let constants = reference_constants();
        let mut state = EnrollmentState {
            month: 10,
            activation_cumulative: 340.,
            ..EnrollmentState::default()
        };
        let step = state.advance(&constants).expect("failed to advance");
        assert_eq!(state.activation_cumulative, 350.);
        assert_eq!(step.row.site_activation_this_month, 44.);
        assert_eq!(step.row.activation_cumulative, 350.);
    }

    #[test]
    fn target_reached_clamps_totals() {
        let constants = reference_constants();
        let mut state = EnrollmentState {
            month: 8,
            activation_cumulative: 300.,
            screening_cumulative: 150.,
            enrollment_cumulative: 93.,
            target_reached_month: None,
        };
        let step = state.advance(&constants).expect("failed to advance");
        assert!(!step.screening_exhausted);
        assert_eq!(state.target_reached_month, Some(9));
        assert_eq!(state.enrollment_cumulative, 100.);
        assert_eq!(state.screening_cumulative, constants.total_screening_needed);
        assert_eq!(step.row.enrollment_cumulative, 100.);
    }

    #[test]
    fn exhausted_screening_stops_short_of_target() {
        let constants = reference_constants();
        let mut state = EnrollmentState {
            month: 6,
            activation_cumulative: 136.,
            screening_cumulative: constants.total_screening_needed + 1.,
            enrollment_cumulative: 90.,
            target_reached_month: None,
        };
        let step = state.advance(&constants).expect("failed to advance");
        assert!(step.screening_exhausted);
        assert_eq!(state.target_reached_month, Some(7));
        assert_eq!(state.screening_cumulative, constants.total_screening_needed);
        assert_eq!(state.enrollment_cumulative, 90.);
        assert_eq!(step.row.screening_this_month, 0.);
        assert_eq!(step.row.enrollment_this_month, 0.);
    }
}
