use chrono::NaiveDate;
use serde::Serialize;

use crate::parameters::error::InvalidEnrollmentParameters;

/// Fraction of screened patients who fail screening, always in [0, 1)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ScreenFailureRate(f64);

impl ScreenFailureRate {
    pub fn from_fraction(fraction: f64) -> Result<Self, InvalidEnrollmentParameters> {
        // NaN fails both comparisons, so it's rejected here too
        if !(0.0..1.0).contains(&fraction) {
            return Err(InvalidEnrollmentParameters::ScreenFailureRateOutOfBounds(
                fraction,
            ));
        }
        Ok(ScreenFailureRate(fraction))
    }

    /// Forms and requests express the rate as a percentage. This is the only
    /// place a percentage becomes a fraction.
    pub fn from_percent(percent: f64) -> Result<Self, InvalidEnrollmentParameters> {
        if !(0.0..100.0).contains(&percent) {
            return Err(InvalidEnrollmentParameters::ScreenFailurePercentOutOfBounds(
                percent,
            ));
        }
        Self::from_fraction(percent / 100.0)
    }

    pub fn fraction(self) -> f64 {
        self.0
    }

    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Fraction of screened patients who go on to enroll
    pub fn pass_fraction(self) -> f64 {
        1.0 - self.0
    }
}

/// Validated inputs for a single enrollment projection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentParameters {
    first_subject_dosed: NaiveDate,
    total_enrollment_target: u32,
    number_of_sites: u32,
    activation_duration_months: u32,
    screening_rate_per_site_per_month: f64,
    screen_failure_rate: ScreenFailureRate,
}

impl EnrollmentParameters {
    pub fn new(
        first_subject_dosed: NaiveDate,
        total_enrollment_target: u32,
        number_of_sites: u32,
        activation_duration_months: u32,
        screening_rate_per_site_per_month: f64,
        screen_failure_rate: ScreenFailureRate,
    ) -> Result<Self, InvalidEnrollmentParameters> {
        require_positive("total enrollment target", total_enrollment_target)?;
        require_positive("number of sites", number_of_sites)?;
        require_positive("activation duration (months)", activation_duration_months)?;
        if !screening_rate_per_site_per_month.is_finite() || screening_rate_per_site_per_month <= 0.0
        {
            return Err(InvalidEnrollmentParameters::BadScreeningRate(
                screening_rate_per_site_per_month,
            ));
        }

        Ok(EnrollmentParameters {
            first_subject_dosed,
            total_enrollment_target,
            number_of_sites,
            activation_duration_months,
            screening_rate_per_site_per_month,
            screen_failure_rate,
        })
    }

    pub fn first_subject_dosed(&self) -> NaiveDate {
        self.first_subject_dosed
    }

    pub fn total_enrollment_target(&self) -> u32 {
        self.total_enrollment_target
    }

    pub fn number_of_sites(&self) -> u32 {
        self.number_of_sites
    }

    pub fn activation_duration_months(&self) -> u32 {
        self.activation_duration_months
    }

    pub fn screening_rate_per_site_per_month(&self) -> f64 {
        self.screening_rate_per_site_per_month
    }

    pub fn screen_failure_rate(&self) -> ScreenFailureRate {
        self.screen_failure_rate
    }

    /// Sites activated per month once ramp-up is complete:
    /// ceil(sites / activation duration)
    pub fn activation_rate(&self) -> f64 {
        self.number_of_sites.div_ceil(self.activation_duration_months) as f64
    }

    /// Enrolled patients per active site per month. Informational only; the
    /// projection derives enrollment from actual screening volume.
    pub fn enrollment_rate(&self) -> f64 {
        self.screening_rate_per_site_per_month * self.screen_failure_rate.pass_fraction()
    }

    /// Patients that must be screened to enroll the target
    pub fn total_screening_needed(&self) -> f64 {
        self.total_enrollment_target as f64 / self.screen_failure_rate.pass_fraction()
    }
}

fn require_positive(field: &'static str, value: u32) -> Result<(), InvalidEnrollmentParameters> {
    if value == 0 {
        return Err(InvalidEnrollmentParameters::NonPositiveCount {
            field,
            value: 0,
        });
    }
    Ok(())
}
