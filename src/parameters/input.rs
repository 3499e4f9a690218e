use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::parameters::error::InvalidEnrollmentParameters;
use crate::parameters::types::{EnrollmentParameters, ScreenFailureRate};

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Enrollment inputs as entered on the projection form or sent in a request,
/// before validation. The screen failure rate is a percentage here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentInput {
    pub first_subject_dosed: String,
    pub total_enrollment: i64,
    pub number_of_sites: i64,
    pub activation_duration: i64,
    pub screening_rate: f64,
    pub screen_failure_percent: f64,
}

impl Default for EnrollmentInput {
    fn default() -> Self {
        EnrollmentInput {
            first_subject_dosed: Local::now()
                .date_naive()
                .format(DATE_INPUT_FORMAT)
                .to_string(),
            total_enrollment: 100,
            number_of_sites: 350,
            activation_duration: 8,
            screening_rate: 0.44,
            screen_failure_percent: 38.0,
        }
    }
}

/// Values a stored scenario can contribute to the form. Empty strings and
/// zero sample sizes count as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDefaults {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub sample_size: Option<i64>,
}

impl EnrollmentInput {
    /// Overrides the first dose date and enrollment target with a stored
    /// scenario's start date and sample size, where present
    pub fn with_scenario_defaults(mut self, defaults: &ScenarioDefaults) -> Self {
        if let Some(start_date) = &defaults.start_date
            && !start_date.trim().is_empty()
        {
            self.first_subject_dosed = start_date.trim().to_string();
        }
        if let Some(sample_size) = defaults.sample_size
            && sample_size != 0
        {
            self.total_enrollment = sample_size;
        }
        self
    }

    pub fn validate(&self) -> Result<EnrollmentParameters, InvalidEnrollmentParameters> {
        let first_subject_dosed =
            NaiveDate::parse_from_str(self.first_subject_dosed.trim(), DATE_INPUT_FORMAT)
                .map_err(|_| {
                    InvalidEnrollmentParameters::InvalidDate(self.first_subject_dosed.clone())
                })?;

        EnrollmentParameters::new(
            first_subject_dosed,
            positive_count("total enrollment target", self.total_enrollment)?,
            positive_count("number of sites", self.number_of_sites)?,
            positive_count("activation duration (months)", self.activation_duration)?,
            self.screening_rate,
            ScreenFailureRate::from_percent(self.screen_failure_percent)?,
        )
    }
}

fn positive_count(field: &'static str, value: i64) -> Result<u32, InvalidEnrollmentParameters> {
    if value <= 0 {
        return Err(InvalidEnrollmentParameters::NonPositiveCount { field, value });
    }
    u32::try_from(value).map_err(|_| InvalidEnrollmentParameters::CountTooLarge { field, value })
}

#[cfg(test)]
mod tests {

    use super::*;

    fn reference_input() -> EnrollmentInput {
        EnrollmentInput {
            first_subject_dosed: String::from("2025-01-01"),
            ..EnrollmentInput::default()
        }
    }

    #[test]
    fn validates_reference_input() {
        let params = reference_input()
            .validate()
            .expect("failed to validate reference input");
        assert_eq!(
            params.first_subject_dosed(),
            NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid test date")
        );
        assert_eq!(params.total_enrollment_target(), 100);
        assert_eq!(params.number_of_sites(), 350);
        assert_eq!(params.activation_duration_months(), 8);
        assert!((params.screen_failure_rate().fraction() - 0.38).abs() < 1e-12);
    }

    #[test]
    fn default_date_parses() {
        assert!(EnrollmentInput::default().validate().is_ok());
    }

    #[test]
    fn bad_date_rejected() {
        let input = EnrollmentInput {
            first_subject_dosed: String::from("01/01/2025"),
            ..reference_input()
        };
        assert_eq!(
            input.validate(),
            Err(InvalidEnrollmentParameters::InvalidDate(String::from(
                "01/01/2025"
            )))
        );
    }

    #[test]
    fn negative_counts_rejected() {
        let input = EnrollmentInput {
            number_of_sites: -3,
            ..reference_input()
        };
        assert_eq!(
            input.validate(),
            Err(InvalidEnrollmentParameters::NonPositiveCount {
                field: "number of sites",
                value: -3
            })
        );
    }

    #[test]
    fn oversized_count_rejected() {
        let input = EnrollmentInput {
            total_enrollment: i64::from(u32::MAX) + 1,
            ..reference_input()
        };
        assert!(matches!(
            input.validate(),
            Err(InvalidEnrollmentParameters::CountTooLarge { .. })
        ));
    }

    #[test]
    fn full_screen_failure_rejected() {
        let input = EnrollmentInput {
            screen_failure_percent: 100.0,
            ..reference_input()
        };
        assert!(matches!(
            input.validate(),
            Err(InvalidEnrollmentParameters::ScreenFailurePercentOutOfBounds(_))
        ));
    }

    #[test]
    fn scenario_defaults_override() {
        let input = reference_input().with_scenario_defaults(&ScenarioDefaults {
            start_date: Some(String::from("2026-03-15")),
            sample_size: Some(240),
        });
        assert_eq!(input.first_subject_dosed, "2026-03-15");
        assert_eq!(input.total_enrollment, 240);
    }

    #[test]
    fn empty_scenario_defaults_ignored() {
        let input = reference_input().with_scenario_defaults(&ScenarioDefaults {
            start_date: Some(String::from("  ")),
            sample_size: Some(0),
        });
        assert_eq!(input, reference_input());
    }

    #[test]
    fn deserializes_camel_case() {
        let input: EnrollmentInput = serde_json::from_str(
            r#"{
                "firstSubjectDosed": "2025-01-01",
                "totalEnrollment": 100,
                "numberOfSites": 350,
                "activationDuration": 8,
                "screeningRate": 0.44,
                "screenFailurePercent": 38
            }"#,
        )
        .expect("failed to deserialize EnrollmentInput");
        assert_eq!(input, reference_input());
    }
}
