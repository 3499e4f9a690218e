//----------------------------------------
// compute mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

use crate::enrollment::types::EnrollmentMonthRow;
use crate::parameters::input::{EnrollmentInput, ScenarioDefaults};
use crate::summary::types::DerivedSummary;

/// Result of a projection run; also the JSON response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentProjection {
    pub rows: Vec<EnrollmentMonthRow>,
    pub summary: DerivedSummary,
}

/// JSON request body: the form inputs, optionally overridden by values
/// stored on the scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub input: EnrollmentInput,
    #[serde(default)]
    pub scenario: Option<ScenarioDefaults>,
}

impl ProjectionRequest {
    pub fn resolved_input(&self) -> EnrollmentInput {
        match &self.scenario {
            Some(defaults) => self.input.clone().with_scenario_defaults(defaults),
            None => self.input.clone(),
        }
    }
}
