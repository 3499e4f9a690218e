//----------------------------------------
// compute mod
//----------------------------------------
pub mod error;
mod project;
pub mod types;

pub use crate::enrollment::simulate::{MAX_PROJECTION_MONTHS, simulate_enrollment};
pub use crate::enrollment::types::EnrollmentMonthRow;
pub use crate::parameters::input::{EnrollmentInput, ScenarioDefaults};
pub use crate::parameters::types::{EnrollmentParameters, ScreenFailureRate};
pub use crate::presentation::chart::EnrollmentChart;
pub use crate::presentation::table::{EnrollmentTableView, TableEntry};
pub use crate::summary::derived_metrics::derive_summary;
pub use crate::summary::types::{DerivedSummary, TargetStatus};
pub use project::{project_enrollment, project_from_json, project_request};
pub use types::{EnrollmentProjection, ProjectionRequest};
