use std::fs;

use anyhow::{Context, Result};
use ctenroll::compute::{
    EnrollmentInput, EnrollmentProjection, EnrollmentTableView, ProjectionRequest,
    project_request,
};
use tracing::debug;

use crate::cli::{OutputFormatArg, ProjectArgs};
use crate::render::{print_projection_table, print_summary};

pub fn run_project(args: &ProjectArgs) -> Result<()> {
    let request = load_request(args)?;
    debug!(?request, "resolved projection request");
    let projection = project_request(&request).context("enrollment projection failed")?;

    match args.output {
        OutputFormatArg::Json => print_json(&projection)?,
        OutputFormatArg::Table => {
            print_summary(&projection.summary);
            println!();
            print_projection_table(
                &EnrollmentTableView::new(&projection.rows, args.expand),
                request.resolved_input().total_enrollment,
            );
        }
    }
    Ok(())
}

fn load_request(args: &ProjectArgs) -> Result<ProjectionRequest> {
    if let Some(path) = &args.input {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse projection request {}", path.display()));
    }

    let defaults = EnrollmentInput::default();
    Ok(ProjectionRequest {
        input: EnrollmentInput {
            first_subject_dosed: args
                .first_subject_dosed
                .clone()
                .unwrap_or(defaults.first_subject_dosed),
            total_enrollment: args.target,
            number_of_sites: args.sites,
            activation_duration: args.activation_months,
            screening_rate: args.screening_rate,
            screen_failure_percent: args.screen_failure_percent,
        },
        scenario: None,
    })
}

fn print_json(projection: &EnrollmentProjection) -> Result<()> {
    let json =
        serde_json::to_string_pretty(projection).context("failed to encode projection")?;
    println!("{json}");
    Ok(())
}
