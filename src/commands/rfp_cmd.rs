use std::path::Path;

use crate::commands::base_commands::RfpArgs;
use crate::commands::command_error::CommandError;
use crate::services::budget_simulator::compute_budget;
use crate::services::output_writer::write_text;
use crate::services::parameters_yaml::load_simulator_parameters;
use crate::services::rfp_document::{generate_rfp_markdown, submission_deadline, RfpRequest};

pub fn rfp_command(args: RfpArgs) -> Result<(), CommandError> {
    let parameters = load_simulator_parameters(args.input.as_deref())?;
    let budget = compute_budget(&parameters)?;
    let document = generate_rfp_markdown(&RfpRequest {
        project_name: &args.name,
        parameters: &parameters,
        budget: &budget,
        issue_date: args.issue_date,
    });
    write_text(Path::new(&args.output), &document)?;

    println!(
        "Request for proposal written to {} (proposals due {})",
        args.output,
        submission_deadline(args.issue_date).format("%Y-%m-%d")
    );
    Ok(())
}
