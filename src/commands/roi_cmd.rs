use crate::commands::base_commands::RoiArgs;
use crate::commands::command_error::CommandError;
use crate::commands::report_format::format_roi_report;
use crate::services::budget_simulator::compute_budget;
use crate::services::output_writer::write_serialized;
use crate::services::parameters_yaml::{load_organizational_inputs, load_simulator_parameters};
use crate::services::roi_estimator::build_roi_report;

pub fn roi_command(args: RoiArgs) -> Result<(), CommandError> {
    let inputs = load_organizational_inputs(args.input.as_deref())?;
    let params = load_simulator_parameters(args.budget.as_deref())?;
    let budget = compute_budget(&params)?;
    let report = build_roi_report(&inputs, &budget, args.years)?;
    write_serialized(&args.output, &report)?;

    println!("{}", format_roi_report(&report));
    println!();
    println!("ROI estimate written to {}", args.output);
    Ok(())
}
