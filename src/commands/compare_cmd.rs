use crate::commands::base_commands::CompareArgs;
use crate::commands::command_error::CommandError;
use crate::commands::report_format::format_comparison_report;
use crate::domain::scenario::preset_scenarios;
use crate::services::output_writer::write_serialized;
use crate::services::parameters_yaml::{load_scenarios_from_yaml_file, load_simulator_parameters};
use crate::services::scenario_comparison::compare_scenarios;

pub fn compare_command(args: CompareArgs) -> Result<(), CommandError> {
    let current = load_simulator_parameters(args.input.as_deref())?;
    let scenarios = match &args.scenarios {
        Some(path) => load_scenarios_from_yaml_file(path)?,
        None => preset_scenarios(),
    };
    let report = compare_scenarios(&current, &scenarios)?;
    write_serialized(&args.output, &report)?;

    println!("{}", format_comparison_report(&report));
    println!();
    println!("Scenario comparison written to {}", args.output);
    Ok(())
}
