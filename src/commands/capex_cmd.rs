use crate::commands::base_commands::CapexArgs;
use crate::commands::command_error::CommandError;
use crate::commands::report_format::format_capex_report;
use crate::services::capex_model::calculate_capex;
use crate::services::output_writer::write_serialized;
use crate::services::parameters_yaml::load_project_parameters;

pub fn capex_command(args: CapexArgs) -> Result<(), CommandError> {
    let params = load_project_parameters(args.input.as_deref())?;
    let result = calculate_capex(&params)?;
    write_serialized(&args.output, &result)?;

    println!("{}", format_capex_report(&result));
    println!();
    println!("CAPEX estimate written to {}", args.output);
    Ok(())
}
