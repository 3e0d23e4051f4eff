use crate::commands::command_error::CommandError;
use crate::commands::report_format::format_bounds_report;
use crate::domain::simulator_parameters::PARAMETER_BOUNDS;
use crate::services::output_writer::write_serialized;

pub fn bounds_command(output: Option<String>) -> Result<(), CommandError> {
    println!("{}", format_bounds_report(&PARAMETER_BOUNDS));
    if let Some(output) = output {
        write_serialized(&output, &PARAMETER_BOUNDS)?;
        println!();
        println!("Parameter bounds written to {output}");
    }
    Ok(())
}
