use crate::commands::base_commands::BudgetArgs;
use crate::commands::command_error::CommandError;
use crate::commands::report_format::format_budget_report;
use crate::services::budget_simulator::compute_budget;
use crate::services::chart_rows::budget_chart_data;
use crate::services::output_writer::write_serialized;
use crate::services::parameters_yaml::load_simulator_parameters;
use crate::services::projection_plot::write_projection_png;

pub fn budget_command(args: BudgetArgs) -> Result<(), CommandError> {
    let params = load_simulator_parameters(args.input.as_deref())?;
    let results = compute_budget(&params)?;
    write_serialized(&args.output, &results)?;

    if let Some(chart) = &args.chart {
        write_projection_png(chart, &results.five_year)?;
    }
    if let Some(chart_data) = &args.chart_data {
        write_serialized(chart_data, &budget_chart_data(&results))?;
    }

    println!("{}", format_budget_report(&results));
    println!();
    println!("Budget simulation written to {}", args.output);
    if let Some(chart) = &args.chart {
        println!("Projection chart written to {chart}");
    }
    if let Some(chart_data) = &args.chart_data {
        println!("Chart data written to {chart_data}");
    }
    Ok(())
}
