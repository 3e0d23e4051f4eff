use clap::Parser;

use simcenter_planner::commands::base_commands::{CliArgs, Commands};
use simcenter_planner::commands::bounds_cmd::bounds_command;
use simcenter_planner::commands::budget_cmd::budget_command;
use simcenter_planner::commands::capex_cmd::capex_command;
use simcenter_planner::commands::compare_cmd::compare_command;
use simcenter_planner::commands::completions_cmd::completions_command;
use simcenter_planner::commands::rfp_cmd::rfp_command;
use simcenter_planner::commands::roi_cmd::roi_command;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();
    let result = match args.command {
        Commands::Capex(args) => capex_command(args),
        Commands::Budget(args) => budget_command(args),
        Commands::Compare(args) => compare_command(args),
        Commands::Roi(args) => roi_command(args),
        Commands::Rfp(args) => rfp_command(args),
        Commands::Bounds { output } => bounds_command(output),
        Commands::Completions { shell } => {
            completions_command(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
