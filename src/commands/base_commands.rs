use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "simcenter", author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate construction CAPEX from a facility description
    Capex(CapexArgs),
    /// Simulate CAPEX, OPEX and the five-year projection
    Budget(BudgetArgs),
    /// Compare scenarios against the current parameters
    Compare(CompareArgs),
    /// Estimate cost avoidance and payback
    Roi(RoiArgs),
    /// Generate a Markdown request for proposal
    Rfp(RfpArgs),
    /// List the supported range of every numeric parameter
    Bounds {
        /// Optional YAML or JSON file for the bounds table
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct CapexArgs {
    /// Project parameters YAML (defaults when omitted)
    #[arg(short, long)]
    pub input: Option<String>,
    /// Output YAML or JSON file
    #[arg(short, long)]
    pub output: String,
}

#[derive(Args)]
pub struct BudgetArgs {
    /// Simulator parameters YAML, applied over the Base Case
    #[arg(short, long)]
    pub input: Option<String>,
    /// Output YAML or JSON file
    #[arg(short, long)]
    pub output: String,
    /// Optional PNG chart of the five-year projection
    #[arg(long)]
    pub chart: Option<String>,
    /// Optional YAML or JSON file with chart-ready breakdown rows
    #[arg(long)]
    pub chart_data: Option<String>,
}

#[derive(Args)]
pub struct CompareArgs {
    /// Current simulator parameters YAML, applied over the Base Case
    #[arg(short, long)]
    pub input: Option<String>,
    /// Output YAML or JSON file
    #[arg(short, long)]
    pub output: String,
    /// Scenario catalog YAML (built-in presets when omitted)
    #[arg(long)]
    pub scenarios: Option<String>,
}

#[derive(Args)]
pub struct RoiArgs {
    /// Organizational inputs YAML (defaults when omitted)
    #[arg(short, long)]
    pub input: Option<String>,
    /// Output YAML or JSON file
    #[arg(short, long)]
    pub output: String,
    /// Simulator parameters YAML priced as the investment
    #[arg(short, long)]
    pub budget: Option<String>,
    /// Years in the payback timeline
    #[arg(short = 'n', long, default_value_t = 5)]
    pub years: u32,
}

#[derive(Args)]
pub struct RfpArgs {
    /// Simulator parameters YAML, applied over the Base Case
    #[arg(short, long)]
    pub input: Option<String>,
    /// Output Markdown file
    #[arg(short, long)]
    pub output: String,
    /// Project name used in the document title
    #[arg(long, default_value = "Simulation Center")]
    pub name: String,
    /// Issue date (YYYY-MM-DD)
    #[arg(short = 'd', long, default_value_t = default_issue_date())]
    pub issue_date: NaiveDate,
}

fn default_issue_date() -> NaiveDate {
    Local::now().date_naive()
}
