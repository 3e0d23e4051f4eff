use chrono::{Duration, NaiveDate};

use crate::domain::simulator_parameters::SimulatorParameters;
use crate::services::cost_model_types::BudgetResults;
use crate::services::currency_format::{budget_range, format_currency, round_to_nearest};

pub const RESPONSE_WINDOW_DAYS: i64 = 30;

/// Bid ranges are quoted to the nearest hundred dollars.
const RANGE_ROUNDING: f64 = 100.0;

/// Everything the bid request template needs.
pub struct RfpRequest<'a> {
    pub project_name: &'a str,
    pub parameters: &'a SimulatorParameters,
    pub budget: &'a BudgetResults,
    pub issue_date: NaiveDate,
}

pub fn submission_deadline(issue_date: NaiveDate) -> NaiveDate {
    issue_date + Duration::days(RESPONSE_WINDOW_DAYS)
}

fn format_range(amount: f64) -> String {
    let range = budget_range(amount);
    format!(
        "{} - {}",
        format_currency(round_to_nearest(range.low, RANGE_ROUNDING)),
        format_currency(round_to_nearest(range.high, RANGE_ROUNDING))
    )
}

pub fn generate_rfp_markdown(request: &RfpRequest) -> String {
    let params = request.parameters;
    let capex = &request.budget.capex;

    let mut lines = Vec::new();
    lines.push(format!("# Request for Proposal: {}", request.project_name));
    lines.push(String::new());
    lines.push(format!(
        "Issue date: {}",
        request.issue_date.format("%Y-%m-%d")
    ));
    lines.push(format!(
        "Proposals due: {}",
        submission_deadline(request.issue_date).format("%Y-%m-%d")
    ));
    lines.push(String::new());

    lines.push("## Project Summary".to_string());
    lines.push(String::new());
    lines.push(format!("- Floor area: {} sf", params.floor_area));
    lines.push(format!(
        "- Rooms: {} simulation, {} control, {} debriefing",
        params.sim_rooms, params.control_rooms, params.debrief_rooms
    ));
    lines.push(format!(
        "- Equipment: {} high-fidelity manikins, {} task trainers",
        params.high_fidelity_manikins, params.task_trainers
    ));
    lines.push(format!("- A/V tier: {}", params.av_tier));
    lines.push(format!(
        "- Quality level: {}, cost region: {}",
        params.quality_level, params.cost_region
    ));
    lines.push(String::new());

    lines.push("## Scope and Budget Ranges".to_string());
    lines.push(String::new());
    lines.push("| Scope | Basis | Budget range |".to_string());
    lines.push("|-------|-------|--------------|".to_string());
    for item in &capex.line_items {
        lines.push(format!(
            "| {} | {} | {} |",
            item.category,
            item.basis,
            format_range(item.amount)
        ));
    }
    lines.push(format!("| **Total** | | **{}** |", format_range(capex.total)));
    lines.push(String::new());

    lines.push("## Submission Requirements".to_string());
    lines.push(String::new());
    lines.push("1. Itemized pricing for each scope line above, with unit costs.".to_string());
    lines.push("2. Installation schedule and phasing around active clinical areas.".to_string());
    lines.push("3. Warranty terms and annual service contract pricing.".to_string());
    lines.push("4. Three references from healthcare simulation installations.".to_string());
    lines.push(String::new());
    lines.push(
        "Budget ranges are planning estimates (+/-15%, nearest $100) and do not constitute a commitment to award."
            .to_string(),
    );

    lines.join("\n") + "\n"
}
