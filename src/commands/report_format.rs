use crate::domain::cost::CostLineItem;
use crate::domain::simulator_parameters::ParameterBound;
use crate::services::cost_model_types::{BenchmarkPosition, BudgetResults, CapexResult};
use crate::services::currency_format::{format_currency, format_percent};
use crate::services::roi_estimator::RoiReport;
use crate::services::scenario_comparison::ComparisonReport;

pub fn format_capex_report(result: &CapexResult) -> String {
    let mut lines = Vec::new();
    lines.push("CAPEX Estimate".to_string());
    lines.push(String::new());
    push_line_item_table(&mut lines, &result.line_items);
    lines.push(format!("Subtotal: {}", format_currency(result.subtotal)));
    lines.push(format!("Contingency: {}", format_currency(result.contingency)));
    lines.push(format!(
        "Total project cost: {}",
        format_currency(result.total_project_cost)
    ));
    lines.push(format!(
        "Cost per sf: {} ({})",
        format_currency(result.cost_per_square_foot),
        benchmark_label(result.benchmark)
    ));
    lines.push(format!("Cost per room: {}", format_currency(result.cost_per_room)));

    lines.join("\n")
}

pub fn format_budget_report(results: &BudgetResults) -> String {
    let capex = &results.capex;
    let opex = &results.opex;
    let metrics = &results.metrics;

    let mut lines = Vec::new();
    lines.push("Budget Simulation".to_string());
    lines.push(String::new());
    lines.push(format!("CAPEX total: {}", format_currency(capex.total)));
    lines.push(format!(
        "Existing asset credits: {}",
        format_currency(capex.existing_credits)
    ));
    lines.push(format!("Net investment: {}", format_currency(capex.net)));
    lines.push(format!(
        "Annual OPEX: {} ({} / month)",
        format_currency(opex.annual),
        format_currency(opex.monthly)
    ));
    lines.push(String::new());
    lines.push("Year | CAPEX | OPEX | Total | Cost/session".to_string());
    lines.push("-----|-------|------|-------|-------------".to_string());
    for year in &results.five_year.year_by_year {
        lines.push(format!(
            "{} | {} | {} | {} | {}",
            year.year,
            format_currency(year.capex),
            format_currency(year.opex),
            format_currency(year.total),
            format_unit_cost(year.cost_per_session)
        ));
    }
    lines.push(format!(
        "Five-year total: {}",
        format_currency(results.five_year.total_cost)
    ));
    lines.push(String::new());
    lines.push(format!("Annual sessions: {:.0}", metrics.annual_sessions));
    lines.push(format!(
        "Cost per session: {}",
        format_unit_cost(metrics.cost_per_session)
    ));
    lines.push(format!(
        "Cost per learner-hour: {}",
        format_unit_cost(metrics.cost_per_learner_hour)
    ));
    lines.push(format!("Cost per sf: {}", format_unit_cost(metrics.cost_per_sf)));

    lines.join("\n")
}

pub fn format_comparison_report(report: &ComparisonReport) -> String {
    let mut lines = Vec::new();
    lines.push("Scenario Comparison".to_string());
    lines.push(format!(
        "Current five-year total: {}",
        format_currency(report.current.five_year.total_cost)
    ));
    lines.push(String::new());
    lines.push("Scenario | Five-year total | Delta | Delta %".to_string());
    lines.push("---------|-----------------|-------|--------".to_string());
    for comparison in &report.comparisons {
        lines.push(format!(
            "{} | {} | {} | {}",
            comparison.scenario.name,
            format_currency(comparison.results.five_year.total_cost),
            format_signed_currency(comparison.delta_from_current),
            format_percent(comparison.delta_percent)
        ));
    }

    lines.join("\n")
}

pub fn format_roi_report(report: &RoiReport) -> String {
    let confidence = &report.estimate.confidence;
    let payback = match report.timeline.payback_year {
        Some(year) => format!("year {year}"),
        None => "not reached".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("ROI Estimate".to_string());
    lines.push(String::new());
    for category in &report.estimate.categories {
        lines.push(format!(
            "{}: {} / yr",
            category.name,
            format_currency(category.savings)
        ));
    }
    lines.push(format!(
        "Annual savings: {} (range {} - {})",
        format_currency(confidence.base),
        format_currency(confidence.low),
        format_currency(confidence.high)
    ));
    lines.push(format!("Payback: {payback}"));
    lines.push(format!("ROI: {}", format_percent(report.timeline.roi_percent)));
    lines.push(String::new());
    lines.push("Asset | CAPEX | Attributed savings".to_string());
    lines.push("------|-------|-------------------".to_string());
    for asset in &report.assets {
        lines.push(format!(
            "{} | {} | {}",
            asset.asset,
            format_currency(asset.capex),
            format_currency(asset.attributed_savings)
        ));
    }

    lines.join("\n")
}

pub fn format_bounds_report(bounds: &[ParameterBound]) -> String {
    let mut lines = Vec::new();
    lines.push("Parameter Bounds".to_string());
    lines.push(String::new());
    lines.push("Field | Min | Max | Step".to_string());
    lines.push("------|-----|-----|-----".to_string());
    for bound in bounds {
        lines.push(format!(
            "{} | {} | {} | {}",
            bound.field, bound.min, bound.max, bound.step
        ));
    }

    lines.join("\n")
}

fn push_line_item_table(lines: &mut Vec<String>, items: &[CostLineItem]) {
    lines.push("Item | Amount | Basis".to_string());
    lines.push("-----|--------|------".to_string());
    for item in items {
        lines.push(format!(
            "{} | {} | {}",
            item.category,
            format_currency(item.amount),
            item.basis
        ));
    }
}

fn benchmark_label(position: BenchmarkPosition) -> &'static str {
    match position {
        BenchmarkPosition::BelowRange => "below industry range",
        BenchmarkPosition::WithinRange => "within industry range",
        BenchmarkPosition::AboveRange => "above industry range",
    }
}

fn format_unit_cost(value: f64) -> String {
    format!("${value:.2}")
}

fn format_signed_currency(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_currency(value))
    } else {
        format_currency(value)
    }
}
