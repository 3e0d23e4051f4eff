use serde::Serialize;

use crate::domain::scenario::Scenario;
use crate::domain::simulator_parameters::SimulatorParameters;
use crate::domain::validation::ValidationError;
use crate::services::budget_simulator::compute_budget;
use crate::services::cost_model_types::BudgetResults;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScenarioComparison {
    pub scenario: Scenario,
    pub results: BudgetResults,
    /// Scenario five-year total minus the current configuration's.
    pub delta_from_current: f64,
    pub delta_percent: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub current: BudgetResults,
    pub comparisons: Vec<ScenarioComparison>,
}

/// Runs the simulator once for `current` and once per scenario, keeping
/// the scenario order.
pub fn compare_scenarios(
    current: &SimulatorParameters,
    scenarios: &[Scenario],
) -> Result<ComparisonReport, ValidationError> {
    let current_results = compute_budget(current)?;
    let current_total = current_results.five_year.total_cost;

    let comparisons = scenarios
        .iter()
        .map(|scenario| -> Result<ScenarioComparison, ValidationError> {
            let results = compute_budget(&scenario.parameters)?;
            let delta_from_current = results.five_year.total_cost - current_total;
            let delta_percent = if current_total > 0.0 {
                delta_from_current / current_total * 100.0
            } else {
                0.0
            };
            log::debug!("scenario {}: delta {delta_from_current:.2}", scenario.id);
            Ok(ScenarioComparison {
                scenario: scenario.clone(),
                results,
                delta_from_current,
                delta_percent,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ComparisonReport {
        current: current_results,
        comparisons,
    })
}
