use serde::{Deserialize, Serialize};

/// Hospital workforce figures that drive the cost-avoidance estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationalInputs {
    pub headcount: f64,
    pub baseline_turnover_percent: f64,
    pub cost_per_turnover: f64,
    pub orientation_cost_per_hire: f64,
    /// Reportable adverse events per staff member per year.
    pub baseline_adverse_event_rate: f64,
    pub cost_per_adverse_event: f64,
}

impl Default for OrganizationalInputs {
    fn default() -> Self {
        Self {
            headcount: 500.0,
            baseline_turnover_percent: 18.0,
            cost_per_turnover: 56_300.0,
            orientation_cost_per_hire: 12_000.0,
            baseline_adverse_event_rate: 0.05,
            cost_per_adverse_event: 17_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_overrides_headcount_only() {
        let inputs: OrganizationalInputs = serde_yaml::from_str("headcount: 1200\n").unwrap();
        assert_eq!(inputs.headcount, 1200.0);
        assert_eq!(inputs.cost_per_turnover, 56_300.0);
    }
}
