use serde::Serialize;

use crate::domain::cost::CostLineItem;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BenchmarkPosition {
    BelowRange,
    WithinRange,
    AboveRange,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CapexResult {
    pub line_items: Vec<CostLineItem>,
    pub subtotal: f64,
    pub contingency: f64,
    pub total_project_cost: f64,
    /// Rounded to the nearest dollar.
    pub cost_per_square_foot: f64,
    pub cost_per_room: f64,
    pub benchmark: BenchmarkPosition,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CapexSummary {
    pub construction: f64,
    pub equipment: f64,
    pub av_system: f64,
    pub soft_costs: f64,
    pub contingency: f64,
    pub existing_credits: f64,
    pub net: f64,
    pub total: f64,
    pub line_items: Vec<CostLineItem>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OpexSummary {
    pub staffing: f64,
    pub maintenance: f64,
    pub consumables: f64,
    pub software: f64,
    pub utilities: f64,
    pub refresh: f64,
    pub annual: f64,
    pub monthly: f64,
    pub line_items: Vec<CostLineItem>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProjectionYear {
    pub year: u32,
    pub capex: f64,
    pub opex: f64,
    pub total: f64,
    pub sessions_per_year: f64,
    /// 0 when the year has no sessions.
    pub cost_per_session: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FiveYearProjection {
    pub year_by_year: Vec<ProjectionYear>,
    pub total_capex: f64,
    pub total_opex: f64,
    pub total_cost: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UnitMetrics {
    pub annual_sessions: f64,
    pub cost_per_session: f64,
    pub cost_per_learner_hour: f64,
    /// First-year all-in cost (net CAPEX + annual OPEX) per square foot.
    pub cost_per_sf: f64,
    pub staff_training_hours: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BudgetResults {
    pub capex: CapexSummary,
    pub opex: OpexSummary,
    pub five_year: FiveYearProjection,
    pub metrics: UnitMetrics,
}
