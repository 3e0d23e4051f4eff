use serde::Serialize;

use crate::domain::organization::OrganizationalInputs;
use crate::domain::validation::{require_finite, require_non_negative, ValidationError};
use crate::services::cost_model_types::BudgetResults;

/// Share of the base case kept in the conservative estimate.
pub const CONSERVATIVE_MULTIPLIER: f64 = 0.70;
pub const OPTIMISTIC_MULTIPLIER: f64 = 1.30;

/// Fraction of full savings realised in years 1, 2 and 3+.
const RAMP_UP: [f64; 3] = [0.50, 0.75, 1.0];

const ASSET_LINE_IDS: [&str; 3] = ["construction", "equipment", "av-system"];

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SavingsCategory {
    pub id: String,
    pub name: String,
    pub baseline_rate: f64,
    pub headcount: f64,
    pub improvement_factor: f64,
    pub cost_per_event: f64,
    pub events_avoided: f64,
    pub savings: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceRange {
    pub low: f64,
    pub base: f64,
    pub high: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoiEstimate {
    pub categories: Vec<SavingsCategory>,
    pub confidence: ConfidenceRange,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoiTimelineYear {
    pub year: u32,
    pub ramp: f64,
    pub savings: f64,
    pub cumulative_savings: f64,
    pub cumulative_cost: f64,
    pub net_position: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoiTimeline {
    pub years: Vec<RoiTimelineYear>,
    /// First year whose cumulative savings cover cumulative cost.
    pub payback_year: Option<u32>,
    pub roi_percent: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AssetAttribution {
    pub asset_id: String,
    pub asset: String,
    pub capex: f64,
    pub share: f64,
    pub attributed_savings: f64,
    pub savings_to_cost_ratio: f64,
}

/// Estimate, payback timeline and per-asset attribution against one budget.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoiReport {
    pub estimate: RoiEstimate,
    pub timeline: RoiTimeline,
    pub assets: Vec<AssetAttribution>,
}

struct CategoryAssumption {
    id: &'static str,
    name: &'static str,
    improvement_factor: f64,
}

const TURNOVER: CategoryAssumption = CategoryAssumption {
    id: "turnover-reduction",
    name: "Turnover Reduction",
    improvement_factor: 0.20,
};

const ORIENTATION: CategoryAssumption = CategoryAssumption {
    id: "orientation-savings",
    name: "Orientation Savings",
    improvement_factor: 0.30,
};

const ADVERSE_EVENTS: CategoryAssumption = CategoryAssumption {
    id: "adverse-events-avoided",
    name: "Adverse Events Avoided",
    improvement_factor: 0.15,
};

impl CategoryAssumption {
    fn apply(&self, baseline_rate: f64, headcount: f64, cost_per_event: f64) -> SavingsCategory {
        let baseline_rate = baseline_rate.max(0.0);
        let headcount = headcount.max(0.0);
        let cost_per_event = cost_per_event.max(0.0);
        let events_avoided = baseline_rate * headcount * self.improvement_factor;
        SavingsCategory {
            id: self.id.to_string(),
            name: self.name.to_string(),
            baseline_rate,
            headcount,
            improvement_factor: self.improvement_factor,
            cost_per_event,
            events_avoided,
            savings: events_avoided * cost_per_event,
        }
    }
}

/// Estimates annual cost avoidance attributable to simulation training.
/// Negative inputs count as zero; non-finite inputs are rejected.
pub fn estimate_roi(inputs: &OrganizationalInputs) -> Result<RoiEstimate, ValidationError> {
    require_finite("headcount", inputs.headcount)?;
    require_finite("baseline_turnover_percent", inputs.baseline_turnover_percent)?;
    require_finite("cost_per_turnover", inputs.cost_per_turnover)?;
    require_finite("orientation_cost_per_hire", inputs.orientation_cost_per_hire)?;
    require_finite("baseline_adverse_event_rate", inputs.baseline_adverse_event_rate)?;
    require_finite("cost_per_adverse_event", inputs.cost_per_adverse_event)?;

    let turnover_rate = inputs.baseline_turnover_percent / 100.0;
    let categories = vec![
        TURNOVER.apply(turnover_rate, inputs.headcount, inputs.cost_per_turnover),
        ORIENTATION.apply(turnover_rate, inputs.headcount, inputs.orientation_cost_per_hire),
        ADVERSE_EVENTS.apply(
            inputs.baseline_adverse_event_rate,
            inputs.headcount,
            inputs.cost_per_adverse_event,
        ),
    ];

    let base: f64 = categories.iter().map(|category| category.savings).sum();
    log::debug!("ROI estimate: base savings {base:.2}/yr");

    Ok(RoiEstimate {
        categories,
        confidence: ConfidenceRange {
            low: base * CONSERVATIVE_MULTIPLIER,
            base,
            high: base * OPTIMISTIC_MULTIPLIER,
        },
    })
}

/// Accumulates ramped base-case savings against an up-front investment and
/// a recurring annual cost.
pub fn project_roi_timeline(
    estimate: &RoiEstimate,
    investment: f64,
    annual_cost: f64,
    years: u32,
) -> Result<RoiTimeline, ValidationError> {
    let investment = require_non_negative("investment", investment)?;
    let annual_cost = require_non_negative("annual_cost", annual_cost)?;

    let mut cumulative_savings = 0.0;
    let mut cumulative_cost = investment;
    let mut payback_year = None;
    let mut timeline = Vec::with_capacity(years as usize);

    for year in 1..=years {
        let ramp = RAMP_UP[(year as usize - 1).min(RAMP_UP.len() - 1)];
        let savings = estimate.confidence.base * ramp;
        cumulative_savings += savings;
        cumulative_cost += annual_cost;
        let net_position = cumulative_savings - cumulative_cost;
        if payback_year.is_none() && net_position >= 0.0 {
            payback_year = Some(year);
        }
        timeline.push(RoiTimelineYear {
            year,
            ramp,
            savings,
            cumulative_savings,
            cumulative_cost,
            net_position,
        });
    }

    let roi_percent = if cumulative_cost > 0.0 {
        (cumulative_savings - cumulative_cost) / cumulative_cost * 100.0
    } else {
        0.0
    };

    Ok(RoiTimeline {
        years: timeline,
        payback_year,
        roi_percent,
    })
}

/// Splits base savings across the physical assets of a budget in
/// proportion to their CAPEX.
pub fn attribute_savings_to_assets(
    estimate: &RoiEstimate,
    budget: &BudgetResults,
) -> Vec<AssetAttribution> {
    let assets: Vec<_> = budget
        .capex
        .line_items
        .iter()
        .filter(|item| ASSET_LINE_IDS.contains(&item.id.as_str()))
        .collect();
    let asset_total: f64 = assets.iter().map(|item| item.amount).sum();

    assets
        .into_iter()
        .map(|item| {
            let share = if asset_total > 0.0 {
                item.amount / asset_total
            } else {
                0.0
            };
            let attributed_savings = estimate.confidence.base * share;
            AssetAttribution {
                asset_id: item.id.clone(),
                asset: item.category.clone(),
                capex: item.amount,
                share,
                attributed_savings,
                savings_to_cost_ratio: if item.amount > 0.0 {
                    attributed_savings / item.amount
                } else {
                    0.0
                },
            }
        })
        .collect()
}

/// Prices the payback timeline with the budget's net CAPEX as the up-front
/// investment and its annual OPEX as the recurring cost.
pub fn build_roi_report(
    inputs: &OrganizationalInputs,
    budget: &BudgetResults,
    years: u32,
) -> Result<RoiReport, ValidationError> {
    let estimate = estimate_roi(inputs)?;
    let timeline = project_roi_timeline(&estimate, budget.capex.net, budget.opex.annual, years)?;
    let assets = attribute_savings_to_assets(&estimate, budget);
    Ok(RoiReport {
        estimate,
        timeline,
        assets,
    })
}
