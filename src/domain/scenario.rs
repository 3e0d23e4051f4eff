use serde::{Deserialize, Serialize};

use crate::domain::facility::{AvTier, CostRegion, OpexModel, QualityLevel};
use crate::domain::simulator_parameters::{ParameterUpdate, SimulatorParameters};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    pub parameters: SimulatorParameters,
}

impl Scenario {
    /// Builds a scenario from a partial edit of the Base Case.
    pub fn from_update(id: &str, name: &str, description: &str, update: &ParameterUpdate) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            parameters: SimulatorParameters::default().updated(update),
        }
    }
}

pub fn base_case() -> Scenario {
    Scenario::from_update(
        "base-case",
        "Base Case",
        "Recommended configuration: three simulation rooms, standard A/V, moderate-cost region.",
        &ParameterUpdate::default(),
    )
}

pub fn preset_scenarios() -> Vec<Scenario> {
    vec![
        base_case(),
        Scenario::from_update(
            "minimal-viable",
            "Minimal Viable Center",
            "Smallest footprint that still supports in-situ and lab-based simulation.",
            &ParameterUpdate {
                floor_area: Some(2500.0),
                sim_rooms: Some(2),
                control_rooms: Some(1),
                debrief_rooms: Some(1),
                high_fidelity_manikins: Some(2),
                task_trainers: Some(6),
                av_tier: Some(AvTier::Basic),
                core_fte: Some(1.5),
                faculty_allocation_percent: Some(5.0),
                sessions_per_month: Some(60),
                quality_level: Some(QualityLevel::Budget),
                refresh_reserve_percent: Some(10.0),
                ..ParameterUpdate::default()
            },
        ),
        Scenario::from_update(
            "premium-flagship",
            "Premium Flagship",
            "Regional flagship center in a high-cost market with premium finishes and A/V.",
            &ParameterUpdate {
                floor_area: Some(8000.0),
                sim_rooms: Some(6),
                control_rooms: Some(2),
                debrief_rooms: Some(4),
                high_fidelity_manikins: Some(8),
                task_trainers: Some(24),
                av_tier: Some(AvTier::Premium),
                core_fte: Some(5.0),
                faculty_allocation_percent: Some(15.0),
                sessions_per_month: Some(240),
                quality_level: Some(QualityLevel::Premium),
                cost_region: Some(CostRegion::HighCost),
                contingency_percent: Some(15.0),
                refresh_reserve_percent: Some(20.0),
                ..ParameterUpdate::default()
            },
        ),
        Scenario::from_update(
            "growth-focused",
            "Growth Focused",
            "Base Case facility run on a per-session operating model with aggressive volume growth.",
            &ParameterUpdate {
                sessions_per_month: Some(200),
                opex_model: Some(OpexModel::SessionsBased),
                growth_rate_percent: Some(10.0),
                ..ParameterUpdate::default()
            },
        ),
    ]
}
