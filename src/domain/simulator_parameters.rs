use serde::{Deserialize, Serialize};

use crate::domain::facility::{AvTier, CostRegion, OpexModel, QualityLevel};
use crate::domain::validation::{require_non_negative, ValidationError};

/// Full input record of the budget simulator. Every change produces a new
/// value; the calculators only ever borrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorParameters {
    pub floor_area: f64,
    pub sim_rooms: u32,
    pub control_rooms: u32,
    pub debrief_rooms: u32,
    pub high_fidelity_manikins: u32,
    pub task_trainers: u32,
    pub av_tier: AvTier,
    pub core_fte: f64,
    pub faculty_allocation_percent: f64,
    pub training_hours_per_year: f64,
    pub sessions_per_month: u32,
    pub opex_model: OpexModel,
    pub growth_rate_percent: f64,
    pub inflation_percent: f64,
    pub quality_level: QualityLevel,
    pub cost_region: CostRegion,
    pub contingency_percent: f64,
    pub refresh_reserve_percent: f64,
}

impl Default for SimulatorParameters {
    /// The "Base Case" configuration.
    fn default() -> Self {
        Self {
            floor_area: 4000.0,
            sim_rooms: 3,
            control_rooms: 1,
            debrief_rooms: 2,
            high_fidelity_manikins: 4,
            task_trainers: 12,
            av_tier: AvTier::Standard,
            core_fte: 2.5,
            faculty_allocation_percent: 10.0,
            training_hours_per_year: 40.0,
            sessions_per_month: 120,
            opex_model: OpexModel::RoomBased,
            growth_rate_percent: 5.0,
            inflation_percent: 3.0,
            quality_level: QualityLevel::Standard,
            cost_region: CostRegion::ModerateCost,
            contingency_percent: 10.0,
            refresh_reserve_percent: 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterBound {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterBound {
    const fn new(field: &'static str, min: f64, max: f64, step: f64) -> Self {
        Self {
            field,
            min,
            max,
            step,
        }
    }

    fn clamp_f64(&self, value: f64, moved: &mut Vec<&'static str>) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        if clamped != value && !value.is_nan() {
            moved.push(self.field);
        }
        clamped
    }

    fn clamp_u32(&self, value: u32, moved: &mut Vec<&'static str>) -> u32 {
        let clamped = value.clamp(self.min as u32, self.max as u32);
        if clamped != value {
            moved.push(self.field);
        }
        clamped
    }
}

pub const FLOOR_AREA: ParameterBound = ParameterBound::new("floor_area", 2000.0, 10000.0, 500.0);
pub const SIM_ROOMS: ParameterBound = ParameterBound::new("sim_rooms", 1.0, 8.0, 1.0);
pub const CONTROL_ROOMS: ParameterBound = ParameterBound::new("control_rooms", 1.0, 4.0, 1.0);
pub const DEBRIEF_ROOMS: ParameterBound = ParameterBound::new("debrief_rooms", 1.0, 6.0, 1.0);
pub const MANIKINS: ParameterBound =
    ParameterBound::new("high_fidelity_manikins", 0.0, 12.0, 1.0);
pub const TASK_TRAINERS: ParameterBound = ParameterBound::new("task_trainers", 0.0, 40.0, 1.0);
pub const CORE_FTE: ParameterBound = ParameterBound::new("core_fte", 0.5, 10.0, 0.5);
pub const FACULTY_ALLOCATION: ParameterBound =
    ParameterBound::new("faculty_allocation_percent", 0.0, 50.0, 5.0);
pub const TRAINING_HOURS: ParameterBound =
    ParameterBound::new("training_hours_per_year", 0.0, 200.0, 10.0);
pub const SESSIONS_PER_MONTH: ParameterBound =
    ParameterBound::new("sessions_per_month", 0.0, 400.0, 10.0);
pub const GROWTH_RATE: ParameterBound = ParameterBound::new("growth_rate_percent", 0.0, 15.0, 1.0);
pub const INFLATION: ParameterBound = ParameterBound::new("inflation_percent", 0.0, 10.0, 0.5);
pub const CONTINGENCY: ParameterBound = ParameterBound::new("contingency_percent", 5.0, 20.0, 1.0);
pub const REFRESH_RESERVE: ParameterBound =
    ParameterBound::new("refresh_reserve_percent", 10.0, 25.0, 1.0);

/// Slider bounds for every numeric knob, in display order.
pub const PARAMETER_BOUNDS: [ParameterBound; 14] = [
    FLOOR_AREA,
    SIM_ROOMS,
    CONTROL_ROOMS,
    DEBRIEF_ROOMS,
    MANIKINS,
    TASK_TRAINERS,
    CORE_FTE,
    FACULTY_ALLOCATION,
    TRAINING_HOURS,
    SESSIONS_PER_MONTH,
    GROWTH_RATE,
    INFLATION,
    CONTINGENCY,
    REFRESH_RESERVE,
];

/// A partial edit. Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterUpdate {
    pub floor_area: Option<f64>,
    pub sim_rooms: Option<u32>,
    pub control_rooms: Option<u32>,
    pub debrief_rooms: Option<u32>,
    pub high_fidelity_manikins: Option<u32>,
    pub task_trainers: Option<u32>,
    pub av_tier: Option<AvTier>,
    pub core_fte: Option<f64>,
    pub faculty_allocation_percent: Option<f64>,
    pub training_hours_per_year: Option<f64>,
    pub sessions_per_month: Option<u32>,
    pub opex_model: Option<OpexModel>,
    pub growth_rate_percent: Option<f64>,
    pub inflation_percent: Option<f64>,
    pub quality_level: Option<QualityLevel>,
    pub cost_region: Option<CostRegion>,
    pub contingency_percent: Option<f64>,
    pub refresh_reserve_percent: Option<f64>,
}

macro_rules! apply_update {
    ($target:ident, $update:ident, $($field:ident),* $(,)?) => {
        $(
            if let Some(value) = $update.$field {
                $target.$field = value;
            }
        )*
    };
}

impl SimulatorParameters {
    /// Returns a copy with the fields named in `update` replaced.
    pub fn updated(&self, update: &ParameterUpdate) -> Self {
        let mut next = self.clone();
        apply_update!(
            next,
            update,
            floor_area,
            sim_rooms,
            control_rooms,
            debrief_rooms,
            high_fidelity_manikins,
            task_trainers,
            av_tier,
            core_fte,
            faculty_allocation_percent,
            training_hours_per_year,
            sessions_per_month,
            opex_model,
            growth_rate_percent,
            inflation_percent,
            quality_level,
            cost_region,
            contingency_percent,
            refresh_reserve_percent,
        );
        next
    }

    /// Pulls every numeric field into its slider bounds. Returns the new
    /// value and the names of the fields that moved.
    pub fn clamped(&self) -> (Self, Vec<&'static str>) {
        let mut moved = Vec::new();
        let clamped = Self {
            floor_area: FLOOR_AREA.clamp_f64(self.floor_area, &mut moved),
            sim_rooms: SIM_ROOMS.clamp_u32(self.sim_rooms, &mut moved),
            control_rooms: CONTROL_ROOMS.clamp_u32(self.control_rooms, &mut moved),
            debrief_rooms: DEBRIEF_ROOMS.clamp_u32(self.debrief_rooms, &mut moved),
            high_fidelity_manikins: MANIKINS.clamp_u32(self.high_fidelity_manikins, &mut moved),
            task_trainers: TASK_TRAINERS.clamp_u32(self.task_trainers, &mut moved),
            av_tier: self.av_tier,
            core_fte: CORE_FTE.clamp_f64(self.core_fte, &mut moved),
            faculty_allocation_percent: FACULTY_ALLOCATION
                .clamp_f64(self.faculty_allocation_percent, &mut moved),
            training_hours_per_year: TRAINING_HOURS
                .clamp_f64(self.training_hours_per_year, &mut moved),
            sessions_per_month: SESSIONS_PER_MONTH.clamp_u32(self.sessions_per_month, &mut moved),
            opex_model: self.opex_model,
            growth_rate_percent: GROWTH_RATE.clamp_f64(self.growth_rate_percent, &mut moved),
            inflation_percent: INFLATION.clamp_f64(self.inflation_percent, &mut moved),
            quality_level: self.quality_level,
            cost_region: self.cost_region,
            contingency_percent: CONTINGENCY.clamp_f64(self.contingency_percent, &mut moved),
            refresh_reserve_percent: REFRESH_RESERVE
                .clamp_f64(self.refresh_reserve_percent, &mut moved),
        };
        (clamped, moved)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_negative("floor_area", self.floor_area)?;
        require_non_negative("core_fte", self.core_fte)?;
        require_non_negative("faculty_allocation_percent", self.faculty_allocation_percent)?;
        require_non_negative("training_hours_per_year", self.training_hours_per_year)?;
        require_non_negative("growth_rate_percent", self.growth_rate_percent)?;
        require_non_negative("inflation_percent", self.inflation_percent)?;
        require_non_negative("contingency_percent", self.contingency_percent)?;
        require_non_negative("refresh_reserve_percent", self.refresh_reserve_percent)?;
        Ok(())
    }

    /// Summed as `f64` so arbitrarily large counts cannot overflow.
    pub fn total_rooms(&self) -> f64 {
        f64::from(self.sim_rooms) + f64::from(self.control_rooms) + f64::from(self.debrief_rooms)
    }

    pub fn annual_sessions(&self) -> f64 {
        f64::from(self.sessions_per_month) * 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updated_replaces_only_named_fields_and_leaves_input_untouched() {
        let base = SimulatorParameters::default();
        let update = ParameterUpdate {
            sim_rooms: Some(5),
            av_tier: Some(AvTier::Premium),
            ..ParameterUpdate::default()
        };

        let next = base.updated(&update);

        assert_eq!(next.sim_rooms, 5);
        assert_eq!(next.av_tier, AvTier::Premium);
        assert_eq!(next.floor_area, base.floor_area);
        assert_eq!(base, SimulatorParameters::default());
    }

    #[test]
    fn clamped_reports_fields_outside_their_bounds() {
        let params = SimulatorParameters {
            floor_area: 12000.0,
            contingency_percent: 2.0,
            sim_rooms: 0,
            ..SimulatorParameters::default()
        };

        let (clamped, moved) = params.clamped();

        assert_eq!(clamped.floor_area, 10000.0);
        assert_eq!(clamped.contingency_percent, 5.0);
        assert_eq!(clamped.sim_rooms, 1);
        assert_eq!(moved, vec!["floor_area", "sim_rooms", "contingency_percent"]);
    }

    #[test]
    fn total_rooms_does_not_overflow_at_the_count_limit() {
        let params = SimulatorParameters {
            sim_rooms: u32::MAX,
            control_rooms: u32::MAX,
            ..SimulatorParameters::default()
        };
        assert_eq!(params.total_rooms(), 2.0 * f64::from(u32::MAX) + 2.0);
    }

    #[test]
    fn base_case_is_already_within_bounds() {
        let (clamped, moved) = SimulatorParameters::default().clamped();
        assert!(moved.is_empty());
        assert_eq!(clamped, SimulatorParameters::default());
    }

    #[test]
    fn update_yaml_rejects_unknown_fields() {
        let result: Result<ParameterUpdate, _> = serde_yaml::from_str("sim_room: 4\n");
        assert!(result.is_err());
    }

    #[test]
    fn validate_names_the_offending_field() {
        let params = SimulatorParameters {
            inflation_percent: f64::NAN,
            ..SimulatorParameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(ValidationError::NonFinite {
                field: "inflation_percent"
            })
        );
    }

    #[test]
    fn every_bound_has_min_below_max() {
        for bound in PARAMETER_BOUNDS {
            assert!(bound.min < bound.max, "{} has inverted bounds", bound.field);
            assert!(bound.step > 0.0);
        }
    }
}
