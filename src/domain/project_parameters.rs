use serde::{Deserialize, Serialize};

use crate::domain::facility::{ConstructionType, CostRegion, QualityLevel};
use crate::domain::validation::{require_non_negative, ValidationError};

/// Facility shape fed to the CAPEX calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectParameters {
    pub floor_area: f64,
    pub sim_rooms: u32,
    pub control_rooms: u32,
    pub debrief_rooms: u32,
    pub support_rooms: u32,
    pub construction_type: ConstructionType,
    pub cost_region: CostRegion,
    pub quality_level: QualityLevel,
}

impl Default for ProjectParameters {
    fn default() -> Self {
        Self {
            floor_area: 4000.0,
            sim_rooms: 3,
            control_rooms: 1,
            debrief_rooms: 2,
            support_rooms: 2,
            construction_type: ConstructionType::HospitalRenovation,
            cost_region: CostRegion::ModerateCost,
            quality_level: QualityLevel::Standard,
        }
    }
}

impl ProjectParameters {
    /// Summed as `f64` so arbitrarily large counts cannot overflow.
    pub fn total_rooms(&self) -> f64 {
        self.instrumented_rooms() + f64::from(self.support_rooms)
    }

    /// Rooms that receive A/V rough-in (support spaces do not).
    pub fn instrumented_rooms(&self) -> f64 {
        f64::from(self.sim_rooms) + f64::from(self.control_rooms) + f64::from(self.debrief_rooms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_negative("floor_area", self.floor_area)?;
        Ok(())
    }
}
