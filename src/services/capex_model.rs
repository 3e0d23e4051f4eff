use serde::Serialize;

use crate::domain::cost::{sum_line_items, CostLineItem};
use crate::domain::facility::{ConstructionType, CostRegion, QualityLevel};
use crate::domain::project_parameters::ProjectParameters;
use crate::domain::validation::ValidationError;
use crate::services::cost_model_types::{BenchmarkPosition, CapexResult};
use crate::services::currency_format::{format_currency, round_to_dollar};

pub const CONTINGENCY_PERCENT: f64 = 5.0;
pub const SOFT_COST_PERCENT: f64 = 12.0;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkRange {
    pub low: f64,
    pub high: f64,
}

/// Published range for hospital-based simulation centers, in $/sf.
pub const INDUSTRY_COST_PER_SF: BenchmarkRange = BenchmarkRange {
    low: 300.0,
    high: 600.0,
};

#[derive(Debug, Clone, Copy)]
enum Driver {
    FloorArea,
    SimRooms,
    ControlRooms,
    DebriefRooms,
    SupportRooms,
    InstrumentedRooms,
}

struct Category {
    id: &'static str,
    name: &'static str,
    driver: Driver,
    rate: f64,
    quality_sensitive: bool,
}

const CATEGORIES: [Category; 9] = [
    Category {
        id: "demolition",
        name: "Selective Demolition & Abatement",
        driver: Driver::FloorArea,
        rate: 12.0,
        quality_sensitive: false,
    },
    Category {
        id: "mep",
        name: "MEP Infrastructure",
        driver: Driver::FloorArea,
        rate: 85.0,
        quality_sensitive: false,
    },
    Category {
        id: "finishes",
        name: "Interior Finishes",
        driver: Driver::FloorArea,
        rate: 45.0,
        quality_sensitive: true,
    },
    Category {
        id: "simulation-rooms",
        name: "Simulation Room Build-out",
        driver: Driver::SimRooms,
        rate: 65_000.0,
        quality_sensitive: true,
    },
    Category {
        id: "control-rooms",
        name: "Control Room Build-out",
        driver: Driver::ControlRooms,
        rate: 40_000.0,
        quality_sensitive: true,
    },
    Category {
        id: "debrief-rooms",
        name: "Debriefing Room Build-out",
        driver: Driver::DebriefRooms,
        rate: 25_000.0,
        quality_sensitive: true,
    },
    Category {
        id: "support-spaces",
        name: "Support Space Build-out",
        driver: Driver::SupportRooms,
        rate: 15_000.0,
        quality_sensitive: true,
    },
    Category {
        id: "av-rough-in",
        name: "A/V Infrastructure Rough-in",
        driver: Driver::InstrumentedRooms,
        rate: 18_000.0,
        quality_sensitive: false,
    },
    Category {
        id: "furniture",
        name: "Furniture, Fixtures & Equipment",
        driver: Driver::FloorArea,
        rate: 20.0,
        quality_sensitive: true,
    },
];

fn construction_multiplier(construction_type: ConstructionType) -> f64 {
    match construction_type {
        ConstructionType::HospitalRenovation => 1.15,
        ConstructionType::CleanShell => 1.0,
    }
}

fn region_multiplier(region: CostRegion) -> f64 {
    match region {
        CostRegion::LowCost => 0.85,
        CostRegion::ModerateCost => 1.0,
        CostRegion::HighCost => 1.30,
    }
}

fn quality_multiplier(quality: QualityLevel) -> f64 {
    match quality {
        QualityLevel::Budget => 0.85,
        QualityLevel::Standard => 1.0,
        QualityLevel::Premium => 1.25,
    }
}

impl Driver {
    fn quantity(&self, params: &ProjectParameters) -> f64 {
        match self {
            Driver::FloorArea => params.floor_area,
            Driver::SimRooms => f64::from(params.sim_rooms),
            Driver::ControlRooms => f64::from(params.control_rooms),
            Driver::DebriefRooms => f64::from(params.debrief_rooms),
            Driver::SupportRooms => f64::from(params.support_rooms),
            Driver::InstrumentedRooms => params.instrumented_rooms(),
        }
    }

    fn unit(&self) -> &'static str {
        match self {
            Driver::FloorArea => "sf",
            _ => "rooms",
        }
    }
}

/// Computes the weighted CAPEX breakdown for one facility configuration.
///
/// `total_project_cost` is always `sum(line_items) + contingency`.
pub fn calculate_capex(params: &ProjectParameters) -> Result<CapexResult, ValidationError> {
    params.validate()?;

    let construction = construction_multiplier(params.construction_type);
    let region = region_multiplier(params.cost_region);
    let quality = quality_multiplier(params.quality_level);

    let mut line_items: Vec<CostLineItem> = CATEGORIES
        .iter()
        .map(|category| {
            let quantity = category.driver.quantity(params);
            let adjusted = quantity * category.rate * construction * region;
            let amount = if category.quality_sensitive {
                adjusted * quality
            } else {
                adjusted
            };
            let basis = format!(
                "{quantity} {} x {}",
                category.driver.unit(),
                format_currency(category.rate)
            );
            CostLineItem::new(category.id, category.name, amount, basis)
                .with_notes(&adjustment_note(params, category.quality_sensitive))
        })
        .collect();

    let hard_costs = sum_line_items(&line_items);
    line_items.push(CostLineItem::new(
        "soft-costs",
        "Design & Professional Fees",
        hard_costs * (SOFT_COST_PERCENT / 100.0),
        format!("{SOFT_COST_PERCENT}% of hard costs"),
    ));

    let subtotal = sum_line_items(&line_items);
    let contingency = subtotal * (CONTINGENCY_PERCENT / 100.0);
    let total_project_cost = subtotal + contingency;

    let cost_per_square_foot = if params.floor_area > 0.0 {
        round_to_dollar(total_project_cost / params.floor_area)
    } else {
        0.0
    };
    let total_rooms = params.total_rooms();
    let cost_per_room = if total_rooms > 0.0 {
        total_project_cost / total_rooms
    } else {
        0.0
    };

    log::debug!(
        "CAPEX model: {} sf, {total_rooms} rooms => total {total_project_cost:.2}",
        params.floor_area
    );

    Ok(CapexResult {
        line_items,
        subtotal,
        contingency,
        total_project_cost,
        cost_per_square_foot,
        cost_per_room,
        benchmark: benchmark_cost_per_square_foot(cost_per_square_foot),
    })
}

pub fn benchmark_cost_per_square_foot(cost_per_square_foot: f64) -> BenchmarkPosition {
    if cost_per_square_foot < INDUSTRY_COST_PER_SF.low {
        BenchmarkPosition::BelowRange
    } else if cost_per_square_foot > INDUSTRY_COST_PER_SF.high {
        BenchmarkPosition::AboveRange
    } else {
        BenchmarkPosition::WithinRange
    }
}

fn adjustment_note(params: &ProjectParameters, quality_sensitive: bool) -> String {
    let mut note = format!(
        "{} x{:.2}, {} x{:.2}",
        params.construction_type,
        construction_multiplier(params.construction_type),
        params.cost_region,
        region_multiplier(params.cost_region)
    );
    if quality_sensitive {
        note.push_str(&format!(
            ", {} x{:.2}",
            params.quality_level,
            quality_multiplier(params.quality_level)
        ));
    }
    note
}
