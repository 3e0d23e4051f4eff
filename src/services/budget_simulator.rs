use crate::domain::cost::{sum_line_items, CostLineItem};
use crate::domain::facility::{AvTier, CostRegion, OpexModel, QualityLevel};
use crate::domain::simulator_parameters::SimulatorParameters;
use crate::domain::validation::ValidationError;
use crate::services::cost_model_types::{
    BudgetResults, CapexSummary, FiveYearProjection, OpexSummary, ProjectionYear, UnitMetrics,
};
use crate::services::currency_format::format_currency;

pub const CONSTRUCTION_COST_PER_SF: f64 = 350.0;
pub const SIM_ROOM_FITOUT: f64 = 50_000.0;
pub const CONTROL_ROOM_FITOUT: f64 = 30_000.0;
pub const DEBRIEF_ROOM_FITOUT: f64 = 20_000.0;
pub const MANIKIN_UNIT_PRICE: f64 = 85_000.0;
pub const TASK_TRAINER_UNIT_PRICE: f64 = 8_500.0;
pub const AV_BASE_COST_PER_ROOM: f64 = 45_000.0;
pub const SOFT_COST_PERCENT: f64 = 15.0;
/// Manikins and trainers the hospital already owns and will transfer in.
pub const EXISTING_ASSET_CREDIT: f64 = 250_000.0;

pub const LOADED_COST_PER_FTE: f64 = 95_000.0;
pub const FACULTY_POOL_SIZE: f64 = 20.0;
pub const FACULTY_LOADED_COST: f64 = 120_000.0;

pub const LEARNERS_PER_SESSION: f64 = 6.0;
pub const SESSION_HOURS: f64 = 2.0;
pub const PROJECTION_YEARS: u32 = 5;

struct UsageRates {
    maintenance: f64,
    consumables: f64,
    utilities: f64,
}

const PER_ROOM: UsageRates = UsageRates {
    maintenance: 12_000.0,
    consumables: 15_000.0,
    utilities: 6_000.0,
};

const PER_SESSION: UsageRates = UsageRates {
    maintenance: 40.0,
    consumables: 125.0,
    utilities: 20.0,
};

/// How an OPEX line grows across the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CostDriver {
    Inflation,
    SessionGrowth,
}

fn quality_multiplier(quality: QualityLevel) -> f64 {
    match quality {
        QualityLevel::Budget => 0.85,
        QualityLevel::Standard => 1.0,
        QualityLevel::Premium => 1.20,
    }
}

fn region_multiplier(region: CostRegion) -> f64 {
    match region {
        CostRegion::LowCost => 0.85,
        CostRegion::ModerateCost => 1.0,
        CostRegion::HighCost => 1.30,
    }
}

fn av_tier_multiplier(tier: AvTier) -> f64 {
    match tier {
        AvTier::Basic => 0.6,
        AvTier::Standard => 1.0,
        AvTier::Premium => 1.6,
    }
}

fn software_licensing(tier: AvTier) -> f64 {
    match tier {
        AvTier::Basic => 15_000.0,
        AvTier::Standard => 35_000.0,
        AvTier::Premium => 60_000.0,
    }
}

/// Runs the full budget model. Every call recomputes from scratch, so equal
/// parameters always give equal results.
pub fn compute_budget(params: &SimulatorParameters) -> Result<BudgetResults, ValidationError> {
    params.validate()?;

    let capex = compute_capex(params);
    let (opex, drivers) = compute_opex(params, capex.equipment);
    let five_year = project_five_years(params, &capex, &opex, &drivers);
    let metrics = unit_metrics(params, &capex, &opex);

    log::debug!(
        "budget: capex net {:.2}, opex {:.2}/yr, five-year {:.2}",
        capex.net,
        opex.annual,
        five_year.total_cost
    );

    Ok(BudgetResults {
        capex,
        opex,
        five_year,
        metrics,
    })
}

fn compute_capex(params: &SimulatorParameters) -> CapexSummary {
    let building = params.floor_area * CONSTRUCTION_COST_PER_SF
        + f64::from(params.sim_rooms) * SIM_ROOM_FITOUT
        + f64::from(params.control_rooms) * CONTROL_ROOM_FITOUT
        + f64::from(params.debrief_rooms) * DEBRIEF_ROOM_FITOUT;
    let construction = building
        * quality_multiplier(params.quality_level)
        * region_multiplier(params.cost_region);

    let equipment = f64::from(params.high_fidelity_manikins) * MANIKIN_UNIT_PRICE
        + f64::from(params.task_trainers) * TASK_TRAINER_UNIT_PRICE;

    let rooms = params.total_rooms();
    let av_system = rooms * AV_BASE_COST_PER_ROOM * av_tier_multiplier(params.av_tier);

    let soft_costs = (construction + equipment + av_system) * (SOFT_COST_PERCENT / 100.0);
    let subtotal = construction + equipment + av_system + soft_costs;
    let contingency = subtotal * (params.contingency_percent / 100.0);

    let line_items = vec![
        CostLineItem::new(
            "construction",
            "Construction & Renovation",
            construction,
            format!(
                "{} sf x {} plus room fit-out, {} quality, {}",
                params.floor_area,
                format_currency(CONSTRUCTION_COST_PER_SF),
                params.quality_level,
                params.cost_region
            ),
        ),
        CostLineItem::new(
            "equipment",
            "Simulation Equipment",
            equipment,
            format!(
                "{} manikins x {}, {} task trainers x {}",
                params.high_fidelity_manikins,
                format_currency(MANIKIN_UNIT_PRICE),
                params.task_trainers,
                format_currency(TASK_TRAINER_UNIT_PRICE)
            ),
        ),
        CostLineItem::new(
            "av-system",
            "A/V Recording & Debrief System",
            av_system,
            format!(
                "{rooms} rooms x {}, {} tier",
                format_currency(AV_BASE_COST_PER_ROOM),
                params.av_tier
            ),
        ),
        CostLineItem::new(
            "soft-costs",
            "Soft Costs (design, permits, PM)",
            soft_costs,
            format!("{SOFT_COST_PERCENT}% of construction, equipment and A/V"),
        ),
        CostLineItem::new(
            "contingency",
            "Contingency",
            contingency,
            format!("{}% of subtotal", params.contingency_percent),
        ),
    ];

    let total = sum_line_items(&line_items);
    let existing_credits = EXISTING_ASSET_CREDIT.min(total);

    CapexSummary {
        construction,
        equipment,
        av_system,
        soft_costs,
        contingency,
        existing_credits,
        net: total - existing_credits,
        total,
        line_items,
    }
}

fn compute_opex(params: &SimulatorParameters, equipment: f64) -> (OpexSummary, Vec<CostDriver>) {
    let annual_sessions = params.annual_sessions();
    let (usage_quantity, rates, usage_driver, usage_basis) = match params.opex_model {
        OpexModel::RoomBased => (
            params.total_rooms(),
            PER_ROOM,
            CostDriver::Inflation,
            "rooms",
        ),
        OpexModel::SessionsBased => (
            annual_sessions,
            PER_SESSION,
            CostDriver::SessionGrowth,
            "sessions/yr",
        ),
    };

    let staffing = params.core_fte * LOADED_COST_PER_FTE
        + FACULTY_POOL_SIZE * (params.faculty_allocation_percent / 100.0) * FACULTY_LOADED_COST;
    let maintenance = usage_quantity * rates.maintenance;
    let consumables = usage_quantity * rates.consumables;
    let software = software_licensing(params.av_tier);
    let utilities = usage_quantity * rates.utilities;
    let refresh = equipment * (params.refresh_reserve_percent / 100.0);

    let usage_text = |rate: f64| {
        format!("{usage_quantity} {usage_basis} x {}", format_currency(rate))
    };
    let lines = vec![
        (
            CostLineItem::new(
                "staffing",
                "Staffing",
                staffing,
                format!(
                    "{} FTE x {}, {}% of {FACULTY_POOL_SIZE} faculty x {}",
                    params.core_fte,
                    format_currency(LOADED_COST_PER_FTE),
                    params.faculty_allocation_percent,
                    format_currency(FACULTY_LOADED_COST)
                ),
            ),
            CostDriver::Inflation,
        ),
        (
            CostLineItem::new(
                "maintenance",
                "Maintenance & Service Contracts",
                maintenance,
                usage_text(rates.maintenance),
            ),
            usage_driver,
        ),
        (
            CostLineItem::new(
                "consumables",
                "Consumables & Supplies",
                consumables,
                usage_text(rates.consumables),
            ),
            CostDriver::SessionGrowth,
        ),
        (
            CostLineItem::new(
                "software",
                "Software Licensing",
                software,
                format!("{} tier", params.av_tier),
            ),
            CostDriver::Inflation,
        ),
        (
            CostLineItem::new("utilities", "Utilities", utilities, usage_text(rates.utilities)),
            usage_driver,
        ),
        (
            CostLineItem::new(
                "refresh",
                "Equipment Refresh Reserve",
                refresh,
                format!("{}% of equipment", params.refresh_reserve_percent),
            ),
            CostDriver::Inflation,
        ),
    ];

    let (line_items, drivers): (Vec<CostLineItem>, Vec<CostDriver>) = lines.into_iter().unzip();
    let annual = sum_line_items(&line_items);

    let opex = OpexSummary {
        staffing,
        maintenance,
        consumables,
        software,
        utilities,
        refresh,
        annual,
        monthly: annual / 12.0,
        line_items,
    };
    (opex, drivers)
}

fn project_five_years(
    params: &SimulatorParameters,
    capex: &CapexSummary,
    opex: &OpexSummary,
    drivers: &[CostDriver],
) -> FiveYearProjection {
    let annual_sessions = params.annual_sessions();
    let inflation_step = 1.0 + params.inflation_percent / 100.0;
    let growth_step = 1.0 + params.growth_rate_percent / 100.0;

    let mut inflation_factor = 1.0;
    let mut growth_factor = 1.0;
    let mut year_by_year = Vec::with_capacity(PROJECTION_YEARS as usize);

    for year in 1..=PROJECTION_YEARS {
        let year_opex: f64 = opex
            .line_items
            .iter()
            .zip(drivers)
            .map(|(item, driver)| match driver {
                CostDriver::Inflation => item.amount * inflation_factor,
                CostDriver::SessionGrowth => item.amount * growth_factor,
            })
            .sum();
        let year_capex = if year == 1 { capex.net } else { 0.0 };
        let sessions_per_year = annual_sessions * growth_factor;

        year_by_year.push(ProjectionYear {
            year,
            capex: year_capex,
            opex: year_opex,
            total: year_capex + year_opex,
            sessions_per_year,
            cost_per_session: per_unit(year_opex, sessions_per_year),
        });

        inflation_factor *= inflation_step;
        growth_factor *= growth_step;
    }

    let total_capex: f64 = year_by_year.iter().map(|year| year.capex).sum();
    let total_opex: f64 = year_by_year.iter().map(|year| year.opex).sum();

    FiveYearProjection {
        year_by_year,
        total_capex,
        total_opex,
        total_cost: total_capex + total_opex,
    }
}

fn unit_metrics(
    params: &SimulatorParameters,
    capex: &CapexSummary,
    opex: &OpexSummary,
) -> UnitMetrics {
    let annual_sessions = params.annual_sessions();
    let learner_hours = annual_sessions * LEARNERS_PER_SESSION * SESSION_HOURS;

    UnitMetrics {
        annual_sessions,
        cost_per_session: per_unit(opex.annual, annual_sessions),
        cost_per_learner_hour: per_unit(opex.annual, learner_hours),
        cost_per_sf: per_unit(capex.net + opex.annual, params.floor_area),
        staff_training_hours: params.core_fte * params.training_hours_per_year,
    }
}

/// Division guarded against empty denominators: 0 instead of NaN/inf.
fn per_unit(amount: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        amount / denominator
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::currency_format::round_to_cents;

    fn base() -> SimulatorParameters {
        SimulatorParameters::default()
    }

    #[test]
    fn base_case_five_year_total_matches_recorded_value() {
        let results = compute_budget(&base()).unwrap();
        assert_eq!(round_to_cents(results.five_year.total_cost), 6_843_601.29);
    }

    #[test]
    fn base_case_capex_breakdown() {
        let capex = compute_budget(&base()).unwrap().capex;
        assert_eq!(capex.construction, 1_620_000.0);
        assert_eq!(capex.equipment, 442_000.0);
        assert_eq!(capex.av_system, 270_000.0);
        assert_eq!(capex.soft_costs, 349_800.0);
        assert_eq!(capex.contingency, 268_180.0);
        assert_eq!(capex.total, 2_949_980.0);
        assert_eq!(capex.existing_credits, 250_000.0);
        assert_eq!(capex.net, 2_699_980.0);
    }

    #[test]
    fn base_case_opex_breakdown() {
        let opex = compute_budget(&base()).unwrap().opex;
        assert_eq!(opex.staffing, 477_500.0);
        assert_eq!(opex.maintenance, 72_000.0);
        assert_eq!(opex.consumables, 90_000.0);
        assert_eq!(opex.software, 35_000.0);
        assert_eq!(opex.utilities, 36_000.0);
        assert_eq!(opex.refresh, 66_300.0);
        assert_eq!(opex.annual, 776_800.0);
        assert_eq!(opex.line_items.len(), 6);
    }

    #[test]
    fn base_case_projection_compounds_by_category() {
        let five_year = compute_budget(&base()).unwrap().five_year;
        let years = &five_year.year_by_year;

        assert_eq!(years.len(), 5);
        assert_eq!(years[0].capex, 2_699_980.0);
        assert_eq!(years[0].opex, 776_800.0);
        assert_eq!(years[0].total, 3_476_780.0);
        assert_eq!(years[0].sessions_per_year, 1440.0);
        // consumables grow 5%, everything else inflates 3%
        assert_eq!(round_to_cents(years[1].opex), 801_904.00);
        assert_eq!(round_to_cents(years[1].sessions_per_year), 1512.0);
        assert!(years[1..].iter().all(|year| year.capex == 0.0));
        assert_eq!(round_to_cents(five_year.total_opex), 4_143_621.29);
    }

    #[test]
    fn base_case_unit_metrics() {
        let metrics = compute_budget(&base()).unwrap().metrics;
        assert_eq!(metrics.annual_sessions, 1440.0);
        assert_eq!(round_to_cents(metrics.cost_per_session), 539.44);
        assert_eq!(round_to_cents(metrics.cost_per_learner_hour), 44.95);
        assert_eq!(round_to_cents(metrics.cost_per_sf), 869.20);
        assert_eq!(metrics.staff_training_hours, 100.0);
    }

    #[test]
    fn sessions_based_model_scales_usage_with_sessions() {
        let params = SimulatorParameters {
            opex_model: OpexModel::SessionsBased,
            ..base()
        };
        let opex = compute_budget(&params).unwrap().opex;
        assert_eq!(opex.maintenance, 1440.0 * 40.0);
        assert_eq!(opex.consumables, 1440.0 * 125.0);
        assert_eq!(opex.utilities, 1440.0 * 20.0);
    }

    #[test]
    fn sessions_based_usage_lines_follow_growth_not_inflation() {
        let params = SimulatorParameters {
            opex_model: OpexModel::SessionsBased,
            inflation_percent: 0.0,
            growth_rate_percent: 10.0,
            ..base()
        };
        let results = compute_budget(&params).unwrap();
        let fixed = results.opex.staffing + results.opex.software + results.opex.refresh;
        let usage = results.opex.maintenance + results.opex.consumables + results.opex.utilities;
        let year_two = results.five_year.year_by_year[1].opex;
        assert!((year_two - (fixed + usage * 1.1)).abs() < 1e-6);
    }

    #[test]
    fn zero_sessions_keep_metrics_finite() {
        let params = SimulatorParameters {
            sessions_per_month: 0,
            ..base()
        };
        let results = compute_budget(&params).unwrap();
        assert_eq!(results.metrics.cost_per_session, 0.0);
        assert_eq!(results.metrics.cost_per_learner_hour, 0.0);
        assert!(results
            .five_year
            .year_by_year
            .iter()
            .all(|year| year.cost_per_session == 0.0 && year.total.is_finite()));
    }

    #[test]
    fn zero_floor_area_gives_zero_cost_per_sf() {
        let params = SimulatorParameters {
            floor_area: 0.0,
            ..base()
        };
        assert_eq!(compute_budget(&params).unwrap().metrics.cost_per_sf, 0.0);
    }

    #[test]
    fn existing_credit_never_exceeds_total() {
        let params = SimulatorParameters {
            floor_area: 0.0,
            sim_rooms: 0,
            control_rooms: 0,
            debrief_rooms: 0,
            high_fidelity_manikins: 0,
            task_trainers: 1,
            ..base()
        };
        let capex = compute_budget(&params).unwrap().capex;
        assert_eq!(capex.existing_credits, capex.total);
        assert_eq!(capex.net, 0.0);
    }

    #[test]
    fn higher_av_tier_costs_more_in_capex_and_software() {
        let basic = compute_budget(&SimulatorParameters {
            av_tier: AvTier::Basic,
            ..base()
        })
        .unwrap();
        let premium = compute_budget(&SimulatorParameters {
            av_tier: AvTier::Premium,
            ..base()
        })
        .unwrap();
        assert!(premium.capex.av_system > basic.capex.av_system);
        assert!(premium.opex.software > basic.opex.software);
    }

    #[test]
    fn nan_input_fails_fast() {
        let params = SimulatorParameters {
            core_fte: f64::NAN,
            ..base()
        };
        assert!(matches!(
            compute_budget(&params),
            Err(ValidationError::NonFinite { field: "core_fte" })
        ));
    }

    #[test]
    fn region_multiplier_orders_construction() {
        let construction = |cost_region| {
            compute_budget(&SimulatorParameters {
                cost_region,
                ..base()
            })
            .unwrap()
            .capex
            .construction
        };
        let low = construction(CostRegion::LowCost);
        let moderate = construction(CostRegion::ModerateCost);
        let high = construction(CostRegion::HighCost);

        assert!(high > moderate && moderate > low);
        assert!((high / moderate - 1.30).abs() < 1e-9);
        assert!((low / moderate - 0.85).abs() < 1e-9);
    }
}
