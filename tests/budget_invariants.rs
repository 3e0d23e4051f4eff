use proptest::prelude::*;

use simcenter_planner::domain::facility::{
    AvTier, ConstructionType, CostRegion, OpexModel, QualityLevel,
};
use simcenter_planner::domain::project_parameters::ProjectParameters;
use simcenter_planner::domain::simulator_parameters::SimulatorParameters;
use simcenter_planner::services::budget_simulator::compute_budget;
use simcenter_planner::services::capex_model::calculate_capex;

fn av_tier() -> impl Strategy<Value = AvTier> {
    prop_oneof![Just(AvTier::Basic), Just(AvTier::Standard), Just(AvTier::Premium)]
}

fn quality_level() -> impl Strategy<Value = QualityLevel> {
    prop_oneof![
        Just(QualityLevel::Budget),
        Just(QualityLevel::Standard),
        Just(QualityLevel::Premium)
    ]
}

fn cost_region() -> impl Strategy<Value = CostRegion> {
    prop_oneof![
        Just(CostRegion::LowCost),
        Just(CostRegion::ModerateCost),
        Just(CostRegion::HighCost)
    ]
}

fn opex_model() -> impl Strategy<Value = OpexModel> {
    prop_oneof![Just(OpexModel::RoomBased), Just(OpexModel::SessionsBased)]
}

prop_compose! {
    fn facility()(
        floor_area in 2000.0..10000.0f64,
        sim_rooms in 1u32..=8,
        control_rooms in 1u32..=4,
        debrief_rooms in 1u32..=6,
        high_fidelity_manikins in 0u32..=12,
        task_trainers in 0u32..=40,
        av_tier in av_tier(),
        quality_level in quality_level(),
        cost_region in cost_region(),
    ) -> SimulatorParameters {
        SimulatorParameters {
            floor_area,
            sim_rooms,
            control_rooms,
            debrief_rooms,
            high_fidelity_manikins,
            task_trainers,
            av_tier,
            quality_level,
            cost_region,
            ..SimulatorParameters::default()
        }
    }
}

prop_compose! {
    fn simulator_parameters()(
        base in facility(),
        core_fte in 0.5..10.0f64,
        faculty_allocation_percent in 0.0..50.0f64,
        sessions_per_month in 0u32..=400,
        opex_model in opex_model(),
        growth_rate_percent in 0.0..15.0f64,
        inflation_percent in 0.0..10.0f64,
        contingency_percent in 5.0..20.0f64,
        refresh_reserve_percent in 10.0..25.0f64,
    ) -> SimulatorParameters {
        SimulatorParameters {
            core_fte,
            faculty_allocation_percent,
            sessions_per_month,
            opex_model,
            growth_rate_percent,
            inflation_percent,
            contingency_percent,
            refresh_reserve_percent,
            ..base
        }
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn net_investment_never_exceeds_total(params in simulator_parameters()) {
        let capex = compute_budget(&params).unwrap().capex;
        prop_assert_eq!(capex.net, capex.total - capex.existing_credits);
        prop_assert!(capex.net <= capex.total);
        prop_assert!(capex.net >= 0.0);
    }

    #[test]
    fn totals_are_sums_of_their_line_items(params in simulator_parameters()) {
        let results = compute_budget(&params).unwrap();

        let capex_sum: f64 = results.capex.line_items.iter().map(|item| item.amount).sum();
        let opex_sum: f64 = results.opex.line_items.iter().map(|item| item.amount).sum();
        prop_assert_eq!(results.capex.total, capex_sum);
        prop_assert_eq!(results.opex.annual, opex_sum);
        prop_assert!(close(results.opex.monthly * 12.0, results.opex.annual));
    }

    #[test]
    fn projection_years_add_up(params in simulator_parameters()) {
        let results = compute_budget(&params).unwrap();
        let projection = &results.five_year;

        prop_assert_eq!(projection.year_by_year.len(), 5);
        prop_assert_eq!(projection.year_by_year[0].capex, results.capex.net);
        prop_assert!(close(projection.year_by_year[0].opex, results.opex.annual));
        for year in &projection.year_by_year {
            prop_assert_eq!(year.total, year.capex + year.opex);
            prop_assert!(year.cost_per_session.is_finite());
        }
        for year in &projection.year_by_year[1..] {
            prop_assert_eq!(year.capex, 0.0);
        }
        for pair in projection.year_by_year.windows(2) {
            prop_assert!(pair[1].opex >= pair[0].opex);
        }
        prop_assert_eq!(projection.total_cost, projection.total_capex + projection.total_opex);
    }

    #[test]
    fn more_floor_area_never_lowers_construction(
        params in simulator_parameters(),
        extra in 0.0..5000.0f64,
    ) {
        let larger = SimulatorParameters {
            floor_area: params.floor_area + extra,
            ..params.clone()
        };
        let small = compute_budget(&params).unwrap().capex.construction;
        let large = compute_budget(&larger).unwrap().capex.construction;
        prop_assert!(large >= small);
    }

    #[test]
    fn more_sim_rooms_never_lowers_room_based_opex(
        params in simulator_parameters(),
        extra in 0u32..4,
    ) {
        let params = SimulatorParameters {
            opex_model: OpexModel::RoomBased,
            ..params
        };
        let larger = SimulatorParameters {
            sim_rooms: params.sim_rooms + extra,
            ..params.clone()
        };
        let small = compute_budget(&params).unwrap().opex;
        let large = compute_budget(&larger).unwrap().opex;
        prop_assert!(large.staffing >= small.staffing);
        prop_assert!(large.annual >= small.annual);
    }

    #[test]
    fn repeated_runs_are_identical(params in simulator_parameters()) {
        prop_assert_eq!(compute_budget(&params).unwrap(), compute_budget(&params).unwrap());
    }

    #[test]
    fn zero_sessions_yield_zero_unit_costs(params in simulator_parameters()) {
        let params = SimulatorParameters {
            sessions_per_month: 0,
            ..params
        };
        let metrics = compute_budget(&params).unwrap().metrics;
        prop_assert_eq!(metrics.annual_sessions, 0.0);
        prop_assert_eq!(metrics.cost_per_session, 0.0);
        prop_assert_eq!(metrics.cost_per_learner_hour, 0.0);
    }

    #[test]
    fn capex_total_is_line_items_plus_contingency(
        floor_area in 0.0..20000.0f64,
        sim_rooms in 0u32..10,
        support_rooms in 0u32..6,
        clean_shell in any::<bool>(),
        quality_level in quality_level(),
        cost_region in cost_region(),
    ) {
        let params = ProjectParameters {
            floor_area,
            sim_rooms,
            support_rooms,
            construction_type: if clean_shell {
                ConstructionType::CleanShell
            } else {
                ConstructionType::HospitalRenovation
            },
            quality_level,
            cost_region,
            ..ProjectParameters::default()
        };
        let result = calculate_capex(&params).unwrap();
        let items: f64 = result.line_items.iter().map(|item| item.amount).sum();

        prop_assert_eq!(result.total_project_cost, items + result.contingency);
        prop_assert!(result.cost_per_room.is_finite());
        prop_assert!(result.cost_per_square_foot.is_finite());
    }
}
