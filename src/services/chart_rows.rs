use serde::Serialize;

use crate::domain::cost::CostLineItem;
use crate::services::cost_model_types::{BudgetResults, FiveYearProjection};

const PALETTE: [&str; 8] = [
    "#1e7acc", "#f39c12", "#27ae60", "#8e44ad", "#c0392b", "#16a085", "#7f8c8d", "#d35400",
];

/// Row shape consumed by bar, pie and area charts.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProjectionRow {
    pub name: String,
    pub capex: f64,
    pub opex: f64,
}

/// Chart-ready view of one budget run, for dashboards that draw their own
/// breakdowns.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BudgetChartData {
    pub capex: Vec<ChartRow>,
    pub opex: Vec<ChartRow>,
    pub projection: Vec<ProjectionRow>,
}

pub fn budget_chart_data(results: &BudgetResults) -> BudgetChartData {
    BudgetChartData {
        capex: line_item_rows(&results.capex.line_items),
        opex: line_item_rows(&results.opex.line_items),
        projection: projection_rows(&results.five_year),
    }
}

pub fn line_item_rows(items: &[CostLineItem]) -> Vec<ChartRow> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| ChartRow {
            name: item.category.clone(),
            value: item.amount,
            color: PALETTE[index % PALETTE.len()].to_string(),
        })
        .collect()
}

pub fn projection_rows(projection: &FiveYearProjection) -> Vec<ProjectionRow> {
    projection
        .year_by_year
        .iter()
        .map(|year| ProjectionRow {
            name: format!("Year {}", year.year),
            capex: year.capex,
            opex: year.opex,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::simulator_parameters::SimulatorParameters;
    use crate::services::budget_simulator::compute_budget;

    #[test]
    fn line_item_rows_keep_order_and_cycle_palette() {
        let items: Vec<CostLineItem> = (0..9)
            .map(|i| CostLineItem::new(&format!("item-{i}"), &format!("Item {i}"), i as f64, String::new()))
            .collect();

        let rows = line_item_rows(&items);

        assert_eq!(rows.len(), 9);
        assert_eq!(rows[2].name, "Item 2");
        assert_eq!(rows[2].value, 2.0);
        assert_eq!(rows[8].color, rows[0].color);
    }

    #[test]
    fn projection_rows_label_years() {
        let budget = compute_budget(&SimulatorParameters::default()).unwrap();
        let rows = projection_rows(&budget.five_year);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].name, "Year 1");
        assert_eq!(rows[0].capex, budget.capex.net);
        assert_eq!(rows[4].capex, 0.0);
    }

    #[test]
    fn budget_chart_data_mirrors_line_items() {
        let budget = compute_budget(&SimulatorParameters::default()).unwrap();
        let data = budget_chart_data(&budget);

        assert_eq!(data.capex.len(), budget.capex.line_items.len());
        assert_eq!(data.opex.len(), 6);
        assert_eq!(data.opex[0].name, "Staffing");
        assert_eq!(data.opex[0].value, budget.opex.staffing);
        assert_eq!(data.projection.len(), 5);
    }
}
