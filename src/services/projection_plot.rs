use plotters::prelude::*;
use thiserror::Error;

use crate::services::chart_rows::{projection_rows, ProjectionRow};
use crate::services::cost_model_types::FiveYearProjection;
use crate::services::currency_format::format_compact;

#[derive(Error, Debug)]
pub enum ProjectionPlotError {
    #[error("projection has no years")]
    EmptyProjection,
    #[error("failed to render projection chart: {0}")]
    Render(String),
}

/// Draws the projection as stacked CAPEX/OPEX bars, one per year.
pub fn write_projection_png(
    output_path: &str,
    projection: &FiveYearProjection,
) -> Result<(), ProjectionPlotError> {
    let rows = projection_rows(projection);
    if rows.is_empty() {
        return Err(ProjectionPlotError::EmptyProjection);
    }
    render_projection_png(output_path, &rows)
}

fn y_axis_max(rows: &[ProjectionRow]) -> f64 {
    let tallest = rows
        .iter()
        .map(|row| row.capex + row.opex)
        .fold(0.0_f64, f64::max);
    if tallest > 0.0 { tallest * 1.1 } else { 1.0 }
}

fn render_projection_png(
    output_path: &str,
    rows: &[ProjectionRow],
) -> Result<(), ProjectionPlotError> {
    let max_y = y_axis_max(rows);
    let max_x = rows.len() as i32;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Five-Year Cost Projection", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(85)
        .build_cartesian_2d(0..max_x, 0.0..max_y)
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Year")
        .y_desc("Cost")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(rows.len())
        .x_label_formatter(&|index| {
            rows.get(*index as usize)
                .map(|row| row.name.clone())
                .unwrap_or_default()
        })
        .y_label_formatter(&|value| format_compact(*value))
        .draw()
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?;

    let capex_style = ShapeStyle::from(&RGBColor(30, 122, 204)).filled();
    let opex_style = ShapeStyle::from(&RGBColor(243, 156, 18)).filled();

    chart
        .draw_series(rows.iter().enumerate().map(|(idx, row)| {
            Rectangle::new([(idx as i32, 0.0), (idx as i32 + 1, row.capex)], capex_style)
        }))
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?
        .label("CAPEX")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], capex_style));

    chart
        .draw_series(rows.iter().enumerate().map(|(idx, row)| {
            Rectangle::new(
                [(idx as i32, row.capex), (idx as i32 + 1, row.capex + row.opex)],
                opex_style,
            )
        }))
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?
        .label("OPEX")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], opex_style));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?;
    Ok(())
}
