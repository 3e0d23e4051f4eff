pub mod budget_simulator;
pub mod capex_model;
pub mod chart_rows;
pub mod cost_model_types;
pub mod currency_format;
pub mod output_writer;
pub mod parameters_yaml;
pub mod projection_plot;
pub mod rfp_document;
pub mod roi_estimator;
pub mod scenario_comparison;
