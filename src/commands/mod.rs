pub mod base_commands;
pub mod bounds_cmd;
pub mod budget_cmd;
pub mod capex_cmd;
pub mod command_error;
pub mod compare_cmd;
pub mod completions_cmd;
pub mod report_format;
pub mod rfp_cmd;
pub mod roi_cmd;
