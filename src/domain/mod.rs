pub mod cost;
pub mod facility;
pub mod organization;
pub mod project_parameters;
pub mod scenario;
pub mod simulator_parameters;
pub mod validation;
