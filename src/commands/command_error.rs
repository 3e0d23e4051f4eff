use thiserror::Error;

use crate::domain::validation::ValidationError;
use crate::services::output_writer::OutputWriteError;
use crate::services::parameters_yaml::ParametersYamlError;
use crate::services::projection_plot::ProjectionPlotError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Parameters(#[from] ParametersYamlError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Output(#[from] OutputWriteError),
    #[error(transparent)]
    Plot(#[from] ProjectionPlotError),
}
