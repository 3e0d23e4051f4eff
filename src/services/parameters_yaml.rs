use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::organization::OrganizationalInputs;
use crate::domain::project_parameters::ProjectParameters;
use crate::domain::scenario::Scenario;
use crate::domain::simulator_parameters::{ParameterUpdate, SimulatorParameters};
use crate::domain::validation::ValidationError;

#[derive(Error, Debug)]
pub enum ParametersYamlError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid parameters: {0}")]
    Invalid(#[from] ValidationError),
    #[error("scenario catalog is empty: {0}")]
    EmptyCatalog(PathBuf),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioRecord {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    parameters: ParameterUpdate,
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ParametersYamlError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ParametersYamlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {}", path.display());
    parse_yaml(&contents, path)
}

fn parse_yaml<T: DeserializeOwned>(input: &str, origin: &Path) -> Result<T, ParametersYamlError> {
    serde_yaml::from_str(input).map_err(|source| ParametersYamlError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Loads simulator parameters as a partial edit of the Base Case, clamped
/// into slider bounds. `None` yields the Base Case itself.
pub fn load_simulator_parameters(
    path: Option<&str>,
) -> Result<SimulatorParameters, ParametersYamlError> {
    let update = match path {
        Some(path) => read_yaml::<ParameterUpdate>(Path::new(path))?,
        None => ParameterUpdate::default(),
    };
    finish_simulator_parameters(&update)
}

pub fn deserialize_simulator_parameters_from_yaml_str(
    input: &str,
) -> Result<SimulatorParameters, ParametersYamlError> {
    let update: ParameterUpdate = parse_yaml(input, Path::new("<inline>"))?;
    finish_simulator_parameters(&update)
}

fn finish_simulator_parameters(
    update: &ParameterUpdate,
) -> Result<SimulatorParameters, ParametersYamlError> {
    let params = SimulatorParameters::default().updated(update);
    params.validate()?;
    let (clamped, moved) = params.clamped();
    for field in moved {
        log::warn!("{field} is outside its supported range and was clamped");
    }
    Ok(clamped)
}

pub fn load_project_parameters(
    path: Option<&str>,
) -> Result<ProjectParameters, ParametersYamlError> {
    let params = match path {
        Some(path) => read_yaml::<ProjectParameters>(Path::new(path))?,
        None => ProjectParameters::default(),
    };
    params.validate()?;
    Ok(params)
}

pub fn load_organizational_inputs(
    path: Option<&str>,
) -> Result<OrganizationalInputs, ParametersYamlError> {
    match path {
        Some(path) => read_yaml(Path::new(path)),
        None => Ok(OrganizationalInputs::default()),
    }
}

/// Reads a list of named scenarios; each one's parameters are a partial
/// edit of the Base Case, validated and clamped like a single parameter file.
pub fn load_scenarios_from_yaml_file(path: &str) -> Result<Vec<Scenario>, ParametersYamlError> {
    let path = Path::new(path);
    let records: Vec<ScenarioRecord> = read_yaml(path)?;
    if records.is_empty() {
        return Err(ParametersYamlError::EmptyCatalog(path.to_path_buf()));
    }
    records
        .into_iter()
        .map(|record| -> Result<Scenario, ParametersYamlError> {
            log::debug!("loading scenario {}", record.id);
            Ok(Scenario {
                parameters: finish_simulator_parameters(&record.parameters)?,
                id: record.id,
                name: record.name,
                description: record.description,
            })
        })
        .collect()
}
