use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputWriteError {
    #[error("failed to serialize output: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes `value` as JSON when the path ends in `.json`, YAML otherwise.
pub fn write_serialized<T: Serialize>(path: &str, value: &T) -> Result<(), OutputWriteError> {
    let path = Path::new(path);
    let contents = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => serde_json::to_string_pretty(value)?,
        _ => serde_yaml::to_string(value)?,
    };
    write_text(path, &contents)
}

pub fn write_text(path: &Path, contents: &str) -> Result<(), OutputWriteError> {
    std::fs::write(path, contents).map_err(|source| OutputWriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
