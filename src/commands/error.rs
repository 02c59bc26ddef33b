use thiserror::Error;

use crate::services::employees_yaml::EmployeeDirectoryError;
use crate::services::project_yaml::ProjectYamlError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Project(#[from] ProjectYamlError),
    #[error(transparent)]
    Employees(#[from] EmployeeDirectoryError),
    #[error("invalid start date: {0}")]
    InvalidStartDate(String),
    #[error("rate must be a finite, non-negative number: {0}")]
    InvalidRate(f64),
    #[error("failed to serialize report as yaml: {0}")]
    SerializeYaml(#[from] serde_yaml::Error),
    #[error("failed to serialize report as json: {0}")]
    SerializeJson(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}
