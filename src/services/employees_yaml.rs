use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::cost::is_valid_amount;
use crate::domain::employee::{Availability, Employee, EmployeeDirectory};
use crate::domain::team_member::CompensationType;

#[derive(Error, Debug)]
pub enum EmployeeDirectoryError {
    #[error("failed to read employee directory {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse employee directory {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid compensation type for {employee} in {path}: {value}")]
    InvalidCompensationType {
        path: PathBuf,
        employee: String,
        value: String,
    },
    #[error("invalid availability for {employee} in {path}: {value}")]
    InvalidAvailability {
        path: PathBuf,
        employee: String,
        value: String,
    },
    #[error("rate for {employee} in {path} must be a finite, non-negative number, got {rate}")]
    InvalidRate {
        path: PathBuf,
        employee: String,
        rate: f64,
    },
    #[error("duplicate employee name in {path}: {employee}")]
    DuplicateEmployee { path: PathBuf, employee: String },
}

#[derive(Debug, Deserialize)]
struct DirectoryRecord {
    employees: Vec<EmployeeRecord>,
}

#[derive(Debug, Deserialize)]
struct EmployeeRecord {
    name: String,
    role: String,
    compensation: String,
    rate: f64,
    tech_stack: Option<Vec<String>>,
    availability: Option<String>,
}

/// Loads the company employee directory from a YAML file.
///
/// # Errors
/// Fails on I/O or parse errors, unknown compensation or availability
/// values, negative or non-finite rates and names that appear twice.
pub fn load_employee_directory<P: AsRef<Path>>(
    path: P,
) -> Result<EmployeeDirectory, EmployeeDirectoryError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| EmployeeDirectoryError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let directory = deserialize_employee_directory_from_yaml_str(&contents, path)?;
    tracing::debug!(
        path = %path.display(),
        employees = directory.employees.len(),
        "loaded employee directory"
    );
    Ok(directory)
}

pub fn deserialize_employee_directory_from_yaml_str(
    input: &str,
    origin_path: &Path,
) -> Result<EmployeeDirectory, EmployeeDirectoryError> {
    let record: DirectoryRecord =
        serde_yaml::from_str(input).map_err(|source| EmployeeDirectoryError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?;

    let mut directory = EmployeeDirectory::new();
    for employee_record in record.employees {
        let employee = employee_from_record(employee_record, origin_path)?;
        if directory.find(&employee.name).is_some() {
            return Err(EmployeeDirectoryError::DuplicateEmployee {
                path: origin_path.to_path_buf(),
                employee: employee.name,
            });
        }
        directory.employees.push(employee);
    }
    Ok(directory)
}

fn employee_from_record(
    record: EmployeeRecord,
    origin_path: &Path,
) -> Result<Employee, EmployeeDirectoryError> {
    let compensation_type = CompensationType::parse(&record.compensation).ok_or_else(|| {
        EmployeeDirectoryError::InvalidCompensationType {
            path: origin_path.to_path_buf(),
            employee: record.name.clone(),
            value: record.compensation.clone(),
        }
    })?;
    if !is_valid_amount(record.rate) {
        return Err(EmployeeDirectoryError::InvalidRate {
            path: origin_path.to_path_buf(),
            employee: record.name,
            rate: record.rate,
        });
    }
    let availability = match record.availability.as_deref() {
        None => Availability::Available,
        Some(value) => parse_availability(value).ok_or_else(|| {
            EmployeeDirectoryError::InvalidAvailability {
                path: origin_path.to_path_buf(),
                employee: record.name.clone(),
                value: value.to_string(),
            }
        })?,
    };

    Ok(Employee {
        name: record.name,
        role: record.role,
        compensation_type,
        rate: record.rate,
        tech_stack: record.tech_stack.unwrap_or_default(),
        availability,
    })
}

fn parse_availability(value: &str) -> Option<Availability> {
    match value.trim().to_ascii_lowercase().as_str() {
        "available" => Some(Availability::Available),
        "busy" => Some(Availability::Busy),
        "offline" => Some(Availability::Offline),
        _ => None,
    }
}
