use chrono::NaiveDate;

use crate::commands::base_commands::Commands;
use crate::commands::error::CommandError;
use crate::services::project_template::starter_project;
use crate::services::project_yaml::serialize_project_to_yaml;

pub fn init_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Init { output, start_date } = cmd {
        let start_date = NaiveDate::parse_from_str(&start_date, "%Y-%m-%d")
            .map_err(|_| CommandError::InvalidStartDate(start_date.clone()))?;
        let project = starter_project(Some(start_date));

        let mut buffer = Vec::new();
        let write_error = |source| CommandError::Write {
            path: output.clone(),
            source,
        };
        serialize_project_to_yaml(&mut buffer, &project).map_err(write_error)?;
        std::fs::write(&output, buffer).map_err(write_error)?;
        println!("Starter project written to {output}");
    }
    Ok(())
}
