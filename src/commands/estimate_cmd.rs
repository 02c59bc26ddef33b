use crate::commands::base_commands::{Commands, OutputFormat};
use crate::commands::error::CommandError;
use crate::commands::report_format::format_estimate_report;
use crate::services::employees_yaml::load_employee_directory;
use crate::services::estimate::build_estimate;
use crate::services::estimate_types::EstimateReport;
use crate::services::project_yaml::load_project_from_yaml_file;

pub fn estimate_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Estimate {
        input,
        output,
        scenario,
        employees,
        format,
    } = cmd
    {
        let directory = employees.as_deref().map(load_employee_directory).transpose()?;
        let project = load_project_from_yaml_file(&input, directory.as_ref())?;
        let report = build_estimate(&project, scenario.into());

        println!("{}", format_estimate_report(&report));

        if let Some(output) = output {
            let contents = serialize_report(&report, format)?;
            std::fs::write(&output, contents).map_err(|source| CommandError::Write {
                path: output.clone(),
                source,
            })?;
            println!();
            println!("Estimate report written to {output}");
        }
    }
    Ok(())
}

fn serialize_report(report: &EstimateReport, format: OutputFormat) -> Result<String, CommandError> {
    let contents = match format {
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    };
    Ok(contents)
}
