use std::io::{self, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::cost::{CostCategory, FixedCost, OneTimeCost, is_valid_amount};
use crate::domain::employee::EmployeeDirectory;
use crate::domain::feature::{Complexity, Feature, StoryPoints};
use crate::domain::project::{Budget, Project};
use crate::domain::team_member::{CompensationType, TeamMember};
use crate::services::compensation::convert_compensation_type;

#[derive(Error, Debug)]
pub enum ProjectYamlError {
    #[error("failed to read project yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse project yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("project duration must be at least one month")]
    InvalidDuration,
    #[error("invalid date format: {0}")]
    InvalidDate(String),
    #[error("allocation of team member {member} must be between 0 and 100, got {value}")]
    InvalidAllocation { member: String, value: f64 },
    #[error("cost value of team member {member} must be a finite, non-negative number, got {value}")]
    InvalidCostValue { member: String, value: f64 },
    #[error("invalid compensation type for team member {member}: {value}")]
    InvalidCompensationType { member: String, value: String },
    #[error("unknown employee: {0}")]
    UnknownEmployee(String),
    #[error("invalid story points: {0} (expected one of 1, 2, 3, 5, 8, 13)")]
    InvalidStoryPoints(u32),
    #[error("invalid complexity value: {0}")]
    InvalidComplexity(String),
    #[error("monthly cost of {name} must be a finite, non-negative number, got {value}")]
    InvalidMonthlyCost { name: String, value: f64 },
    #[error("one-time cost of {name} must be a finite, non-negative number, got {value}")]
    InvalidOneTimeCost { name: String, value: f64 },
    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidBudgetAmount { field: &'static str, value: f64 },
    #[error("spent amount given without an approved budget")]
    SpentWithoutBudget,
}

#[derive(Serialize, Deserialize)]
struct ProjectRecord {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_date: Option<String>,
    duration_months: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    spent: Option<f64>,
    #[serde(default)]
    team_members: Vec<TeamMemberRecord>,
    #[serde(default)]
    features: Vec<FeatureRecord>,
    #[serde(default)]
    fixed_costs: Vec<MonthlyCostRecord>,
    #[serde(default)]
    vendor_costs: Vec<MonthlyCostRecord>,
    #[serde(default)]
    one_time_costs: Vec<OneTimeCostRecord>,
}

#[derive(Serialize, Deserialize)]
struct TeamMemberRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    employee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    compensation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cost_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    allocation: Option<f64>,
}

#[derive(Serialize, Deserialize)]
struct FeatureRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    complexity: Option<String>,
    story_points: u32,
}

#[derive(Serialize, Deserialize)]
struct MonthlyCostRecord {
    name: String,
    monthly_cost: f64,
}

#[derive(Serialize, Deserialize)]
struct OneTimeCostRecord {
    name: String,
    cost: f64,
}

/// Reads a project file. Team members that reference an `employee` are
/// resolved against `directory`.
pub fn load_project_from_yaml_file<P: AsRef<Path>>(
    path: P,
    directory: Option<&EmployeeDirectory>,
) -> Result<Project, ProjectYamlError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let project = deserialize_project_from_yaml_str(&contents, directory)?;
    tracing::debug!(
        path = %path.as_ref().display(),
        project = %project.name,
        members = project.team_members.len(),
        features = project.features.len(),
        "loaded project"
    );
    Ok(project)
}

pub fn deserialize_project_from_yaml_str(
    input: &str,
    directory: Option<&EmployeeDirectory>,
) -> Result<Project, ProjectYamlError> {
    let record: ProjectRecord = serde_yaml::from_str(input)?;
    if record.duration_months == 0 {
        return Err(ProjectYamlError::InvalidDuration);
    }

    let team_members = record
        .team_members
        .into_iter()
        .enumerate()
        .map(|(index, member)| team_member_from_record(index, member, directory))
        .collect::<Result<Vec<_>, _>>()?;

    let features = record
        .features
        .into_iter()
        .map(feature_from_record)
        .collect::<Result<Vec<_>, _>>()?;

    let fixed_costs = record
        .fixed_costs
        .into_iter()
        .map(|cost| monthly_cost_from_record(cost, CostCategory::Fixed))
        .chain(
            record
                .vendor_costs
                .into_iter()
                .map(|cost| monthly_cost_from_record(cost, CostCategory::Vendor)),
        )
        .collect::<Result<Vec<_>, _>>()?;

    let one_time_costs = record
        .one_time_costs
        .into_iter()
        .map(|cost| {
            if !is_valid_amount(cost.cost) {
                return Err(ProjectYamlError::InvalidOneTimeCost {
                    name: cost.name,
                    value: cost.cost,
                });
            }
            Ok(OneTimeCost {
                name: cost.name,
                cost: cost.cost,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (field, value) in [("budget", record.budget), ("spent", record.spent)] {
        if let Some(value) = value.filter(|value| !is_valid_amount(*value)) {
            return Err(ProjectYamlError::InvalidBudgetAmount { field, value });
        }
    }
    let budget = match (record.budget, record.spent) {
        (Some(approved), spent) => Some(Budget {
            approved,
            spent: spent.unwrap_or(0.0),
        }),
        (None, Some(_)) => return Err(ProjectYamlError::SpentWithoutBudget),
        (None, None) => None,
    };

    Ok(Project {
        name: record.name,
        start_date: parse_date_opt(record.start_date.as_deref())?,
        duration_months: record.duration_months,
        team_members,
        features,
        fixed_costs,
        one_time_costs,
        budget,
    })
}

pub fn serialize_project_to_yaml<W: Write>(writer: &mut W, project: &Project) -> io::Result<()> {
    let monthly_costs = |category: CostCategory| {
        project
            .fixed_costs
            .iter()
            .filter(|cost| cost.category == category)
            .map(|cost| MonthlyCostRecord {
                name: cost.name.clone(),
                monthly_cost: cost.monthly_cost,
            })
            .collect::<Vec<_>>()
    };

    let record = ProjectRecord {
        name: project.name.clone(),
        start_date: project
            .start_date
            .map(|date| date.format("%Y-%m-%d").to_string()),
        duration_months: project.duration_months,
        budget: project.budget.map(|budget| budget.approved),
        spent: project.budget.map(|budget| budget.spent),
        team_members: project.team_members.iter().map(team_member_to_record).collect(),
        features: project.features.iter().map(feature_to_record).collect(),
        fixed_costs: monthly_costs(CostCategory::Fixed),
        vendor_costs: monthly_costs(CostCategory::Vendor),
        one_time_costs: project
            .one_time_costs
            .iter()
            .map(|cost| OneTimeCostRecord {
                name: cost.name.clone(),
                cost: cost.cost,
            })
            .collect(),
    };

    let yaml = serde_yaml::to_string(&record).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

fn team_member_from_record(
    index: usize,
    record: TeamMemberRecord,
    directory: Option<&EmployeeDirectory>,
) -> Result<TeamMember, ProjectYamlError> {
    let label = record
        .name
        .clone()
        .or_else(|| record.employee.clone())
        .unwrap_or_else(|| format!("#{}", index + 1));

    let allocation = record.allocation.unwrap_or(100.0);
    if !(0.0..=100.0).contains(&allocation) {
        return Err(ProjectYamlError::InvalidAllocation {
            member: label,
            value: allocation,
        });
    }

    let mut member = match &record.employee {
        Some(employee_name) => {
            let employee = directory
                .and_then(|directory| directory.find(employee_name))
                .ok_or_else(|| ProjectYamlError::UnknownEmployee(employee_name.clone()))?;
            TeamMember::from_employee(employee, allocation)
        }
        None => TeamMember {
            allocation_percentage: allocation,
            ..TeamMember::blank()
        },
    };

    if let Some(name) = record.name {
        member.name = Some(name);
    }
    if let Some(role) = record.role {
        member.role = role;
    }
    if let Some(value) = record.compensation.as_deref() {
        let compensation_type = CompensationType::parse(value).ok_or_else(|| {
            ProjectYamlError::InvalidCompensationType {
                member: label.clone(),
                value: value.to_string(),
            }
        })?;
        // A type switch without a new rate keeps the directory rate in the new unit.
        member = convert_compensation_type(&member, compensation_type);
    }
    if let Some(cost_value) = record.cost_value {
        member.cost_value = cost_value;
    }
    if !is_valid_amount(member.cost_value) {
        return Err(ProjectYamlError::InvalidCostValue {
            member: label,
            value: member.cost_value,
        });
    }

    Ok(member)
}

fn team_member_to_record(member: &TeamMember) -> TeamMemberRecord {
    TeamMemberRecord {
        employee: None,
        name: member.name.clone(),
        role: Some(member.role.clone()),
        compensation: Some(member.compensation_type.as_str().to_string()),
        cost_value: Some(member.cost_value),
        allocation: Some(member.allocation_percentage),
    }
}

fn feature_from_record(record: FeatureRecord) -> Result<Feature, ProjectYamlError> {
    let story_points = StoryPoints::new(record.story_points)
        .ok_or(ProjectYamlError::InvalidStoryPoints(record.story_points))?;
    let complexity = match record.complexity.as_deref() {
        None => Complexity::Medium,
        Some(value) => parse_complexity(value)
            .ok_or_else(|| ProjectYamlError::InvalidComplexity(value.to_string()))?,
    };
    Ok(Feature {
        name: record.name,
        complexity,
        story_points,
    })
}

fn feature_to_record(feature: &Feature) -> FeatureRecord {
    FeatureRecord {
        name: feature.name.clone(),
        complexity: Some(complexity_to_string(feature.complexity).to_string()),
        story_points: feature.story_points.value(),
    }
}

fn monthly_cost_from_record(
    record: MonthlyCostRecord,
    category: CostCategory,
) -> Result<FixedCost, ProjectYamlError> {
    if !is_valid_amount(record.monthly_cost) {
        return Err(ProjectYamlError::InvalidMonthlyCost {
            name: record.name,
            value: record.monthly_cost,
        });
    }
    Ok(FixedCost {
        name: record.name,
        category,
        monthly_cost: record.monthly_cost,
    })
}

fn parse_date_opt(value: Option<&str>) -> Result<Option<NaiveDate>, ProjectYamlError> {
    let text = match value {
        Some(text) => text,
        None => return Ok(None),
    };
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| ProjectYamlError::InvalidDate(text.to_string()))?;
    Ok(Some(date))
}

fn parse_complexity(value: &str) -> Option<Complexity> {
    match value.trim().to_ascii_lowercase().as_str() {
        "low" => Some(Complexity::Low),
        "medium" => Some(Complexity::Medium),
        "high" => Some(Complexity::High),
        _ => None,
    }
}

fn complexity_to_string(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Low => "Low",
        Complexity::Medium => "Medium",
        Complexity::High => "High",
    }
}
