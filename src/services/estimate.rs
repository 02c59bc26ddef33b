use chrono::{Months, NaiveDate};

use crate::domain::project::Project;
use crate::domain::scenario::Scenario;
use crate::services::budget_tracking::budget_usage;
use crate::services::burn_rate::compute_burn_rate;
use crate::services::capacity::{RiskLevel, analyze_capacity};
use crate::services::estimate_types::{EstimateReport, ProjectSchedule};
use crate::services::reality_check::reality_check_message;
use crate::services::scenarios::{all_scenario_results, project_scenarios};
use crate::services::team_composition::summarize_by_role;

/// Runs every calculation for `project` and collects the results into one
/// report. `selected` only decides which scenario the report highlights and
/// checks the budget against; all three are always computed.
pub fn build_estimate(project: &Project, selected: Scenario) -> EstimateReport {
    let duration = project.duration_months;
    let burn_rate = compute_burn_rate(&project.team_members, &project.fixed_costs);
    tracing::debug!(
        project = %project.name,
        labor = burn_rate.labor,
        fixed = burn_rate.fixed,
        "computed burn rate"
    );

    let capacity = analyze_capacity(&project.team_members, &project.features, duration);
    let projection = project_scenarios(&burn_rate, duration);
    let scenarios = all_scenario_results(&burn_rate, duration);
    let roles = summarize_by_role(&project.team_members, duration);
    let budget = project.budget.as_ref().map(budget_usage);
    let total_story_points = project.total_story_points();

    let mut warnings = Vec::new();
    for result in scenarios.iter().filter(|r| r.negative_risk_buffer) {
        warnings.push(format!(
            "{} risk buffer is negative ({:.2}): recurring fixed costs do not cover the tools share",
            result.scenario.label(),
            result.risk_buffer_cost
        ));
    }
    if capacity.risk_level == RiskLevel::Overloaded {
        tracing::warn!(
            project = %project.name,
            utilization = capacity.utilization_percent,
            "scope exceeds team capacity"
        );
    }
    if let Some(budget) = &budget {
        let selected_cost = projection.cost_of(selected);
        if budget.approved < selected_cost {
            warnings.push(format!(
                "approved budget {:.2} is below the {} estimate {:.2}",
                budget.approved,
                selected.label(),
                selected_cost
            ));
        }
    }

    let schedule = project.start_date.map(|start_date| ProjectSchedule {
        start_date: format_date(start_date),
        end_date: add_months(start_date, duration),
        suggested_end_date: capacity
            .suggested_duration_months
            .map(|months| add_months(start_date, months)),
    });

    EstimateReport {
        project: project.name.clone(),
        duration_months: duration,
        schedule,
        selected_scenario: selected,
        team_size: project.team_members.len(),
        total_story_points,
        burn_rate,
        reality_check: reality_check_message(&capacity, total_story_points, duration),
        capacity,
        projection,
        scenarios,
        roles,
        one_time_costs: project.total_one_time_cost(),
        budget,
        warnings,
    }
}

fn add_months(date: NaiveDate, months: u32) -> String {
    date.checked_add_months(Months::new(months))
        .map(format_date)
        .unwrap_or_else(|| "n/a".to_string())
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
