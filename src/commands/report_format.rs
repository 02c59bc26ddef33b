use crate::services::capacity::RiskLevel;
use crate::services::estimate_types::EstimateReport;
use crate::services::scenarios::ScenarioResult;

fn months_label(months: u32) -> String {
    if months == 1 {
        "1 month".to_string()
    } else {
        format!("{months} months")
    }
}

pub fn format_estimate_report(report: &EstimateReport) -> String {
    let mut lines = Vec::new();
    lines.push("Estimate Report".to_string());
    lines.push(format!("Project: {}", report.project));
    lines.push(format!("Duration: {}", months_label(report.duration_months)));
    if let Some(schedule) = &report.schedule {
        lines.push(format!("Schedule: {} to {}", schedule.start_date, schedule.end_date));
    }
    lines.push(format!("Team size: {}", report.team_size));
    lines.push(format!("Scope: {} SP", report.total_story_points));
    lines.push(String::new());

    lines.push("Monthly burn rate:".to_string());
    lines.push(format!("  Labor: {:.2}", report.burn_rate.labor));
    lines.push(format!("  Fixed & vendor: {:.2}", report.burn_rate.fixed));
    lines.push(format!("  Total: {:.2}", report.burn_rate.total));
    lines.push(String::new());

    lines.push("Capacity:".to_string());
    lines.push(format!("  Available hours: {:.0}", report.capacity.capacity_hours));
    lines.push(format!("  Required hours: {:.0}", report.capacity.demand_hours));
    lines.push(format!("  Utilization: {:.1}%", report.capacity.utilization_percent));
    lines.push(format!("  Risk: {}", risk_label(report.capacity.risk_level)));
    if let Some(months) = report.capacity.suggested_duration_months {
        lines.push(format!("  Suggested duration: {}", months_label(months)));
    }
    lines.push(String::new());

    lines.push("Scenarios:".to_string());
    lines.push("Scenario | Total | Labor | Tools | Risk buffer".to_string());
    lines.push("---------|-------|-------|-------|------------".to_string());
    for result in &report.scenarios {
        let marker = if result.scenario == report.selected_scenario { " *" } else { "" };
        lines.push(format_scenario_row(result, marker));
    }

    if let Some(selected) = report.selected() {
        lines.push(String::new());
        lines.push(format!("Budget breakdown ({}):", selected.scenario.label()));
        lines.push(format!(
            "  Team salaries: {:.2} ({}%)",
            selected.labor_cost, selected.percentages.labor
        ));
        lines.push(format!(
            "  Tools & vendors: {:.2} ({}%)",
            selected.tools_cost, selected.percentages.tools
        ));
        lines.push(format!(
            "  Risk buffer: {:.2} ({}%)",
            selected.risk_buffer_cost, selected.percentages.risk_buffer
        ));
    }

    if !report.roles.is_empty() {
        lines.push(String::new());
        lines.push("Team composition:".to_string());
        for role in &report.roles {
            lines.push(format!(
                "  {} x{}: {:.2}",
                role.role, role.member_count, role.total_cost
            ));
        }
    }

    if report.one_time_costs > 0.0 {
        lines.push(String::new());
        lines.push(format!("One-time costs: {:.2}", report.one_time_costs));
    }

    if let Some(budget) = &report.budget {
        lines.push(String::new());
        lines.push(format!(
            "Budget: {:.2} approved, {:.2} spent, {:.2} remaining ({}% used, {:?})",
            budget.approved, budget.spent, budget.remaining, budget.usage_percent, budget.health
        ));
    }

    if let Some(message) = &report.reality_check {
        lines.push(String::new());
        lines.push(format!("Reality check: {message}"));
    }

    for warning in &report.warnings {
        lines.push(format!("Warning: {warning}"));
    }

    lines.join("\n")
}

fn format_scenario_row(result: &ScenarioResult, marker: &str) -> String {
    format!(
        "{label}{marker} | {total:.2} | {labor:.2} | {tools:.2} | {risk:.2}",
        label = result.scenario.label(),
        total = result.total_cost,
        labor = result.labor_cost,
        tools = result.tools_cost,
        risk = result.risk_buffer_cost,
    )
}

fn risk_label(risk_level: RiskLevel) -> &'static str {
    match risk_level {
        RiskLevel::Normal => "normal",
        RiskLevel::HighRisk => "high risk",
        RiskLevel::Overloaded => "overloaded",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::{Budget, Project};
    use crate::domain::scenario::Scenario;
    use crate::services::estimate::build_estimate;
    use crate::test_support::{features_totaling, fixed_cost, reference_team};

    fn build_report() -> EstimateReport {
        let mut project = Project::new("Shop", 1);
        project.team_members = reference_team();
        project.features = features_totaling(13);
        project.fixed_costs = vec![fixed_cost("AWS", 2500.0)];
        build_estimate(&project, Scenario::Realistic)
    }

    #[test]
    fn format_estimate_report_includes_header_and_scenario_table() {
        let output = format_estimate_report(&build_report());

        assert!(output.contains("Estimate Report"));
        assert!(output.contains("Project: Shop"));
        assert!(output.contains("Duration: 1 month\n"));
        assert!(output.contains("Scope: 13 SP"));
        assert!(output.contains("  Labor: 18000.00"));
        assert!(output.contains("  Total: 20500.00"));
        assert!(output.contains("Scenario | Total | Labor | Tools | Risk buffer"));
        assert!(output.contains("Optimistic | 20500.00 | 18000.00 | 1800.00 | 700.00"));
        assert!(output.contains("Realistic * | 25625.00 | 18000.00 | 1800.00 | 5825.00"));
        assert!(output.contains("Pessimistic | 26650.00"));
        assert!(output.contains("Budget breakdown (Realistic):"));
        assert!(output.contains("Backend Developer x1: 14400.00"));
        assert!(!output.contains("Warning"));
        assert!(!output.contains("Reality check"));
    }

    #[test]
    fn format_estimate_report_lists_budget_and_warnings() {
        let mut project = Project::new("Shop", 1);
        project.team_members = reference_team();
        project.budget = Some(Budget {
            approved: 20_000.0,
            spent: 19_000.0,
        });
        let output = format_estimate_report(&build_estimate(&project, Scenario::Realistic));

        assert!(output.contains("Budget: 20000.00 approved, 19000.00 spent, 1000.00 remaining (95% used, Critical)"));
        assert!(output.contains("Warning: Optimistic risk buffer is negative"));
        assert!(output.contains("Warning: approved budget 20000.00 is below the Realistic estimate 22500.00"));
    }
}
