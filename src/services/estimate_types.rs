use serde::Serialize;

use crate::domain::scenario::Scenario;
use crate::services::budget_tracking::BudgetUsage;
use crate::services::burn_rate::BurnRate;
use crate::services::capacity::CapacityAnalysis;
use crate::services::scenarios::{ScenarioProjection, ScenarioResult};
use crate::services::team_composition::RoleSummary;

#[derive(Serialize, Debug, Clone)]
pub struct ProjectSchedule {
    pub start_date: String,
    pub end_date: String,
    pub suggested_end_date: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct EstimateReport {
    pub project: String,
    pub duration_months: u32,
    pub schedule: Option<ProjectSchedule>,
    pub selected_scenario: Scenario,
    pub team_size: usize,
    pub total_story_points: u32,
    pub burn_rate: BurnRate,
    pub capacity: CapacityAnalysis,
    pub projection: ScenarioProjection,
    pub scenarios: Vec<ScenarioResult>,
    pub roles: Vec<RoleSummary>,
    pub one_time_costs: f64,
    pub budget: Option<BudgetUsage>,
    pub reality_check: Option<String>,
    pub warnings: Vec<String>,
}

impl EstimateReport {
    pub fn selected(&self) -> Option<&ScenarioResult> {
        self.scenarios
            .iter()
            .find(|result| result.scenario == self.selected_scenario)
    }
}
