use serde::Serialize;

use crate::domain::scenario::Scenario;
use crate::services::burn_rate::BurnRate;

/// Tools and vendors are budgeted as a flat share of labor cost.
pub const TOOLS_SHARE_OF_LABOR: f64 = 0.10;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ScenarioProjection {
    pub base_cost: f64,
    pub optimistic: f64,
    pub realistic: f64,
    pub pessimistic: f64,
}

impl ScenarioProjection {
    pub fn cost_of(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Optimistic => self.optimistic,
            Scenario::Realistic => self.realistic,
            Scenario::Pessimistic => self.pessimistic,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct BudgetBreakdown {
    pub labor: f64,
    pub tools: f64,
    /// Remainder of the scenario total. Negative when the recurring fixed
    /// costs do not cover the tools share for this scenario.
    pub risk_buffer: f64,
}

impl BudgetBreakdown {
    pub fn total(&self) -> f64 {
        self.labor + self.tools + self.risk_buffer
    }

    /// Whole-number share of each component in the total, in the order
    /// labor, tools, risk buffer. The rounded shares need not add up to 100.
    pub fn percentages(&self) -> BreakdownPercentages {
        let total = self.total();
        let share = |component: f64| {
            if total == 0.0 {
                0
            } else {
                (component / total * 100.0).round() as i64
            }
        };
        BreakdownPercentages {
            labor: share(self.labor),
            tools: share(self.tools),
            risk_buffer: share(self.risk_buffer),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakdownPercentages {
    pub labor: i64,
    pub tools: i64,
    pub risk_buffer: i64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub total_cost: f64,
    pub labor_cost: f64,
    pub tools_cost: f64,
    pub risk_buffer_cost: f64,
    pub percentages: BreakdownPercentages,
    pub negative_risk_buffer: bool,
}

pub fn base_cost(burn_rate: &BurnRate, duration_months: u32) -> f64 {
    burn_rate.total * f64::from(duration_months)
}

pub fn project_scenarios(burn_rate: &BurnRate, duration_months: u32) -> ScenarioProjection {
    let base_cost = base_cost(burn_rate, duration_months);
    ScenarioProjection {
        base_cost,
        optimistic: base_cost * Scenario::Optimistic.multiplier(),
        realistic: base_cost * Scenario::Realistic.multiplier(),
        pessimistic: base_cost * Scenario::Pessimistic.multiplier(),
    }
}

pub fn breakdown(scenario: Scenario, burn_rate: &BurnRate, duration_months: u32) -> BudgetBreakdown {
    let total = base_cost(burn_rate, duration_months) * scenario.multiplier();
    let labor = burn_rate.labor * f64::from(duration_months);
    let tools = labor * TOOLS_SHARE_OF_LABOR;
    BudgetBreakdown {
        labor,
        tools,
        risk_buffer: total - labor - tools,
    }
}

pub fn scenario_result(scenario: Scenario, burn_rate: &BurnRate, duration_months: u32) -> ScenarioResult {
    let breakdown = breakdown(scenario, burn_rate, duration_months);
    let negative_risk_buffer = breakdown.risk_buffer < 0.0;
    if negative_risk_buffer {
        tracing::warn!(
            scenario = scenario.label(),
            risk_buffer = breakdown.risk_buffer,
            "risk buffer is negative"
        );
    }

    ScenarioResult {
        scenario,
        total_cost: base_cost(burn_rate, duration_months) * scenario.multiplier(),
        labor_cost: breakdown.labor,
        tools_cost: breakdown.tools,
        risk_buffer_cost: breakdown.risk_buffer,
        percentages: breakdown.percentages(),
        negative_risk_buffer,
    }
}

pub fn all_scenario_results(burn_rate: &BurnRate, duration_months: u32) -> Vec<ScenarioResult> {
    Scenario::ALL
        .iter()
        .map(|scenario| scenario_result(*scenario, burn_rate, duration_months))
        .collect()
}
