use serde::Serialize;

use crate::domain::project::Budget;

pub const WATCH_USAGE_PERCENT: i64 = 70;
pub const CRITICAL_USAGE_PERCENT: i64 = 90;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetHealth {
    OnTrack,
    Watch,
    Critical,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct BudgetUsage {
    pub approved: f64,
    pub spent: f64,
    pub remaining: f64,
    pub usage_percent: i64,
    pub health: BudgetHealth,
}

pub fn budget_usage(budget: &Budget) -> BudgetUsage {
    let usage_percent = if budget.approved > 0.0 {
        (budget.spent / budget.approved * 100.0).round() as i64
    } else {
        0
    };
    let health = if usage_percent > CRITICAL_USAGE_PERCENT {
        BudgetHealth::Critical
    } else if usage_percent > WATCH_USAGE_PERCENT {
        BudgetHealth::Watch
    } else {
        BudgetHealth::OnTrack
    };

    BudgetUsage {
        approved: budget.approved,
        spent: budget.spent,
        remaining: budget.approved - budget.spent,
        usage_percent,
        health,
    }
}
