use serde::Serialize;

use crate::domain::feature::{Feature, total_story_points};
use crate::domain::team_member::TeamMember;
use crate::services::compensation::HOURS_PER_MONTH;

/// Effort hours one story point stands for.
pub const HOURS_PER_STORY_POINT: f64 = 8.0;
pub const HIGH_RISK_UTILIZATION: f64 = 85.0;
pub const OVERLOAD_UTILIZATION: f64 = 100.0;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Normal,
    HighRisk,
    Overloaded,
}

impl RiskLevel {
    pub fn from_utilization(utilization_percent: f64) -> Self {
        if utilization_percent > OVERLOAD_UTILIZATION {
            RiskLevel::Overloaded
        } else if utilization_percent > HIGH_RISK_UTILIZATION {
            RiskLevel::HighRisk
        } else {
            RiskLevel::Normal
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CapacityAnalysis {
    pub capacity_hours: f64,
    pub demand_hours: f64,
    pub utilization_percent: f64,
    pub risk_level: RiskLevel,
    /// Duration at which the team would be exactly fully utilized. Only
    /// present for high-risk and overloaded projects.
    pub suggested_duration_months: Option<u32>,
}

pub fn capacity_hours(members: &[TeamMember], duration_months: u32) -> f64 {
    members
        .iter()
        .map(|m| HOURS_PER_MONTH * (m.allocation_percentage / 100.0) * f64::from(duration_months))
        .sum()
}

pub fn demand_hours(features: &[Feature]) -> f64 {
    f64::from(total_story_points(features)) * HOURS_PER_STORY_POINT
}

pub fn analyze_capacity(
    members: &[TeamMember],
    features: &[Feature],
    duration_months: u32,
) -> CapacityAnalysis {
    let capacity_hours = capacity_hours(members, duration_months);
    let demand_hours = demand_hours(features);

    // An unstaffed project has no capacity to divide by; report it idle.
    let utilization_percent = if capacity_hours > 0.0 {
        demand_hours * 100.0 / capacity_hours
    } else {
        0.0
    };
    let risk_level = RiskLevel::from_utilization(utilization_percent);

    let suggested_duration_months = match risk_level {
        RiskLevel::Normal => None,
        RiskLevel::HighRisk | RiskLevel::Overloaded => {
            let monthly_capacity = capacity_hours / f64::from(duration_months);
            suggested_months(demand_hours / monthly_capacity)
        }
    };

    tracing::debug!(
        capacity_hours,
        demand_hours,
        utilization_percent,
        ?risk_level,
        "analyzed capacity"
    );

    CapacityAnalysis {
        capacity_hours,
        demand_hours,
        utilization_percent,
        risk_level,
        suggested_duration_months,
    }
}

/// `None` when the month count does not fit a `u32`, which only happens for
/// vanishingly small allocations.
fn suggested_months(months: f64) -> Option<u32> {
    let months = months.ceil();
    if months.is_finite() && months <= f64::from(u32::MAX) {
        Some(months as u32)
    } else {
        tracing::warn!(months, "suggested duration out of range, omitting it");
        None
    }
}
