use serde::Serialize;

use crate::domain::cost::FixedCost;
use crate::domain::team_member::TeamMember;
use crate::services::compensation::normalize_monthly_cost;

/// Monthly spend of a project.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct BurnRate {
    pub labor: f64,
    pub fixed: f64,
    pub total: f64,
}

pub fn compute_burn_rate(members: &[TeamMember], fixed_costs: &[FixedCost]) -> BurnRate {
    let labor: f64 = members.iter().map(normalize_monthly_cost).sum();
    let fixed: f64 = fixed_costs.iter().map(|cost| cost.monthly_cost).sum();
    BurnRate {
        labor,
        fixed,
        total: labor + fixed,
    }
}
