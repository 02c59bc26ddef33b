use serde::Serialize;

use crate::domain::team_member::TeamMember;
use crate::services::compensation::normalize_monthly_cost;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoleSummary {
    pub role: String,
    pub member_count: usize,
    pub total_cost: f64,
}

/// Groups members by their exact role label and totals each role's cost
/// over the project. Roles keep the order of their first appearance.
pub fn summarize_by_role(members: &[TeamMember], duration_months: u32) -> Vec<RoleSummary> {
    let mut summaries: Vec<RoleSummary> = Vec::new();
    for member in members {
        let cost = normalize_monthly_cost(member) * f64::from(duration_months);
        match summaries.iter_mut().find(|s| s.role == member.role) {
            Some(summary) => {
                summary.member_count += 1;
                summary.total_cost += cost;
            }
            None => summaries.push(RoleSummary {
                role: member.role.clone(),
                member_count: 1,
                total_cost: cost,
            }),
        }
    }
    summaries
}
