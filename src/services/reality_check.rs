use crate::services::capacity::{CapacityAnalysis, RiskLevel};

/// Advisory text shown next to a high-risk or overloaded estimate. Every
/// number in it comes straight from the capacity analysis.
pub fn reality_check_message(
    analysis: &CapacityAnalysis,
    total_story_points: u32,
    duration_months: u32,
) -> Option<String> {
    match analysis.risk_level {
        RiskLevel::Normal => None,
        RiskLevel::Overloaded => {
            let suggested = analysis.suggested_duration_months.unwrap_or(duration_months);
            let extension = suggested.saturating_sub(duration_months);
            Some(format!(
                "You allocated {duration_months} months, but the scope ({total_story_points} SP) \
                 requires approximately {suggested} months for this team size. Consider adding \
                 one more team member or extending the timeline by {extension} month(s)."
            ))
        }
        RiskLevel::HighRisk => Some(format!(
            "Your scope ({total_story_points} SP) is achievable but tight for {duration_months} \
             months. Team utilization is {utilization:.0}%. Consider adding a 15-20% time buffer \
             to account for meetings, code reviews, and unexpected delays.",
            utilization = analysis.utilization_percent
        )),
    }
}
