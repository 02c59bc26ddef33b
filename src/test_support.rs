use crate::domain::cost::{CostCategory, FixedCost};
use crate::domain::feature::{Complexity, Feature, StoryPoints};
use crate::domain::team_member::{CompensationType, TeamMember};

pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-6 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

pub fn hourly_member(role: &str, rate: f64, allocation: f64) -> TeamMember {
    TeamMember::new(role, CompensationType::Hourly, rate, allocation)
}

pub fn monthly_member(role: &str, salary: f64, allocation: f64) -> TeamMember {
    TeamMember::new(role, CompensationType::Monthly, salary, allocation)
}

pub fn fixed_cost(name: &str, monthly_cost: f64) -> FixedCost {
    FixedCost::new(name, CostCategory::Fixed, monthly_cost)
}

pub fn feature(points: u32) -> Feature {
    let story_points = StoryPoints::new(points).unwrap();
    Feature::new(Complexity::Medium, story_points)
}

/// Builds a feature list worth exactly `total` story points, greedily using
/// the largest sizes first.
pub fn features_totaling(total: u32) -> Vec<Feature> {
    let mut remaining = total;
    let mut features = Vec::new();
    for size in [13, 8, 5, 3, 2, 1] {
        while remaining >= size {
            features.push(feature(size));
            remaining -= size;
        }
    }
    features
}

/// The two-person team used throughout the cost examples: a backend
/// developer at 90/h full time and a project manager at 6000/mo on 60%.
pub fn reference_team() -> Vec<TeamMember> {
    vec![
        hourly_member("Backend Developer", 90.0, 100.0),
        monthly_member("Project Manager", 6000.0, 60.0),
    ]
}
