use chrono::NaiveDate;

use crate::domain::cost::{CostCategory, FixedCost};
use crate::domain::feature::{Complexity, Feature, StoryPoints};
use crate::domain::project::Project;
use crate::domain::team_member::{CompensationType, TeamMember};

/// The sample project a new estimate starts from.
pub fn starter_project(start_date: Option<NaiveDate>) -> Project {
    let mut project = Project::new("E-Commerce Platform Redesign", 6);
    project.start_date = start_date;
    project.team_members = vec![
        named_member("Sarah Johnson", "Frontend Developer", CompensationType::Monthly, 5500.0, 100.0),
        named_member("Michael Chen", "Backend Developer", CompensationType::Hourly, 90.0, 100.0),
        named_member("Emma Williams", "Project Manager", CompensationType::Monthly, 6000.0, 60.0),
    ];
    project.features = [
        ("User Authentication System", Complexity::High, 13),
        ("Product Catalog", Complexity::Medium, 8),
        ("Payment Gateway Integration", Complexity::High, 13),
        ("Admin Dashboard", Complexity::Medium, 5),
    ]
    .into_iter()
    .filter_map(|(name, complexity, points)| {
        StoryPoints::new(points).map(|story_points| Feature {
            name: Some(name.to_string()),
            complexity,
            story_points,
        })
    })
    .collect();
    project.fixed_costs = vec![
        FixedCost::new("AWS Infrastructure", CostCategory::Vendor, 2500.0),
        FixedCost::new("SaaS Licenses", CostCategory::Vendor, 800.0),
    ];
    project
}

fn named_member(
    name: &str,
    role: &str,
    compensation_type: CompensationType,
    cost_value: f64,
    allocation_percentage: f64,
) -> TeamMember {
    TeamMember {
        name: Some(name.to_string()),
        ..TeamMember::new(role, compensation_type, cost_value, allocation_percentage)
    }
}
