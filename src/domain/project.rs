use chrono::NaiveDate;

use crate::domain::cost::{FixedCost, OneTimeCost};
use crate::domain::feature::{Feature, total_story_points};
use crate::domain::team_member::TeamMember;

/// Approved budget and the amount already spent against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Budget {
    pub approved: f64,
    pub spent: f64,
}

/// Owns the inputs of an estimate. Every projection is derived from these
/// lists on demand and never stored back here.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub duration_months: u32,
    pub team_members: Vec<TeamMember>,
    pub features: Vec<Feature>,
    pub fixed_costs: Vec<FixedCost>,
    pub one_time_costs: Vec<OneTimeCost>,
    pub budget: Option<Budget>,
}

impl Project {
    pub fn new(name: &str, duration_months: u32) -> Self {
        Self {
            name: name.to_string(),
            start_date: None,
            duration_months,
            team_members: Vec::new(),
            features: Vec::new(),
            fixed_costs: Vec::new(),
            one_time_costs: Vec::new(),
            budget: None,
        }
    }

    pub fn total_story_points(&self) -> u32 {
        total_story_points(&self.features)
    }

    pub fn total_one_time_cost(&self) -> f64 {
        self.one_time_costs.iter().map(|c| c.cost).sum()
    }
}
