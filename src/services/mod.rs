pub mod budget_tracking;
pub mod burn_rate;
pub mod capacity;
pub mod compensation;
pub mod employees_yaml;
pub mod estimate;
pub mod estimate_types;
pub mod project_template;
pub mod project_yaml;
pub mod reality_check;
pub mod scenarios;
pub mod team_composition;
