pub mod cost;
pub mod employee;
pub mod feature;
pub mod project;
pub mod scenario;
pub mod team_member;
