use crate::domain::team_member::CompensationType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Busy,
    Offline,
}

/// An entry of the company-wide employee directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    pub role: String,
    pub compensation_type: CompensationType,
    pub rate: f64,
    pub tech_stack: Vec<String>,
    pub availability: Availability,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDirectory {
    pub employees: Vec<Employee>,
}

impl EmployeeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.name == name)
    }

    pub fn unique_roles(&self) -> Vec<String> {
        let mut roles: Vec<String> = self.employees.iter().map(|e| e.role.clone()).collect();
        roles.sort();
        roles.dedup();
        roles
    }

    pub fn unique_tech_stacks(&self) -> Vec<String> {
        let mut stacks: Vec<String> = self
            .employees
            .iter()
            .flat_map(|e| e.tech_stack.iter().cloned())
            .collect();
        stacks.sort();
        stacks.dedup();
        stacks
    }

    pub fn with_availability(&self, availability: Availability) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|employee| employee.availability == availability)
            .collect()
    }
}
