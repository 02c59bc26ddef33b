use crate::domain::employee::Employee;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompensationType {
    Hourly,
    Monthly,
}

impl CompensationType {
    /// Case-insensitive parse of `hourly` / `monthly`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hourly" => Some(CompensationType::Hourly),
            "monthly" => Some(CompensationType::Monthly),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompensationType::Hourly => "hourly",
            CompensationType::Monthly => "monthly",
        }
    }
}

/// One person's assignment to a project.
///
/// The normalized monthly cost is never stored on the member; it is derived
/// from the current compensation fields every time it is asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub name: Option<String>,
    pub role: String,
    pub compensation_type: CompensationType,
    pub cost_value: f64,
    pub allocation_percentage: f64,
}

impl TeamMember {
    pub fn new(
        role: &str,
        compensation_type: CompensationType,
        cost_value: f64,
        allocation_percentage: f64,
    ) -> Self {
        Self {
            name: None,
            role: role.to_string(),
            compensation_type,
            cost_value,
            allocation_percentage,
        }
    }

    /// A blank roster entry: hourly, no rate yet, fully allocated.
    pub fn blank() -> Self {
        Self::new("", CompensationType::Hourly, 0.0, 100.0)
    }

    /// Copies role and compensation from the company directory. Allocation
    /// is project specific and has to be supplied by the caller.
    pub fn from_employee(employee: &Employee, allocation_percentage: f64) -> Self {
        Self {
            name: Some(employee.name.clone()),
            role: employee.role.clone(),
            compensation_type: employee.compensation_type,
            cost_value: employee.rate,
            allocation_percentage,
        }
    }
}
