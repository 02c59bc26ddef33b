/// Money amounts entering the engine have to be finite and non-negative.
pub fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostCategory {
    Fixed,
    Vendor,
}

/// A recurring expense that is paid every month of the project.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedCost {
    pub name: String,
    pub category: CostCategory,
    pub monthly_cost: f64,
}

impl FixedCost {
    pub fn new(name: &str, category: CostCategory, monthly_cost: f64) -> Self {
        Self {
            name: name.to_string(),
            category,
            monthly_cost,
        }
    }
}

/// An expense paid once. Kept out of the burn rate.
#[derive(Debug, Clone, PartialEq)]
pub struct OneTimeCost {
    pub name: String,
    pub cost: f64,
}
