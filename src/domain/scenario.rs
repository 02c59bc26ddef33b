use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scenario {
    Optimistic,
    Realistic,
    Pessimistic,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::Optimistic,
        Scenario::Realistic,
        Scenario::Pessimistic,
    ];

    /// Fixed cost multiplier applied to the base cost.
    ///
    /// Realistic assumes 80% productive time (1 / 0.8). Pessimistic adds a
    /// flat 30% contingency.
    pub fn multiplier(self) -> f64 {
        match self {
            Scenario::Optimistic => 1.00,
            Scenario::Realistic => 1.25,
            Scenario::Pessimistic => 1.30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scenario::Optimistic => "Optimistic",
            Scenario::Realistic => "Realistic",
            Scenario::Pessimistic => "Pessimistic",
        }
    }
}
