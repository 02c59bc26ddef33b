/// The Fibonacci-like scale features are sized on.
pub const STORY_POINT_SCALE: [u32; 6] = [1, 2, 3, 5, 8, 13];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StoryPoints(u32);

impl StoryPoints {
    /// Returns `None` for values outside [`STORY_POINT_SCALE`].
    pub fn new(value: u32) -> Option<Self> {
        STORY_POINT_SCALE.contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

/// A unit of project scope. Complexity is descriptive; only the story
/// points feed capacity analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: Option<String>,
    pub complexity: Complexity,
    pub story_points: StoryPoints,
}

impl Feature {
    pub fn new(complexity: Complexity, story_points: StoryPoints) -> Self {
        Self {
            name: None,
            complexity,
            story_points,
        }
    }
}

pub fn total_story_points(features: &[Feature]) -> u32 {
    features.iter().map(|f| f.story_points.value()).sum()
}
