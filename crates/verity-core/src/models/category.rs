use std::fmt;

use serde::{Deserialize, Serialize};

/// Statement category.
///
/// A closed set: dataset rows carrying any other label are rejected at load
/// time. `General` is the fallback when keyword detection finds nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mathematics,
    Science,
    Geography,
    History,
    Technology,
    Astronomy,
    Chemistry,
    General,
}

impl Category {
    /// All categories, in a stable order.
    pub const ALL: [Category; 8] = [
        Category::Mathematics,
        Category::Science,
        Category::Geography,
        Category::History,
        Category::Technology,
        Category::Astronomy,
        Category::Chemistry,
        Category::General,
    ];

    /// Enumeration order for keyword detection. Ties resolve to the first
    /// category reaching the maximum count.
    pub const DETECTION_ORDER: [Category; 6] = [
        Category::Mathematics,
        Category::Science,
        Category::Geography,
        Category::History,
        Category::Technology,
        Category::Astronomy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mathematics => "mathematics",
            Category::Science => "science",
            Category::Geography => "geography",
            Category::History => "history",
            Category::Technology => "technology",
            Category::Astronomy => "astronomy",
            Category::Chemistry => "chemistry",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
