use serde::{Deserialize, Serialize};

/// One poem of the corpus. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Poem {
    pub id: u32,
    pub author: String,
    /// Upper verse (上の句).
    pub upper: String,
    /// Lower verse (下の句).
    pub lower: String,
    pub reading_upper: String,
    pub reading_lower: String,
    pub description: String,
}
