//! The four scoring stages. Each stage is a pure function from one bullet
//! to a `StageScore`; stages never read each other's output.

pub mod ats;
pub mod indicators;
pub mod principles;
pub mod recruiter;

use serde::{Deserialize, Serialize};

/// One of the four independent scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Indicators,
    Ats,
    RecruiterUx,
    PmIntelligence,
}

impl Stage {
    /// Evaluation order; also the display order in comparison views.
    pub const ALL: [Stage; 4] = [
        Stage::Indicators,
        Stage::Ats,
        Stage::RecruiterUx,
        Stage::PmIntelligence,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Indicators => "Strength indicators",
            Stage::Ats => "ATS structure",
            Stage::RecruiterUx => "Recruiter scan",
            Stage::PmIntelligence => "PM principles",
        }
    }
}

/// Score produced by a single stage. `details` is display-only copy for
/// comparison views; decision logic reads `score` and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageScore {
    pub score: u32,
    pub details: Vec<String>,
}

impl StageScore {
    /// Clamps into [0, 100] so no stage can leak an out-of-range score.
    pub(crate) fn new(score: u32, details: Vec<String>) -> Self {
        Self {
            score: score.min(100),
            details,
        }
    }
}
