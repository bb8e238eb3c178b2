use serde::{Deserialize, Serialize};

/// Highest score the strength meter displays.
pub const MAX_STRENGTH_SCORE: u8 = 5;

/// Visual tier of a strength label, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Lowest,
    Low,
    Mid,
    High,
    Highest,
    /// Only produced for scores outside the meter's range.
    Undefined,
}

/// Text and tier shown next to a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthLabel {
    pub text: &'static str,
    pub severity: Severity,
}
