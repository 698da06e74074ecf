// Answer module
// Availability vocabulary for participant responses

use serde::{Deserialize, Serialize};

/// One participant's availability for one candidate slot.
///
/// Serialized with the upper-case names used in the shareable token
/// (`"ATTEND"`, `"MAYBE"`, `"DECLINE"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnswerType {
    Attend,
    Maybe,
    Decline,
}

impl AnswerType {
    /// All answers in display order.
    pub const ALL: [AnswerType; 3] = [AnswerType::Attend, AnswerType::Maybe, AnswerType::Decline];

    /// Short label for forms and table headers.
    pub fn label(&self) -> &'static str {
        match self {
            AnswerType::Attend => "Attend",
            AnswerType::Maybe => "Maybe",
            AnswerType::Decline => "Decline",
        }
    }

    /// The circle/triangle/cross symbol used throughout the summary table.
    pub fn symbol(&self) -> &'static str {
        match self {
            AnswerType::Attend => "○",
            AnswerType::Maybe => "△",
            AnswerType::Decline => "×",
        }
    }
}

impl Default for AnswerType {
    /// An unanswered candidate reads as `Maybe` everywhere.
    fn default() -> Self {
        AnswerType::Maybe
    }
}
