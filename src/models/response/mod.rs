// Response module
// One participant's answer set for an event

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::answer::AnswerType;

/// Maximum length of a participant name.
pub const PARTICIPANT_NAME_MAX: usize = 50;
/// Maximum length of a response comment.
pub const COMMENT_MAX: usize = 500;

/// A participant's answers for an event.
///
/// The trimmed participant name acts as the de facto key: an event holds at
/// most one response per distinct name, and a later submission under the same
/// name replaces the earlier one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub participant_name: String,
    /// Candidate id -> answer. Candidates with no entry read as `Maybe`.
    pub answers: HashMap<String, AnswerType>,
    #[serde(default)]
    pub comment: String,
}

impl Response {
    /// Create a response, trimming the participant name and comment.
    pub fn new(
        participant_name: impl Into<String>,
        answers: HashMap<String, AnswerType>,
        comment: impl Into<String>,
    ) -> Result<Self, String> {
        let response = Self {
            participant_name: participant_name.into().trim().to_string(),
            answers,
            comment: comment.into().trim().to_string(),
        };
        response.validate()?;
        Ok(response)
    }

    /// Validate boundary constraints.
    pub fn validate(&self) -> Result<(), String> {
        if self.participant_name.trim().is_empty() {
            return Err("Please enter your name".to_string());
        }

        if self.participant_name.chars().count() > PARTICIPANT_NAME_MAX {
            return Err(format!(
                "Names are limited to {} characters",
                PARTICIPANT_NAME_MAX
            ));
        }

        if self.comment.chars().count() > COMMENT_MAX {
            return Err(format!("Comments are limited to {} characters", COMMENT_MAX));
        }

        Ok(())
    }

    /// The answer for a candidate, defaulting to `Maybe` when the response
    /// never mentions it. Every read site goes through this so the implicit
    /// default stays in one place.
    pub fn effective_answer(&self, candidate_id: &str) -> AnswerType {
        self.answers
            .get(candidate_id)
            .copied()
            .unwrap_or_default()
    }

    /// True if this response belongs to the given (trimmed) name.
    pub fn is_from(&self, participant_name: &str) -> bool {
        self.participant_name == participant_name.trim()
    }
}
