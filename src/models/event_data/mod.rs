// EventData module
// The aggregate root serialized into the shareable token

use serde::{Deserialize, Serialize};

use crate::models::candidate::Candidate;
use crate::models::response::Response;

/// Maximum length of an event name.
pub const EVENT_NAME_MAX: usize = 100;
/// Maximum length of an event description.
pub const DESCRIPTION_MAX: usize = 500;

/// Everything there is to know about one scheduling poll.
///
/// The encoded token is the sole source of truth; an in-memory `EventData`
/// is a transient decode of it and is discarded on navigation away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub event_name: String,
    #[serde(default)]
    pub description: String,
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub responses: Vec<Response>,
}

impl EventData {
    /// Create a new event with no responses yet.
    pub fn new(
        event_name: impl Into<String>,
        description: impl Into<String>,
        candidates: Vec<Candidate>,
    ) -> Result<Self, String> {
        let event = Self {
            event_name: event_name.into().trim().to_string(),
            description: description.into(),
            candidates,
            responses: Vec::new(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Validate the creation-boundary constraints.
    pub fn validate(&self) -> Result<(), String> {
        if self.event_name.trim().is_empty() {
            return Err("Please enter an event name".to_string());
        }

        if self.event_name.chars().count() > EVENT_NAME_MAX {
            return Err(format!(
                "Event names are limited to {} characters",
                EVENT_NAME_MAX
            ));
        }

        if self.description.chars().count() > DESCRIPTION_MAX {
            return Err(format!(
                "Descriptions are limited to {} characters",
                DESCRIPTION_MAX
            ));
        }

        if self.candidates.is_empty() {
            return Err("Select at least one candidate slot".to_string());
        }

        Ok(())
    }

    /// Find the stored response for a (trimmed) participant name.
    pub fn response_for(&self, participant_name: &str) -> Option<&Response> {
        self.responses.iter().find(|r| r.is_from(participant_name))
    }

    /// Insert a response, replacing any earlier one from the same trimmed
    /// name wholesale. Responses are never partially merged.
    pub fn upsert_response(&mut self, response: Response) {
        match self
            .responses
            .iter_mut()
            .find(|r| r.is_from(&response.participant_name))
        {
            Some(existing) => *existing = response,
            None => self.responses.push(response),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::answer::AnswerType;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn sample_candidates() -> Vec<Candidate> {
        let start = chrono::Local
            .with_ymd_and_hms(2024, 6, 3, 10, 0, 0)
            .unwrap();
        let end = chrono::Local
            .with_ymd_and_hms(2024, 6, 3, 11, 0, 0)
            .unwrap();
        vec![Candidate::new("c1", start, end).unwrap()]
    }

    fn response(name: &str, answer: AnswerType) -> Response {
        let mut answers = HashMap::new();
        answers.insert("c1".to_string(), answer);
        Response::new(name, answers, "").unwrap()
    }

    #[test]
    fn test_new_event_success() {
        let event = EventData::new("Team offsite", "bring snacks", sample_candidates()).unwrap();
        assert_eq!(event.event_name, "Team offsite");
        assert!(event.responses.is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = EventData::new("  ", "", sample_candidates());
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_candidate_set_rejected() {
        let result = EventData::new("Team offsite", "", Vec::new());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("at least one"));
    }

    #[test]
    fn test_name_length_limit() {
        let long_name = "x".repeat(EVENT_NAME_MAX + 1);
        assert!(EventData::new(long_name, "", sample_candidates()).is_err());
    }

    #[test]
    fn test_upsert_replaces_same_name_wholesale() {
        let mut event = EventData::new("Standup", "", sample_candidates()).unwrap();

        event.upsert_response(response("Alice", AnswerType::Attend));
        event.upsert_response(response("Bob", AnswerType::Decline));
        assert_eq!(event.responses.len(), 2);

        // Resubmitting under the same name replaces, never appends
        event.upsert_response(response("Alice", AnswerType::Decline));
        assert_eq!(event.responses.len(), 2);
        assert_eq!(
            event.response_for("Alice").unwrap().effective_answer("c1"),
            AnswerType::Decline
        );
    }

    #[test]
    fn test_upsert_matches_on_trimmed_name() {
        let mut event = EventData::new("Standup", "", sample_candidates()).unwrap();

        event.upsert_response(response("Alice", AnswerType::Attend));
        event.upsert_response(response("  Alice ", AnswerType::Maybe));

        assert_eq!(event.responses.len(), 1);
        assert_eq!(
            event.response_for("Alice").unwrap().effective_answer("c1"),
            AnswerType::Maybe
        );
    }
}
