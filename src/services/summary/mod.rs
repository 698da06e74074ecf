//! Response aggregation: per-candidate vote tallies and best-slot ranking.

use std::collections::HashMap;

use crate::models::answer::AnswerType;
use crate::models::candidate::Candidate;
use crate::models::response::Response;

/// Vote counts for one candidate slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub attend: u32,
    pub maybe: u32,
    pub decline: u32,
}

impl VoteTally {
    fn record(&mut self, answer: AnswerType) {
        match answer {
            AnswerType::Attend => self.attend += 1,
            AnswerType::Maybe => self.maybe += 1,
            AnswerType::Decline => self.decline += 1,
        }
    }

    pub fn count(&self, answer: AnswerType) -> u32 {
        match answer {
            AnswerType::Attend => self.attend,
            AnswerType::Maybe => self.maybe,
            AnswerType::Decline => self.decline,
        }
    }

    /// Ranking key: attend first, maybe breaks ties.
    fn ranking_key(&self) -> (u32, u32) {
        (self.attend, self.maybe)
    }
}

/// Aggregated results for an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Candidate id -> tally. Every candidate has an entry.
    pub totals: HashMap<String, VoteTally>,
    /// Ids of the best-ranked candidate(s); empty when no slot has an
    /// attend vote.
    pub best_candidate_ids: Vec<String>,
}

impl Summary {
    pub fn tally(&self, candidate_id: &str) -> VoteTally {
        self.totals.get(candidate_id).copied().unwrap_or_default()
    }

    pub fn is_best(&self, candidate_id: &str) -> bool {
        self.best_candidate_ids.iter().any(|id| id == candidate_id)
    }
}

/// Compute tallies and the best-ranked candidate set.
///
/// The tally loop walks each response's explicit answer entries; a response
/// that never mentions a candidate contributes nothing to its counters, even
/// though that candidate's displayed per-response cell reads `Maybe` via
/// [`Response::effective_answer`]. Entries for ids not in the candidate set
/// are ignored.
///
/// Ranking is by `(attend desc, maybe desc)`. A slate whose top pair has
/// zero attend votes is never highlighted; otherwise every candidate whose
/// pair equals the top pair shares the highlight.
pub fn summarize(candidates: &[Candidate], responses: &[Response]) -> Summary {
    let mut totals: HashMap<String, VoteTally> = candidates
        .iter()
        .map(|c| (c.id.clone(), VoteTally::default()))
        .collect();

    for response in responses {
        for (id, answer) in &response.answers {
            if let Some(tally) = totals.get_mut(id) {
                tally.record(*answer);
            }
        }
    }

    let mut ranked: Vec<(&str, (u32, u32))> = candidates
        .iter()
        .map(|c| (c.id.as_str(), totals[&c.id].ranking_key()))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let best_candidate_ids = match ranked.first() {
        Some(&(_, top_key)) if top_key.0 > 0 => ranked
            .iter()
            .filter(|(_, key)| *key == top_key)
            .map(|(id, _)| id.to_string())
            .collect(),
        _ => Vec::new(),
    };

    Summary {
        totals,
        best_candidate_ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::at_hm;
    use chrono::NaiveDate;

    fn candidate(id: &str, hour: u32) -> Candidate {
        let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        Candidate::new(id, at_hm(day, hour, 0), at_hm(day, hour + 1, 0)).unwrap()
    }

    fn response(name: &str, entries: &[(&str, AnswerType)]) -> Response {
        let answers = entries
            .iter()
            .map(|(id, answer)| (id.to_string(), *answer))
            .collect();
        Response::new(name, answers, "").unwrap()
    }

    #[test]
    fn test_every_candidate_gets_a_tally() {
        let candidates = vec![candidate("a", 9), candidate("b", 11)];
        let summary = summarize(&candidates, &[]);

        assert_eq!(summary.totals.len(), 2);
        assert_eq!(summary.tally("a"), VoteTally::default());
        assert!(summary.best_candidate_ids.is_empty());
    }

    #[test]
    fn test_tallies_count_explicit_answers() {
        let candidates = vec![candidate("a", 9), candidate("b", 11)];
        let responses = vec![
            response("Alice", &[("a", AnswerType::Attend), ("b", AnswerType::Decline)]),
            response("Bob", &[("a", AnswerType::Attend), ("b", AnswerType::Maybe)]),
            response("Carol", &[("a", AnswerType::Maybe), ("b", AnswerType::Attend)]),
        ];

        let summary = summarize(&candidates, &responses);
        assert_eq!(summary.tally("a"), VoteTally { attend: 2, maybe: 1, decline: 0 });
        assert_eq!(summary.tally("b"), VoteTally { attend: 1, maybe: 1, decline: 1 });
        assert_eq!(summary.best_candidate_ids, vec!["a".to_string()]);
    }

    #[test]
    fn test_unmentioned_candidate_gets_no_votes() {
        // A response that omits a candidate leaves its counters at zero;
        // the Maybe default applies only at display sites.
        let candidates = vec![candidate("a", 9), candidate("b", 11)];
        let responses = vec![response("Alice", &[("a", AnswerType::Attend)])];

        let summary = summarize(&candidates, &responses);
        assert_eq!(summary.tally("b"), VoteTally::default());
    }

    #[test]
    fn test_stale_answer_ids_are_ignored() {
        let candidates = vec![candidate("a", 9)];
        let responses = vec![response(
            "Alice",
            &[("a", AnswerType::Attend), ("deleted", AnswerType::Attend)],
        )];

        let summary = summarize(&candidates, &responses);
        assert_eq!(summary.totals.len(), 1);
        assert_eq!(summary.tally("a").attend, 1);
    }

    #[test]
    fn test_maybe_breaks_attend_ties() {
        // A: (attend 3, maybe 1), B: (attend 3, maybe 2) -> best is B alone
        let candidates = vec![candidate("a", 9), candidate("b", 11)];
        let mut responses = Vec::new();
        for name in ["p1", "p2", "p3"] {
            responses.push(response(
                name,
                &[("a", AnswerType::Attend), ("b", AnswerType::Attend)],
            ));
        }
        responses.push(response("p4", &[("a", AnswerType::Maybe), ("b", AnswerType::Maybe)]));
        responses.push(response("p5", &[("a", AnswerType::Decline), ("b", AnswerType::Maybe)]));

        let summary = summarize(&candidates, &responses);
        assert_eq!(summary.tally("a"), VoteTally { attend: 3, maybe: 1, decline: 1 });
        assert_eq!(summary.tally("b"), VoteTally { attend: 3, maybe: 2, decline: 0 });
        assert_eq!(summary.best_candidate_ids, vec!["b".to_string()]);
        assert!(summary.is_best("b"));
        assert!(!summary.is_best("a"));
    }

    #[test]
    fn test_exact_ties_share_the_highlight() {
        let candidates = vec![candidate("a", 9), candidate("b", 11), candidate("c", 13)];
        let responses = vec![
            response(
                "Alice",
                &[
                    ("a", AnswerType::Attend),
                    ("b", AnswerType::Attend),
                    ("c", AnswerType::Decline),
                ],
            ),
        ];

        let summary = summarize(&candidates, &responses);
        assert_eq!(summary.best_candidate_ids.len(), 2);
        assert!(summary.is_best("a"));
        assert!(summary.is_best("b"));
    }

    #[test]
    fn test_zero_attend_suppresses_best() {
        let candidates = vec![candidate("a", 9), candidate("b", 11)];
        let responses = vec![
            response("Alice", &[("a", AnswerType::Maybe), ("b", AnswerType::Decline)]),
            response("Bob", &[("a", AnswerType::Maybe), ("b", AnswerType::Maybe)]),
        ];

        let summary = summarize(&candidates, &responses);
        assert!(summary.best_candidate_ids.is_empty());
    }

    #[test]
    fn test_response_order_does_not_change_results() {
        let candidates = vec![candidate("a", 9), candidate("b", 11)];
        let responses = vec![
            response("Alice", &[("a", AnswerType::Attend)]),
            response("Bob", &[("b", AnswerType::Attend), ("a", AnswerType::Maybe)]),
            response("Carol", &[("a", AnswerType::Decline), ("b", AnswerType::Attend)]),
        ];

        let forward = summarize(&candidates, &responses);
        let mut reversed = responses.clone();
        reversed.reverse();
        let backward = summarize(&candidates, &reversed);

        assert_eq!(forward, backward);
    }
}
