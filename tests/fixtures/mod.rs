// Shared fixtures for integration tests
#![allow(dead_code)]

use std::collections::HashMap;

use chrono::NaiveDate;
use slot_poll::models::answer::AnswerType;
use slot_poll::models::candidate::Candidate;
use slot_poll::models::event_data::EventData;
use slot_poll::models::response::Response;
use slot_poll::services::candidate_set::{CandidateSet, IdSource};
use slot_poll::utils::date::at_hm;

/// Deterministic id source so tests can refer to candidates by id.
pub struct SeqIds {
    next: u32,
}

impl SeqIds {
    pub fn new() -> Self {
        Self { next: 0 }
    }
}

impl IdSource for SeqIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("c{}", self.next)
    }
}

/// A fixed Monday so tests don't depend on the wall clock.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

pub fn seq_set() -> CandidateSet {
    CandidateSet::with_id_source(Box::new(SeqIds::new()))
}

pub fn timed_candidate(id: &str, day: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Candidate {
    Candidate::new(id, at_hm(day, start.0, start.1), at_hm(day, end.0, end.1)).unwrap()
}

pub fn response(name: &str, entries: &[(&str, AnswerType)], comment: &str) -> Response {
    let answers: HashMap<String, AnswerType> = entries
        .iter()
        .map(|(id, answer)| (id.to_string(), *answer))
        .collect();
    Response::new(name, answers, comment).unwrap()
}

/// A small event with two timed candidates and one all-day candidate.
pub fn sample_event() -> EventData {
    let candidates = vec![
        timed_candidate("c1", monday(), (10, 0), (11, 0)),
        timed_candidate("c2", monday(), (14, 0), (15, 30)),
        Candidate::all_day("c3", monday()),
    ];
    EventData::new("Project kickoff", "First sync of the quarter", candidates).unwrap()
}
