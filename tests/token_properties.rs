// Property-based tests for the token boundary and aggregation determinism

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use slot_poll::models::answer::AnswerType;
use slot_poll::models::candidate::Candidate;
use slot_poll::models::event_data::EventData;
use slot_poll::models::response::Response;
use slot_poll::services::summary::summarize;
use slot_poll::services::token;
use slot_poll::utils::date::at_hm;

fn base_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn answer_strategy() -> impl Strategy<Value = AnswerType> {
    prop_oneof![
        Just(AnswerType::Attend),
        Just(AnswerType::Maybe),
        Just(AnswerType::Decline),
    ]
}

fn candidate_strategy() -> impl Strategy<Value = Candidate> {
    (
        "[a-z0-9]{8}",
        0i64..365,
        0u32..23,
        prop_oneof![Just(0u32), Just(15), Just(30), Just(45)],
        30i64..480,
        any::<bool>(),
    )
        .prop_map(|(id, day_offset, hour, minute, duration, is_all_day)| {
            let day = base_day() + Duration::days(day_offset);
            if is_all_day {
                Candidate::all_day(id, day)
            } else {
                let start = at_hm(day, hour, minute);
                Candidate {
                    id,
                    start_date: start,
                    end_date: start + Duration::minutes(duration),
                    is_all_day: false,
                }
            }
        })
}

fn response_strategy() -> impl Strategy<Value = Response> {
    (
        "[A-Za-z][A-Za-z ]{0,18}[A-Za-z]",
        prop::collection::hash_map("[a-z0-9]{8}", answer_strategy(), 0..6),
        "[ -~]{0,40}",
    )
        .prop_map(|(name, answers, comment)| Response {
            participant_name: name,
            answers,
            comment,
        })
}

fn event_strategy() -> impl Strategy<Value = EventData> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,40}",
        "[ -~]{0,80}",
        prop::collection::vec(candidate_strategy(), 1..8),
        prop::collection::vec(response_strategy(), 0..6),
    )
        .prop_map(|(event_name, description, candidates, responses)| EventData {
            event_name,
            description,
            candidates,
            responses,
        })
}

proptest! {
    #[test]
    fn prop_token_round_trips(event in event_strategy()) {
        let encoded = token::encode(&event).unwrap();
        let decoded = token::decode(&encoded).unwrap();
        prop_assert_eq!(decoded, event);
    }

    #[test]
    fn prop_token_is_url_safe(event in event_strategy()) {
        let encoded = token::encode(&event).unwrap();
        prop_assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn prop_summary_ignores_response_order(
        candidates in prop::collection::vec(candidate_strategy(), 1..6),
        responses in prop::collection::vec(response_strategy(), 0..8),
        seed in any::<u64>(),
    ) {
        let forward = summarize(&candidates, &responses);

        // Deterministic permutation from the generated seed
        let mut reordered = responses.clone();
        let mut seed = seed;
        for i in (1..reordered.len()).rev() {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (seed % (i as u64 + 1)) as usize;
            reordered.swap(i, j);
        }
        let backward = summarize(&candidates, &reordered);

        prop_assert_eq!(forward.totals, backward.totals);
        prop_assert_eq!(forward.best_candidate_ids, backward.best_candidate_ids);
    }

    #[test]
    fn prop_best_candidates_need_an_attend_vote(
        candidates in prop::collection::vec(candidate_strategy(), 1..6),
        names in prop::collection::vec("[A-Za-z]{3,10}", 0..6),
        decline_only in any::<bool>(),
    ) {
        // Responses that only ever answer Maybe or Decline never produce a best slot
        let answer = if decline_only { AnswerType::Decline } else { AnswerType::Maybe };
        let responses: Vec<Response> = names
            .iter()
            .map(|name| {
                let answers: HashMap<String, AnswerType> = candidates
                    .iter()
                    .map(|c| (c.id.clone(), answer))
                    .collect();
                Response {
                    participant_name: name.clone(),
                    answers,
                    comment: String::new(),
                }
            })
            .collect();

        let summary = summarize(&candidates, &responses);
        prop_assert!(summary.best_candidate_ids.is_empty());
    }
}
