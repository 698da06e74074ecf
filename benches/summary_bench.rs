// Benchmark for response aggregation
// Measures summarize() over growing response collections at the candidate cap

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slot_poll::models::answer::AnswerType;
use slot_poll::models::candidate::Candidate;
use slot_poll::models::response::Response;
use slot_poll::services::summary::summarize;
use slot_poll::utils::date::at_hm;

fn build_candidates(count: usize) -> Vec<Candidate> {
    let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    (0..count)
        .map(|i| {
            let start = at_hm(day + Duration::days((i % 7) as i64), 9 + (i / 7) as u32, 0);
            Candidate::new(format!("c{}", i), start, start + Duration::minutes(60)).unwrap()
        })
        .collect()
}

fn build_responses(candidates: &[Candidate], count: usize) -> Vec<Response> {
    (0..count)
        .map(|i| {
            let answers: HashMap<String, AnswerType> = candidates
                .iter()
                .enumerate()
                .map(|(j, c)| {
                    let answer = match (i + j) % 3 {
                        0 => AnswerType::Attend,
                        1 => AnswerType::Maybe,
                        _ => AnswerType::Decline,
                    };
                    (c.id.clone(), answer)
                })
                .collect();
            Response::new(format!("participant-{}", i), answers, "").unwrap()
        })
        .collect()
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    let candidates = build_candidates(20);

    for count in [10, 100, 1000].iter() {
        let responses = build_responses(&candidates, *count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &responses,
            |b, responses| {
                b.iter(|| summarize(black_box(&candidates), black_box(responses)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_summarize);
criterion_main!(benches);
