use criterion::{Criterion, criterion_group, criterion_main};
use perf_recorder::extract::parse_results;
use std::hint::black_box;

/// A large `xcodebuild` log: mostly noise, with a measurement report every few lines.
fn synthetic_log(cases: usize) -> String {
    let mut log = String::new();
    for i in 0..cases {
        log.push_str(&format!(
            "Test Case '-[TendrilTreeTests.Measurements test{i}]' started.\n\
             /Users/ci/TendrilTree/Tests/Measurements.swift:42: Test Case '-[TendrilTreeTests.Measurements test{i}]' measured [Time, seconds] average: 0.{i:03}, relative standard deviation: 3.0%, values: [0.1, 0.1]\n\
             Test Case '-[TendrilTreeTests.Measurements test{i}]' passed (0.5 seconds).\n"
        ));
    }
    log
}

fn bench_parse_results(c: &mut Criterion) {
    let log = synthetic_log(2_000);

    c.bench_function("parse_results", |b| {
        b.iter(|| parse_results(black_box(&log)));
    });
}

criterion_group!(benches, bench_parse_results);
criterion_main!(benches);
