// Compares deferred dispatch through a PatternMatcher against immediate
// dispatch through Maybe::match_with. Inputs are generated outside the measured
// closure so only the dispatch is timed.

extern crate criterion;
extern crate optmatch;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use optmatch::{flatten, Maybe, PatternMatcher};

const INPUT_COUNT: u32 = 1024;

fn prepare_inputs() -> Vec<Maybe<u32>> {
    (0..INPUT_COUNT)
        .map(|i| if i % 3 == 0 { Maybe::none() } else { Maybe::some(i % 7) })
        .collect()
}

pub fn pattern_matcher_dispatch(c: &mut Criterion) {
    let inputs = prepare_inputs();
    let mut matcher: PatternMatcher<'_, u32, u32> = PatternMatcher::new();
    if matcher
        .none(|| 0)
        .and_then(|m| m.some(|v| *v + 1))
        .and_then(|m| m.some_eq(3, || 100))
        .and_then(|m| m.some_eq(5, || 200))
        .is_err()
    {
        panic!("matcher registration failed");
    }
    let matcher = matcher.seal();

    c.bench_function("pattern_matcher_dispatch", |b| {
        b.iter(|| {
            inputs
                .iter()
                .map(|m| matcher.result_of(black_box(m)))
                .sum::<u32>()
        })
    });
}

pub fn match_with_dispatch(c: &mut Criterion) {
    let inputs = prepare_inputs();
    c.bench_function("match_with_dispatch", |b| {
        b.iter(|| {
            inputs
                .iter()
                .map(|m| {
                    black_box(m).match_with(
                        || 0,
                        |v| match *v {
                            3 => 100,
                            5 => 200,
                            v => v + 1,
                        },
                    )
                })
                .sum::<u32>()
        })
    });
}

pub fn flatten_present(c: &mut Criterion) {
    let inputs = prepare_inputs();
    c.bench_function("flatten_present", |b| {
        b.iter(|| flatten(black_box(&inputs).iter().copied()).count())
    });
}

criterion_group!(
    benches,
    pattern_matcher_dispatch,
    match_with_dispatch,
    flatten_present
);
criterion_main!(benches);
