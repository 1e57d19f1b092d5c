use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::collections::BTreeSet;
use todoist_box::services::streak::{assess, count_streak};

fn benchmark_streak_rules(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");

    // Ten years of daily completions: the worst case for an unbroken streak
    let unbroken: BTreeSet<NaiveDate> = (0..3650).map(|n| today - Duration::days(n)).collect();

    // Same span with a gap near the end of the history
    let mut late_gap = unbroken.clone();
    late_gap.remove(&(today - Duration::days(3000)));

    let mut group = c.benchmark_group("streak_rules");

    group.bench_function("assess_unbroken_10y", |b| {
        b.iter(|| assess(black_box(&unbroken), today, Some("cursor")))
    });

    group.bench_function("count_unbroken_10y", |b| {
        b.iter(|| count_streak(black_box(&unbroken), today))
    });

    group.bench_function("count_late_gap_10y", |b| {
        b.iter(|| count_streak(black_box(&late_gap), today))
    });

    group.finish();
}

criterion_group!(benches, benchmark_streak_rules);
criterion_main!(benches);
