//! Schedule resolution benchmarks

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use restoration_core::{Language, ReadingSchedule};
use std::hint::black_box;

fn schedule_benchmark(c: &mut Criterion) {
    let schedule = ReadingSchedule::restoration();
    let date = NaiveDate::from_ymd_opt(2031, 7, 19).unwrap();

    c.bench_function("daily_reading", |b| {
        b.iter(|| schedule.daily_reading(black_box(date), Language::Ko))
    });

    c.bench_function("full_schedule", |b| {
        b.iter(|| schedule.full_schedule(black_box(Language::En)).count())
    });
}

criterion_group!(benches, schedule_benchmark);
criterion_main!(benches);
