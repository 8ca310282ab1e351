//! Benchmarks for the HabitFlow analytics engine
//!
//! Run with: cargo bench

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use habitflow::analytics::{
    best_streak, completion_rate, monthly_series, rolling_comparison, trailing_days,
};
use habitflow::storage::{Habit, HabitDraft};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

/// Habits with `days` days of history, completing every other day
fn create_test_habits(count: usize, days: i64) -> Vec<Habit> {
    let end = as_of();
    (0..count)
        .map(|i| {
            let mut habit = Habit::new(i as u64, HabitDraft::new(format!("habit-{}", i)));
            habit.completed_dates = (0..days)
                .filter(|d| (d + i as i64) % 2 == 0)
                .map(|d| (end - Duration::days(d)).format("%Y-%m-%d").to_string())
                .collect();
            habit
        })
        .collect()
}

fn bench_rates(c: &mut Criterion) {
    let mut group = c.benchmark_group("rates");

    for size in [5, 50, 200] {
        let habits = create_test_habits(size, 365);
        let window = trailing_days(as_of(), 30);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("completion_rate_{}", size), |b| {
            b.iter(|| completion_rate(black_box(&habits), black_box(&window)))
        });

        group.bench_function(format!("monthly_series_{}", size), |b| {
            b.iter(|| monthly_series(black_box(&habits), black_box(as_of())))
        });
    }

    group.finish();
}

fn bench_streaks(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaks");

    let habits = create_test_habits(50, 365 * 3);
    group.bench_function("best_streak_50_habits_3y", |b| {
        b.iter(|| best_streak(black_box(&habits), black_box(as_of())))
    });

    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    let habits = create_test_habits(50, 365);
    group.bench_function("rolling_comparison_50", |b| {
        b.iter(|| rolling_comparison(black_box(&habits), black_box(as_of())))
    });

    group.finish();
}

criterion_group!(benches, bench_rates, bench_streaks, bench_comparison);
criterion_main!(benches);
