//! Benchmarks for the derived-statistics hot paths
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use econeighbor::air::{average_aqi, Neighborhood};
use econeighbor::resources::{score, Habit, HabitCategory};
use econeighbor::waste::WastePanel;

fn create_neighborhoods(count: usize) -> Vec<Neighborhood> {
    (0..count)
        .map(|i| Neighborhood::new(i as u32, format!("Area {}", i), (i as u32 * 7) % 200, 0.0, 0.0))
        .collect()
}

fn create_habits(count: usize) -> Vec<Habit> {
    (0..count)
        .map(|i| {
            let category = if i % 2 == 0 {
                HabitCategory::Energy
            } else {
                HabitCategory::Water
            };
            let mut habit = Habit::new(i as u32, format!("Habit {}", i), (i as u32 % 15) + 1, category);
            habit.completed = i % 3 == 0;
            habit
        })
        .collect()
}

fn bench_air_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("air_stats");

    for size in [8, 100, 1000] {
        let neighborhoods = create_neighborhoods(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("average_aqi_{}", size), |b| {
            b.iter(|| average_aqi(black_box(&neighborhoods)))
        });
    }

    group.finish();
}

fn bench_scores(c: &mut Criterion) {
    let mut group = c.benchmark_group("scores");

    for size in [10, 100, 1000] {
        let habits = create_habits(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("score_{}", size), |b| {
            b.iter(|| score(black_box(&habits)))
        });
    }

    group.finish();
}

fn bench_catalog_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_filter");

    let mut panel = WastePanel::seeded();
    group.bench_function("unfiltered", |b| {
        b.iter(|| black_box(&panel).filtered_items())
    });

    panel.set_search_query("ca");
    group.bench_function("search", |b| {
        b.iter(|| black_box(&panel).filtered_items())
    });

    panel.set_category_filter(Some(econeighbor::WasteCategory::Recyclable));
    group.bench_function("search_and_category", |b| {
        b.iter(|| black_box(&panel).filtered_items())
    });

    group.finish();
}

criterion_group!(benches, bench_air_stats, bench_scores, bench_catalog_filter);
criterion_main!(benches);
