//! Benchmarks for the intermittent-demand recursion and classification.

use anofox_intermittent::core::{DemandSeries, Horizon};
use anofox_intermittent::features::classify;
use anofox_intermittent::models::Method;
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Deterministic intermittent series: demand on roughly one period in three.
fn generate_intermittent(n: usize) -> DemandSeries {
    let values: Vec<f64> = (0..n)
        .map(|i| {
            if i == 0 || (i * 7 + i / 5) % 3 == 0 {
                1.0 + ((i * 13) % 17) as f64
            } else {
                0.0
            }
        })
        .collect();
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    DemandSeries::new(start, values).unwrap()
}

fn bench_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("intermittent_methods");
    let horizon = Horizon::steps(12);

    for size in [100, 1_000, 10_000] {
        let series = generate_intermittent(size);

        for method in Method::ALL {
            let model = method.build(0.1, 0.1);
            group.bench_with_input(BenchmarkId::new(method.as_str(), size), &series, |b, s| {
                b.iter(|| model.forecast(black_box(s), &horizon))
            });
        }
    }
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for size in [100, 1_000, 10_000] {
        let series = generate_intermittent(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &series, |b, s| {
            b.iter(|| classify(black_box(s)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_methods, bench_classify);
criterion_main!(benches);
