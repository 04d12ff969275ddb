/// Generation and scoring benchmarks
///
/// Measures the cost of the two recomputation paths: full regeneration on a
/// seed change, and re-classification against cached statistics on a
/// threshold change.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use madlens::robust::{classify, score, RobustStats};
use madlens::series::generate;
use std::time::Duration;

/// Benchmark: series generation at several lengths
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.measurement_time(Duration::from_secs(5));

    for count in [320usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| generate(black_box(42), count));
        });
    }

    group.finish();
}

/// Benchmark: full scoring (median + MAD + classification)
fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    group.measurement_time(Duration::from_secs(5));

    for count in [320usize, 10_000, 100_000] {
        let series = generate(42, count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &series, |b, series| {
            b.iter(|| score(series, black_box(3.5)));
        });
    }

    group.finish();
}

/// Benchmark: threshold change with cached statistics
fn bench_reclassify(c: &mut Criterion) {
    let mut group = c.benchmark_group("reclassify");
    group.measurement_time(Duration::from_secs(5));

    let series = generate(42, 100_000);
    let stats = RobustStats::from_values(&series.values());
    group.throughput(Throughput::Elements(series.len() as u64));

    group.bench_function("cached_stats_100000", |b| {
        b.iter(|| classify(&series, &stats, black_box(4.0)));
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_score, bench_reclassify);
criterion_main!(benches);
