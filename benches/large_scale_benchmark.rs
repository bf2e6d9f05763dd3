use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use introcore::sort;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_i64(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M i64 keys");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(60));

    let mut rng = rand::rng();
    let count = 1_000_000;
    let random_keys: Vec<i64> = (0..count).map(|_| rng.random()).collect();
    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("introcore::sort", |b| {
        b.iter_batched(
            || random_keys.clone(),
            |mut data| sort(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || random_keys.clone(),
            |mut data| data.sort(),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random_keys.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_i64);
criterion_main!(benches);
