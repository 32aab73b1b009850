use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use making_change::{count_change_ways, count_change_ways_checked, count_change_ways_memoized};

const US_COINS: [i64; 6] = [1, 5, 10, 25, 50, 100];

fn bench_bottom_up(c: &mut Criterion) {
    let mut group = c.benchmark_group("coin_change_bottom_up");
    for amount in [100_i64, 1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("biguint", amount), &amount, |b, &amount| {
            b.iter(|| count_change_ways(black_box(amount), black_box(&US_COINS)))
        });
        group.bench_with_input(BenchmarkId::new("u128", amount), &amount, |b, &amount| {
            b.iter(|| count_change_ways_checked::<u128>(black_box(amount), black_box(&US_COINS)))
        });
    }
    group.finish();
}

fn bench_top_down(c: &mut Criterion) {
    let mut group = c.benchmark_group("coin_change_memoized");
    for amount in [100_i64, 1_000, 5_000] {
        group.bench_with_input(BenchmarkId::from_parameter(amount), &amount, |b, &amount| {
            b.iter(|| count_change_ways_memoized(black_box(amount), black_box(&US_COINS)))
        });
    }
    group.finish();
}

fn bench_many_denominations(c: &mut Criterion) {
    let coins: Vec<i64> = (1..=200).collect();
    c.bench_function("coin_change_200_denominations_5000", |b| {
        b.iter(|| count_change_ways(black_box(5_000), black_box(&coins)))
    });
}

criterion_group!(
    benches,
    bench_bottom_up,
    bench_top_down,
    bench_many_denominations
);
criterion_main!(benches);
