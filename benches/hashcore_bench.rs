use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use packed_collections::hashcore::HashCore;

fn build_core(size: usize) -> HashCore<u32, u64> {
    let mut c = HashCore::with_expected_items(size);
    for k in 0..size as u32 {
        c.put(k, k as u64);
    }
    c
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashcore_lookup");

    for size in [100, 10_000, 1_000_000].iter() {
        let core = build_core(*size);

        group.bench_with_input(BenchmarkId::new("hit", size), size, |bencher, &size| {
            bencher.iter(|| black_box(core.get(black_box((size / 2) as u32))))
        });

        group.bench_with_input(BenchmarkId::new("miss", size), size, |bencher, &size| {
            bencher.iter(|| black_box(core.get(black_box(size as u32 * 10))))
        });
    }

    group.finish();
}

fn bench_insert_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashcore_insert_remove");

    for size in [1_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("insert_fresh", size), size, |bencher, &size| {
            bencher.iter_batched(
                HashCore::<u32, u64>::new,
                |mut core| {
                    for k in 0..size as u32 {
                        core.put(k, k as u64);
                    }
                    black_box(core);
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("remove_all", size), size, |bencher, &size| {
            bencher.iter_batched(
                || build_core(size),
                |mut core| {
                    for k in 0..size as u32 {
                        core.remove(k);
                    }
                    black_box(core);
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_insert_remove);
criterion_main!(benches);
