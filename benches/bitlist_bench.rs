use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use packed_collections::BitList;

fn build_bitlist(size: usize) -> BitList {
    let mut b = BitList::new();
    for i in 0..size {
        if i % 3 == 0 {
            b.set1(i);
        }
    }
    b
}

fn bench_rank_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitlist_rank_select");

    for size in [1_000, 100_000, 1_000_000].iter() {
        let b = build_bitlist(*size);

        group.bench_with_input(BenchmarkId::new("rank", size), size, |bencher, &size| {
            bencher.iter(|| black_box(b.rank(black_box(size / 2))))
        });

        group.bench_with_input(BenchmarkId::new("select", size), size, |bencher, _| {
            let k = b.cardinality() / 2;
            bencher.iter(|| black_box(b.select(black_box(k))))
        });
    }

    group.finish();
}

fn bench_insert_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitlist_insert_remove");

    for size in [1_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("insert_middle", size), size, |bencher, &size| {
            bencher.iter_batched(
                || build_bitlist(size),
                |mut b| {
                    b.insert(size / 2, true);
                    black_box(b);
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rank_select, bench_insert_remove);
criterion_main!(benches);
