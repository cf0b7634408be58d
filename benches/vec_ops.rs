//! Criterion benchmarks for the positional operations of `FixedCapacityVector`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixvec::FixedCapacityVector;

fn filled<const N: usize>() -> FixedCapacityVector<u32, N> {
    (0..N as u32).collect()
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    group.bench_function("fixvec_push_256", |b| {
        b.iter(|| {
            let mut v = FixedCapacityVector::<u32, 256>::new();
            for i in 0..256 {
                let _ = v.push(black_box(i));
            }
            black_box(v)
        });
    });

    group.bench_function("std_vec_push_256", |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(256);
            for i in 0..256u32 {
                v.push(black_box(i));
            }
            black_box(v)
        });
    });

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    for len in [16usize, 64, 255] {
        group.bench_with_input(BenchmarkId::new("insert", len), &len, |b, &len| {
            let base: FixedCapacityVector<u32, 256> = (0..len as u32).collect();
            b.iter(|| {
                let mut v = base.clone();
                let _ = v.insert(0, black_box(7));
                black_box(v)
            });
        });
    }

    group.bench_function("insert_slice_middle", |b| {
        let base: FixedCapacityVector<u32, 256> = (0..128).collect();
        let extra = [1u32; 64];
        b.iter(|| {
            let mut v = base.clone();
            let _ = v.insert_slice(64, black_box(&extra));
            black_box(v)
        });
    });

    group.finish();
}

fn bench_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase");

    let base = filled::<256>();

    group.bench_function("erase_front_run", |b| {
        b.iter(|| {
            let mut v = base.clone();
            v.erase(black_box(0..32));
            black_box(v)
        });
    });

    group.bench_function("remove_front", |b| {
        b.iter(|| {
            let mut v = base.clone();
            black_box(v.remove(0));
            black_box(v)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_insert_front, bench_erase);
criterion_main!(benches);
