//! Criterion micro-benchmarks for push, positional insert/erase and resize,
//! with `Vec<i32>` as the baseline.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use dynarr::DynamicArray;
use dynarr_bench::{filled_array, insertion_indices};

/// Benchmark: 1000 pushes from capacity 1, through every growth step.
fn bench_push_1k(c: &mut Criterion) {
    c.bench_function("dynarr_push_1k", |b| {
        b.iter(|| {
            let mut array = DynamicArray::with_capacity(1).unwrap();
            for v in 0..1000 {
                array.push_back(black_box(v)).unwrap();
            }
            array
        });
    });

    c.bench_function("std_vec_push_1k", |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(1);
            for i in 0..1000i32 {
                v.push(black_box(i));
            }
            v
        });
    });
}

/// Benchmark: 500 inserts at pseudo-random positions into a 1K array.
fn bench_insert_random(c: &mut Criterion) {
    let base = filled_array(1000).unwrap();
    let indices = insertion_indices(base.len(), 500, 42);

    c.bench_function("dynarr_insert_random_500", |b| {
        b.iter(|| {
            let mut array = base.clone();
            for &idx in &indices {
                array.insert(idx, black_box(-1)).unwrap();
            }
            array
        });
    });

    c.bench_function("std_vec_insert_random_500", |b| {
        let base: Vec<i32> = base.as_slice().to_vec();
        b.iter(|| {
            let mut v = base.clone();
            for &idx in &indices {
                v.insert(idx, black_box(-1));
            }
            v
        });
    });
}

/// Benchmark: drain a 1K array by erasing the front element.
fn bench_erase_front(c: &mut Criterion) {
    let base = filled_array(1000).unwrap();

    c.bench_function("dynarr_erase_front_1k", |b| {
        b.iter(|| {
            let mut array = base.clone();
            while !array.is_empty() {
                array.erase(0).unwrap();
            }
            black_box(array.len())
        });
    });
}

/// Benchmark: grow to 64K with a fill value, then shrink back.
fn bench_resize_cycle(c: &mut Criterion) {
    c.bench_function("dynarr_resize_cycle_64k", |b| {
        b.iter(|| {
            let mut array = DynamicArray::new().unwrap();
            array.resize_with_value(black_box(65_536), 7).unwrap();
            array.resize(16).unwrap();
            array.shrink_to_fit().unwrap();
            black_box(array.capacity())
        });
    });
}

criterion_group!(
    benches,
    bench_push_1k,
    bench_insert_random,
    bench_erase_front,
    bench_resize_cycle
);
criterion_main!(benches);
