use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::VecDeque;
use ropevec::RopeVec;

fn bench_sequential_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_push");

    for size in [1_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("ropevec", size), size, |b, &size| {
            b.iter(|| {
                let mut rope: RopeVec<u64> = RopeVec::new();
                for i in 0..size {
                    rope.push_back(i as u64).unwrap();
                }
                black_box(rope.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("vec", size), size, |b, &size| {
            b.iter(|| {
                let mut vec: Vec<u64> = Vec::new();
                for i in 0..size {
                    vec.push(i as u64);
                }
                black_box(vec.len())
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [1_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("get", size), size, |b, &size| {
            let rope: RopeVec<u64> = (0..size as u64).collect();

            b.iter(|| {
                let mut index = 0usize;
                for _ in 0..size {
                    index = (index + 7919) % size;
                    black_box(rope.get(index));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("get_unchecked", size), size, |b, &size| {
            let rope: RopeVec<u64> = (0..size as u64).collect();

            b.iter(|| {
                let mut index = 0usize;
                for _ in 0..size {
                    index = (index + 7919) % size;
                    // SAFETY: `index` is reduced modulo the length.
                    black_box(unsafe { rope.get_unchecked(index) });
                }
            });
        });
    }
    group.finish();
}

fn bench_front_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_insert");

    for size in [1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("ropevec", size), size, |b, &size| {
            b.iter(|| {
                let mut rope: RopeVec<u64> = RopeVec::new();
                for i in 0..size {
                    rope.insert(0, i as u64).unwrap();
                }
                black_box(rope.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("vec_deque", size), size, |b, &size| {
            b.iter(|| {
                let mut deque: VecDeque<u64> = VecDeque::new();
                for i in 0..size {
                    deque.push_front(i as u64);
                }
                black_box(deque.len())
            });
        });
    }
    group.finish();
}

fn bench_middle_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("middle_insert");

    for size in [1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(100));
        group.bench_with_input(BenchmarkId::new("quarter", size), size, |b, &size| {
            b.iter(|| {
                let mut rope: RopeVec<u64> = (0..size as u64).collect();
                for i in 0..100 {
                    rope.insert(rope.len() / 4, i).unwrap();
                }
                black_box(rope.len())
            });
        });
    }
    group.finish();
}

fn bench_queue_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");

    for size in [1_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("push_back_erase_front", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut rope: RopeVec<u64> = RopeVec::new();
                    for i in 0..size {
                        rope.push_back(i as u64).unwrap();
                        if i % 2 == 1 {
                            black_box(rope.erase_front().unwrap());
                        }
                    }
                    black_box(rope.fragmentation())
                });
            },
        );
    }
    group.finish();
}

fn bench_iterator_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [1_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("iter", size), size, |b, &size| {
            let rope: RopeVec<u64> = (0..size as u64).collect();

            b.iter(|| {
                for value in black_box(&rope) {
                    black_box(value);
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("iter_mut", size), size, |b, &size| {
            let mut rope: RopeVec<u64> = (0..size as u64).collect();

            b.iter(|| {
                for value in rope.iter_mut() {
                    *value = black_box(*value).wrapping_add(1);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_push,
    bench_random_access,
    bench_front_insert,
    bench_middle_insert,
    bench_queue_cycle,
    bench_iterator_performance
);
criterion_main!(benches);
