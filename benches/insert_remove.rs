//! Sorted linked list against a vector sorted after every push.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sorted_list_bench::{SortedLinkedList, SortedVec};

fn random_values(size: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..size).map(|_| rng.gen_range(0..size as u32)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in [100, 1000, 5000] {
        let values = random_values(size);
        group.bench_with_input(BenchmarkId::new("linked_list", size), &values, |b, values| {
            b.iter(|| {
                let mut list = SortedLinkedList::new();
                for v in values {
                    list.insert(*v);
                }
                black_box(list.size())
            })
        });
        group.bench_with_input(BenchmarkId::new("sorted_vec", size), &values, |b, values| {
            b.iter(|| {
                let mut vec = SortedVec::new();
                for v in values {
                    vec.push(*v);
                }
                black_box(vec.len())
            })
        });
    }
    group.finish();
}

fn bench_remove_half(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_half");
    for size in [100, 1000, 5000] {
        let values = random_values(size);
        let list: SortedLinkedList<u32> = values.iter().copied().collect();
        let mut vec = SortedVec::new();
        for v in &values {
            vec.push(*v);
        }
        group.bench_with_input(BenchmarkId::new("linked_list", size), &values, |b, values| {
            b.iter_batched(
                || list.iter().copied().collect::<SortedLinkedList<u32>>(),
                |mut list| {
                    for v in &values[..size / 2] {
                        list.remove(v);
                    }
                    list
                },
                criterion::BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("sorted_vec", size), &values, |b, values| {
            b.iter_batched(
                || vec.clone(),
                |mut vec| {
                    for v in &values[..size / 2] {
                        vec.remove_item(v);
                    }
                    vec
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_remove_half);
criterion_main!(benches);
