// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use windrow_order::{Item, OrderBook, provisional_order};

fn book(len: usize) -> OrderBook<u32, ()> {
    let mut book = OrderBook::new();
    book.set_items((0..(len as u32)).map(|k| Item::new(k, ())).collect())
        .unwrap();
    book
}

fn bench_move_before(c: &mut Criterion) {
    let mut group = c.benchmark_group("order/move_before");

    // Worst case: the first item travels to the far end of the sequence.
    for len in [128usize, 512, 2_048, 8_192] {
        let source = book(len);
        let last = (len - 1) as u32;
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &source, |b, source| {
            b.iter_batched(
                || source.clone(),
                |mut book| {
                    book.move_before(&0, &last).unwrap();
                    black_box(book);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_provisional_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("order/provisional_order");

    for len in [128usize, 512, 2_048, 8_192] {
        let keys: Vec<u32> = (0..(len as u32)).collect();
        let last = (len - 1) as u32;
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &keys, |b, keys| {
            b.iter(|| {
                let order = provisional_order(keys, &0, &last).unwrap();
                black_box(order);
            });
        });
    }

    group.finish();
}

fn bench_replace_order_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("order/replace_order");

    // Hypothesis: the scanning validator is O(n^2); the hashed variant is
    // O(n) and wins once sequences stop being toy-sized.
    for len in [128usize, 512, 2_048, 8_192] {
        let source = book(len);
        let reversed: Vec<u32> = (0..(len as u32)).rev().collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("scanning", len),
            &(source.clone(), reversed.clone()),
            |b, (source, reversed)| {
                b.iter_batched(
                    || source.clone(),
                    |mut book| {
                        book.replace_order(reversed).unwrap();
                        black_box(book);
                    },
                    BatchSize::LargeInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("hashed", len),
            &(source, reversed),
            |b, (source, reversed)| {
                b.iter_batched(
                    || source.clone(),
                    |mut book| {
                        book.replace_order_hashed(reversed).unwrap();
                        black_box(book);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_move_before,
    bench_provisional_order,
    bench_replace_order_backends
);
criterion_main!(benches);
