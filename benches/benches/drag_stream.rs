// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Vec2};
use windrow_order::Item;
use windrow_view::{ReorderView, ViewConfig};

const ROW_HEIGHT: f64 = 20.0;

fn view(len: usize) -> ReorderView<u32, ()> {
    let mut view = ReorderView::new(ViewConfig::default());
    view.set_items((0..(len as u32)).map(|k| Item::new(k, ())).collect())
        .unwrap();
    for row in 0..len {
        let top = ROW_HEIGHT * row as f64;
        view.set_item_bounds(row as u32, Rect::new(0.0, top, 100.0, top + ROW_HEIGHT));
    }
    view
}

fn row_center(row: usize) -> Point {
    Point::new(50.0, ROW_HEIGHT * row as f64 + ROW_HEIGHT / 2.0)
}

/// One full gesture: lift the first row, sweep the pointer across every row,
/// drop on the last. Models the per-frame cost a host pays during a drag.
fn bench_full_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/full_drag");
    group.sample_size(30);

    for len in [128usize, 512, 2_048] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter_batched(
                || view(len),
                |mut view| {
                    view.drag_start(&0, row_center(0));
                    for row in 1..len {
                        view.drag_update(row_center(row));
                    }
                    view.drag_end(row_center(len - 1), Vec2::ZERO);
                    black_box(view);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_hit_test_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/drag_update");

    // Jitter over one target: hit test plus session bookkeeping, no reorder.
    for len in [128usize, 512, 2_048] {
        group.throughput(Throughput::Elements(1));

        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter_batched(
                || {
                    let mut view = view(len);
                    view.drag_start(&0, row_center(0));
                    view.drag_update(row_center(len / 2));
                    view
                },
                |mut view| {
                    view.drag_update(row_center(len / 2));
                    black_box(view);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_drag, bench_hit_test_update);
criterion_main!(benches);
