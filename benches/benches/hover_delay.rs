// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_hover_delay::hover::HoverState;
use understory_hover_delay::{HoverBindings, HoverConfig, HoverDebouncer};

fn bench_skim_and_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_delay/skim_and_settle");

    // Many targets each see an enter/leave/enter burst, then all timers fire.
    for targets in [16_u32, 256, 4_096] {
        group.throughput(Throughput::Elements(u64::from(targets)));
        group.bench_with_input(BenchmarkId::new("debouncer", targets), &targets, |b, &n| {
            b.iter_batched(
                || HoverDebouncer::new(HoverConfig::<u32>::new()),
                |mut hover| {
                    for t in 0..n {
                        let at = u64::from(t);
                        hover.pointer_enter(t, at);
                        hover.pointer_leave(t, at + 10);
                        hover.pointer_enter(t, at + 20);
                    }
                    black_box(hover.advance(u64::MAX));
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_selector_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_delay/selector_dispatch");

    // A pointer sweeping down a deep path with several selector bindings installed.
    for depth in [4_u32, 16, 64] {
        let path: Vec<u32> = (0..depth).collect();
        group.throughput(Throughput::Elements(u64::from(depth)));
        group.bench_with_input(BenchmarkId::new("path", depth), &path, |b, path| {
            b.iter_batched(
                || {
                    let mut bindings = HoverBindings::new();
                    for sel in [".a", ".b", ".c", ".d"] {
                        let _ = bindings.bind_hover_by_selector(sel, HoverConfig::new());
                    }
                    bindings.bind_hover(path.clone(), HoverConfig::new());
                    (bindings, HoverState::new())
                },
                |(mut bindings, mut hover)| {
                    let doc = |t: &u32, sel: &str| (*t as usize) % 4 == usize::from(sel.as_bytes()[1] - b'a');
                    for end in 1..=path.len() {
                        let events = hover.update_path(&path[..end]);
                        bindings.dispatch(&doc, events, end as u64);
                    }
                    bindings.dispatch(&doc, hover.clear(), 1_000);
                    black_box(bindings.advance(u64::MAX));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_skim_and_settle, bench_selector_dispatch);
criterion_main!(benches);
