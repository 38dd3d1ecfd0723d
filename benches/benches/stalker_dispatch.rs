// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_flow_tree::{Document, Element, ElementId};
use understory_stalker::{Direction, Options, Signal, Stalkers};

/// A page of `sections` blocks, each a 40px bar followed by 400px of content.
fn gen_page(sections: usize) -> (Document, Vec<ElementId>) {
    let mut doc = Document::new(Size::new(1280.0, 800.0));
    let root = doc.root();
    let mut bars = Vec::with_capacity(sections);
    for _ in 0..sections {
        let bar = doc.append(root, Element::new("nav"));
        let _ = doc.append(bar, Element::new("span").with_content_height(40.0));
        let _ = doc.append(root, Element::new("section").with_content_height(400.0));
        bars.push(bar);
    }
    (doc, bars)
}

fn gen_setup(sections: usize, direction: Direction) -> (Document, Stalkers<ElementId>) {
    let (mut doc, bars) = gen_page(sections);
    let mut stalkers = Stalkers::new();
    stalkers.attach(&mut doc, bars, &Options::new().direction(direction), 0);
    (doc, stalkers)
}

fn bench_scroll_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_sweep");
    for &n in &[4_usize, 16, 64] {
        for direction in [Direction::Down, Direction::Up] {
            let steps = 64_u64;
            group.throughput(Throughput::Elements(steps * n as u64));
            group.bench_function(format!("{direction}/n={n}"), |b| {
                b.iter_batched(
                    || gen_setup(n, direction),
                    |(mut doc, mut stalkers)| {
                        let max = doc.max_scroll_top();
                        for i in 0..steps {
                            doc.scroll_to(max * i as f64 / steps as f64);
                            black_box(stalkers.dispatch(&mut doc, Signal::Scroll, i * 16));
                        }
                        // Sweep back so every stalk also stops.
                        for i in (0..steps).rev() {
                            doc.scroll_to(max * i as f64 / steps as f64);
                            black_box(stalkers.dispatch(&mut doc, Signal::Scroll, 2048 + i));
                        }
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_idle_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("idle_ticks");
    for &n in &[16_usize, 64] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n={n}"), |b| {
            let (mut doc, mut stalkers) = gen_setup(n, Direction::Down);
            let mut now = 0_u64;
            b.iter(|| {
                now += 16;
                black_box(stalkers.dispatch(&mut doc, Signal::Tick, now));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scroll_sweep, bench_idle_ticks);
criterion_main!(benches);
