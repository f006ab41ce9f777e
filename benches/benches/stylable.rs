// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_stylable`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;

use kurbo::Insets;
use peniko::Color;
use understory_stylable::{ChangeLog, Configuration, StylableExt, Styled};

#[derive(Clone, Debug, PartialEq)]
struct BoxStyle {
    background: Color,
    border: Color,
    padding: Insets,
    border_width: f64,
    corner_radius: f64,
    elevated: bool,
}

impl Configuration for BoxStyle {
    fn initial() -> Self {
        Self {
            background: Color::WHITE,
            border: Color::BLACK,
            padding: Insets::uniform(4.0),
            border_width: 1.0,
            corner_radius: 0.0,
            elevated: false,
        }
    }
}

type Panel = Styled<u64, BoxStyle>;

fn step(style: &mut BoxStyle, i: usize) {
    match i % 4 {
        0 => style.corner_radius += 1.0,
        1 => style.border_width += 0.5,
        2 => style.elevated = !style.elevated,
        _ => style.padding = Insets::uniform(style.corner_radius),
    }
}

fn bench_stylable(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: BoxStyle={} Panel={}",
            core::mem::size_of::<BoxStyle>(),
            core::mem::size_of::<Panel>(),
        );
    });

    let mut group = c.benchmark_group("stylable/chain");
    for &len in &[1_usize, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("modified", len), &len, |b, &len| {
            let panel = Panel::new(7);
            b.iter(|| {
                let mut current = panel.clone();
                for i in 0..len {
                    current = current.modified(|s| step(s, i));
                }
                black_box(current)
            });
        });

        group.bench_with_input(BenchmarkId::new("map_config", len), &len, |b, &len| {
            b.iter_batched(
                || Panel::new(7),
                |mut current| {
                    for i in 0..len {
                        current = current.map_config(|s| step(s, i));
                    }
                    black_box(current)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("traced", len), &len, |b, &len| {
            let panel = Panel::new(7);
            b.iter_batched(
                ChangeLog::<BoxStyle>::new,
                |mut log| {
                    let mut current = panel.clone();
                    for i in 0..len {
                        current = current.modified_traced(|s| step(s, i), &mut log);
                    }
                    black_box((current, log.len()))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();

    let panel = Panel::new(1).modified(|s| s.elevated = true);
    c.bench_function("stylable/with_style", |b| {
        b.iter(|| black_box(panel.with_style(|s| s.corner_radius = 6.0)));
    });
    c.bench_function("stylable/style_changed", |b| {
        let other = panel.modified(|s| s.border_width = 2.0);
        b.iter(|| black_box(other.style_changed(black_box(&panel))));
    });
}

criterion_group!(benches, bench_stylable);
criterion_main!(benches);
