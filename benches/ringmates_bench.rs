// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Benchmarks for graph building and group search

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ringmates::prelude::*;

/// A synthetic league: `seasons` rosters of 12 drawn from a pool that turns over slowly
fn league(seasons: u32) -> Vec<RosterRecord> {
    let mut records = Vec::new();
    for season in 0..seasons {
        let label = format!("{}-{:02}", 1950 + season, (51 + season) % 100);
        for slot in 0..12 {
            let player = format!("Player {}", season * 3 + slot);
            records.push(RosterRecord::new(&label, "Franchise", 1951 + season as i32, &player));
        }
    }
    records
}

fn bench_build(c: &mut Criterion) {
    let records = league(60);
    c.bench_function("build_graph/60_seasons", |b| {
        b.iter(|| build_graph(black_box(&records)))
    });
}

fn bench_enumerate(c: &mut Criterion) {
    let graph = build_graph(&league(20));
    let mut group = c.benchmark_group("enumerate_unique_groups");
    group.sample_size(10);
    for length in [2usize, 3, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            b.iter(|| enumerate_unique_groups(black_box(&graph), length))
        });
    }
    group.finish();
}

fn bench_best(c: &mut Criterion) {
    let graph = build_graph(&league(20));
    let library = enumerate_unique_groups(&graph, 3);
    c.bench_function("find_best_group/length_3", |b| {
        b.iter(|| find_best_group(black_box(&graph), &library))
    });
}

criterion_group!(benches, bench_build, bench_enumerate, bench_best);
criterion_main!(benches);
