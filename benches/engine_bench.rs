//! Criterion benchmarks for the prioritization engine.
//!
//! Batches are drawn from the 36 legal attribute tuples with a fixed seed
//! so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use u_taskrank::classify::{DecisionTree, PriorityClassifier, EXEMPLARS};
use u_taskrank::evaluation::{rate_accuracy, rate_performance};
use u_taskrank::rank::{RankConfig, Ranker};
use u_taskrank::task::{Attributes, Task};

fn random_batch(n: usize, seed: u64) -> Vec<Task> {
    let all: Vec<Attributes> = Attributes::all().collect();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let attrs = *all.choose(&mut rng).unwrap_or(&all[0]);
            Task::new(format!("task {i}"), attrs)
        })
        .collect()
}

fn bench_induction(c: &mut Criterion) {
    c.bench_function("induce_tree", |b| {
        b.iter(|| DecisionTree::induce(black_box(&EXEMPLARS)))
    });
}

fn bench_classify(c: &mut Criterion) {
    let classifier = PriorityClassifier::shared();
    let all: Vec<Attributes> = Attributes::all().collect();
    c.bench_function("classify_all_36", |b| {
        b.iter(|| {
            all.iter()
                .map(|a| classifier.classify(black_box(a)))
                .sum::<u32>()
        })
    });
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    for &n in &[3usize, 10, 100] {
        let tasks = random_batch(n, 42);
        let ranker = Ranker::new().with_config(RankConfig::default().with_max_batch_size(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &tasks, |b, tasks| {
            b.iter(|| ranker.rank(black_box(tasks)))
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let tasks = random_batch(10, 7);
    let ranked = Ranker::new().rank(&tasks).unwrap_or_default();
    let predicted: Vec<&str> = ranked.iter().map(|r| r.description()).collect();
    let mut observed = predicted.clone();
    observed.reverse();

    c.bench_function("rate_accuracy_10", |b| {
        b.iter(|| rate_accuracy(black_box(&predicted), black_box(&observed)))
    });
    c.bench_function("rate_performance_10", |b| {
        b.iter(|| rate_performance(black_box(&ranked), black_box(&observed[..6])))
    });
}

criterion_group!(
    benches,
    bench_induction,
    bench_classify,
    bench_rank,
    bench_evaluate
);
criterion_main!(benches);
