//! Criterion benchmarks for the phonetic normalizer.
//!
//! Measures throughput of:
//! - splitting clauses into letter runs
//! - pseudo-phonetic rewriting
//! - consonance forms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use versemeter::phonetic::{consonance_form, letter_groups, pseudo_phonetic};

// ============================================================================
// Benchmark Fixtures
// ============================================================================

fn sample_clauses() -> Vec<&'static str> {
    vec![
        "и́",
        "о́ром",
        "а́нники",
        "у́тся",
        "о́здь",
        "е́ственностью",
    ]
}

// ============================================================================
// Normalizer Benchmarks
// ============================================================================

fn bench_letter_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("letter_groups");
    for clause in sample_clauses() {
        group.throughput(Throughput::Elements(clause.chars().count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(clause), clause, |b, clause| {
            b.iter(|| letter_groups(black_box(clause)))
        });
    }
    group.finish();
}

fn bench_pseudo_phonetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("pseudo_phonetic");
    for clause in sample_clauses() {
        group.throughput(Throughput::Elements(clause.chars().count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(clause), clause, |b, clause| {
            b.iter(|| pseudo_phonetic(black_box(clause)))
        });
    }
    group.finish();
}

fn bench_consonance_form(c: &mut Criterion) {
    let clauses = sample_clauses();
    c.bench_function("consonance_form/all", |b| {
        b.iter(|| {
            for clause in &clauses {
                black_box(consonance_form(black_box(clause)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_letter_groups,
    bench_pseudo_phonetic,
    bench_consonance_form
);
criterion_main!(benches);
