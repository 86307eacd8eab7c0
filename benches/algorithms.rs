use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use textsim::algorithms::{
    cosine_similarity_ngrams, jaccard_similarity_ngrams, jaro_winkler_similarity, levenshtein,
    osa_distance,
};
use textsim::{calculate_similarity, AlgorithmKind, AlgorithmOptions};

/// Deterministic pseudo-text so runs stay comparable across machines.
fn generate(len: usize, phase: usize) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz ";
    (0..len)
        .map(|i| ALPHABET[(i * 7 + phase) % ALPHABET.len()] as char)
        .collect()
}

fn edit_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit");
    for len in [8, 32, 64, 128, 256] {
        let a = generate(len, 0);
        let b = generate(len, 3);

        group.bench_with_input(
            BenchmarkId::new("levenshtein", len),
            &(&a, &b),
            |bench, val| {
                bench.iter(|| black_box(levenshtein(val.0, val.1)));
            },
        );
        group.bench_with_input(BenchmarkId::new("osa", len), &(&a, &b), |bench, val| {
            bench.iter(|| black_box(osa_distance(val.0, val.1)));
        });
        group.bench_with_input(
            BenchmarkId::new("jaro-winkler", len),
            &(&a, &b),
            |bench, val| {
                bench.iter(|| black_box(jaro_winkler_similarity(val.0, val.1)));
            },
        );
    }
    group.finish();
}

fn token_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("token");
    for len in [32, 128, 512] {
        let a = generate(len, 0);
        let b = generate(len, 5);

        group.bench_with_input(
            BenchmarkId::new("jaccard-bigrams", len),
            &(&a, &b),
            |bench, val| {
                bench.iter(|| black_box(jaccard_similarity_ngrams(val.0, val.1, 2)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("cosine-bigrams", len),
            &(&a, &b),
            |bench, val| {
                bench.iter(|| black_box(cosine_similarity_ngrams(val.0, val.1, 2)));
            },
        );
    }
    group.finish();
}

fn dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let options = AlgorithmOptions::default();
    let a = generate(64, 0);
    let b = generate(64, 3);
    for kind in [
        AlgorithmKind::Levenshtein,
        AlgorithmKind::JaroWinkler,
        AlgorithmKind::Jaccard,
        AlgorithmKind::Cosine,
    ] {
        group.bench_with_input(BenchmarkId::new(kind.name(), 64), &(&a, &b), |bench, val| {
            bench.iter(|| black_box(calculate_similarity(val.0, val.1, kind, &options)));
        });
    }
    group.finish();
}

criterion_group!(benches, edit_distances, token_metrics, dispatch);
criterion_main!(benches);
