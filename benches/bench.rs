// Criterion benchmarks for Chainmatch

use chainmatch::core::scoring::{compute_with_vibe, trait_score};
use chainmatch::core::{assign_archetype, Matchmaker};
use chainmatch::models::{Archetype, ScoringWeights};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_compatibility(c: &mut Criterion) {
    let weights = ScoringWeights::default();

    c.bench_function("compute_compatibility", |b| {
        b.iter(|| {
            compute_with_vibe(
                black_box(Archetype::BitcoinMaxi),
                black_box(Archetype::CryptoBoomer),
                black_box(&weights),
                black_box(0.85),
            )
        });
    });
}

fn bench_trait_score(c: &mut Criterion) {
    let a = Archetype::DefiDegen.profile().traits;
    let b = Archetype::ShitcoinSurfer.profile().traits;

    c.bench_function("trait_score", |bench| {
        bench.iter(|| trait_score(black_box(a), black_box(b)));
    });
}

fn bench_assignment(c: &mut Criterion) {
    c.bench_function("assign_archetype", |b| {
        b.iter(|| assign_archetype(black_box(123456789)));
    });
}

fn bench_matchmaking(c: &mut Criterion) {
    let mut group = c.benchmark_group("matchmaking");

    for window in [5usize, 10, 20].iter() {
        let matchmaker = Matchmaker::new(ScoringWeights::default(), 50, *window);
        let candidates: Vec<u64> = (1000..1050).collect();

        group.bench_with_input(
            BenchmarkId::new("find_matches_among", window),
            window,
            |b, _| {
                b.iter(|| {
                    matchmaker.find_matches_among(
                        black_box(42),
                        black_box(&candidates),
                        black_box(3),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compatibility,
    bench_trait_score,
    bench_assignment,
    bench_matchmaking
);

criterion_main!(benches);
