//! Criterion benchmarks for the hot paths: title matching, combined
//! search assembly, and similarity matrix construction.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use rboolean::matcher::{MatcherConfig, TitleMatcher};
use rboolean::search::{BooleanAssembler, SearchOptions};
use rboolean::similarity::{SimilarityConfig, SimilarityEngine};
use rboolean::taxonomy::TaxonomyStore;

fn matching_benchmarks(c: &mut Criterion) {
    let store = TaxonomyStore::builtin().expect("builtin taxonomy");
    let matcher = TitleMatcher::new(&store, MatcherConfig::default()).expect("valid config");

    c.bench_function("match_specific_title", |b| {
        b.iter(|| matcher.find_best_match(black_box("Senior Werkvoorbereider Elektrotechniek")))
    });

    c.bench_function("match_miss", |b| {
        b.iter(|| matcher.find_best_match(black_box("completely unrelated text")))
    });
}

fn assembly_benchmarks(c: &mut Criterion) {
    let store = TaxonomyStore::builtin().expect("builtin taxonomy");
    let assembler = BooleanAssembler::default();
    let id = store.resolve("software_engineer").expect("builtin id");
    let group = store.get(&id).expect("builtin group");
    let options = SearchOptions {
        skills: vec!["Python".to_string(), "React".to_string()],
        location: Some("Amsterdam".to_string()),
        company: Some("Adyen".to_string()),
        exclude: vec!["Junior".to_string(), "Intern".to_string()],
    };

    c.bench_function("generate_combined_search", |b| {
        b.iter(|| assembler.generate_combined_search(black_box(group), black_box(&options)))
    });
}

fn similarity_benchmarks(c: &mut Criterion) {
    let store = TaxonomyStore::builtin().expect("builtin taxonomy");
    let engine = SimilarityEngine::new(
        &store,
        SimilarityConfig::default(),
        BooleanAssembler::default(),
    )
    .expect("valid config");
    let ids = store.ids();

    c.bench_function("similarity_matrix_full", |b| {
        b.iter(|| engine.build_similarity_matrix(black_box(&ids)))
    });
}

criterion_group!(
    benches,
    matching_benchmarks,
    assembly_benchmarks,
    similarity_benchmarks
);
criterion_main!(benches);
