//! Text-scan benchmarks
//!
//! Measures the normalization and literal-matching hot path used by the
//! report endpoint.
//!
//! Run with: `cargo bench --bench scan_performance`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regex::RegexBuilder;

use termscan_server::scan::text::normalize_page_text;
use termscan_server::terms::DEFAULT_TERMS;

fn bench_normalize(c: &mut Criterion) {
    let raw = "a passage about multicul-\ntural communities and equity,\nwrapped across lines\n"
        .repeat(200);

    c.bench_function("normalize_page_text", |b| {
        b.iter(|| normalize_page_text(black_box(&raw)))
    });
}

fn bench_default_list_matching(c: &mut Criterion) {
    let text = normalize_page_text(
        &"community equity and racial justice work across diverse communities\n".repeat(100),
    );
    let patterns: Vec<_> = DEFAULT_TERMS
        .iter()
        .map(|term| {
            RegexBuilder::new(&regex::escape(term))
                .case_insensitive(true)
                .build()
                .expect("default terms compile")
        })
        .collect();

    c.bench_function("default_list_matching", |b| {
        b.iter(|| {
            patterns
                .iter()
                .map(|pattern| pattern.find_iter(black_box(&text)).count())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_normalize, bench_default_list_matching);
criterion_main!(benches);
