//! Criterion benchmarks for the phonogram analysis pipeline.
//!
//! This module covers the major cost centers of the crate:
//! - Unicode word segmentation
//! - Full sliding-window expansion
//! - Edge (prefix/suffix) expansion
//! - Exemption classification on mixed-script input

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use phonogram::config::{GramSpec, Side};
use phonogram::pipeline::GramFilterPipeline;
use phonogram::source::{UnicodeWordSource, VecSource};
use phonogram::token::Token;

const SYLLABLES: &[&str] = &[
    "zhong", "guo", "ren", "min", "yin", "hang", "pin", "yu", "bei", "jing", "shang", "hai",
    "xiang", "gang", "tian", "jin", "chang", "jiang", "huang", "shan", "dong", "nan", "fu", "zhou",
    "guang", "shen", "zhen", "cheng", "wu", "han", "xi", "an", "qing", "dao", "da", "lian",
];

/// Generate romanized test text for benchmarking.
fn generate_romanized_text(word_count: usize) -> String {
    let mut words = Vec::with_capacity(word_count);
    for i in 0..word_count {
        // Pseudo-random distribution over the syllable table
        let idx = (i * 13 + 7) % SYLLABLES.len();
        words.push(SYLLABLES[idx]);
    }
    words.join(" ")
}

/// Generate text interleaving romanized, Han, and numeric words.
fn generate_mixed_text(word_count: usize) -> String {
    let words = [
        "zhong", "中国", "2024", "yin", "hang", "银行", "100", "pin", "北京", "7",
    ];

    let mut parts = Vec::with_capacity(word_count);
    for i in 0..word_count {
        parts.push(words[(i * 7 + 3) % words.len()]);
    }
    parts.join(" ")
}

/// Generate a prepared token list for pure expansion benchmarks.
fn generate_tokens(count: usize) -> Vec<Token> {
    (0..count)
        .map(|i| Token::new(SYLLABLES[(i * 13 + 7) % SYLLABLES.len()]))
        .collect()
}

/// Run a complete segmentation-and-expansion pass, returning the token count.
fn expand_text(text: &str, spec: &GramSpec) -> usize {
    let source = UnicodeWordSource::new(text);
    let mut pipeline = GramFilterPipeline::new(source, spec.clone()).unwrap();

    let mut count = 0;
    while let Some(token) = pipeline.pull().unwrap() {
        black_box(token);
        count += 1;
    }
    count
}

/// Benchmark word segmentation on its own.
fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    let text = generate_romanized_text(1000);

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("unicode_word_1k_words", |b| {
        b.iter(|| {
            let source = UnicodeWordSource::new(black_box(&text));
            black_box(source)
        })
    });

    group.finish();
}

/// Benchmark full-mode expansion over prepared tokens.
fn bench_full_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_expansion");

    let tokens = generate_tokens(1000);
    let default_window = GramSpec::full(2, 20).unwrap();
    let narrow_window = GramSpec::full(2, 3).unwrap();

    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("default_window_1k_tokens", |b| {
        b.iter_with_setup(
            || {
                GramFilterPipeline::new(VecSource::new(tokens.clone()), default_window.clone())
                    .unwrap()
            },
            |mut pipeline| {
                while let Some(token) = pipeline.pull().unwrap() {
                    black_box(token);
                }
            },
        )
    });

    group.bench_function("narrow_window_1k_tokens", |b| {
        b.iter_with_setup(
            || {
                GramFilterPipeline::new(VecSource::new(tokens.clone()), narrow_window.clone())
                    .unwrap()
            },
            |mut pipeline| {
                while let Some(token) = pipeline.pull().unwrap() {
                    black_box(token);
                }
            },
        )
    });

    group.finish();
}

/// Benchmark edge-mode expansion from both sides.
fn bench_edge_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_expansion");

    let tokens = generate_tokens(1000);

    group.throughput(Throughput::Elements(tokens.len() as u64));
    for side in [Side::Front, Side::Back] {
        let spec = GramSpec::edge(side, 1, 20).unwrap();
        group.bench_function(format!("{side}_1k_tokens"), |b| {
            b.iter_with_setup(
                || GramFilterPipeline::new(VecSource::new(tokens.clone()), spec.clone()).unwrap(),
                |mut pipeline| {
                    while let Some(token) = pipeline.pull().unwrap() {
                        black_box(token);
                    }
                },
            )
        });
    }

    group.finish();
}

/// Benchmark classification behavior on mixed-script text.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let text = generate_mixed_text(500);
    let exempting = GramSpec::full(2, 20).unwrap();
    let expanding = exempting
        .clone()
        .with_include_chinese(true)
        .with_include_numeric(true);

    group.bench_function("mixed_script_exempting", |b| {
        b.iter(|| black_box(expand_text(black_box(&text), &exempting)))
    });

    group.bench_function("mixed_script_expanding", |b| {
        b.iter(|| black_box(expand_text(black_box(&text), &expanding)))
    });

    group.finish();
}

/// End-to-end throughput at different input sizes.
fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    group.sample_size(20);

    for size in [100, 1000].iter() {
        group.bench_with_input(
            format!("segment_and_expand_{size}_words"),
            size,
            |b, &word_count| {
                let text = generate_romanized_text(word_count);
                let spec = GramSpec::full(2, 20).unwrap();

                b.iter(|| black_box(expand_text(black_box(&text), &spec)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_segmentation,
    bench_full_expansion,
    bench_edge_expansion,
    bench_classification
);

// Separate group for slower benchmarks
criterion_group!(slow_benches, bench_end_to_end);

criterion_main!(benches, slow_benches);
