//! Lexer Benchmarks
//!
//! Measures identifier scanning with and without normalization work.
//! Run with: `cargo bench --package sablec-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sablec_lex::normalize::normalize_str;
use sablec_lex::Lexer;
use sablec_util::{Handler, SourceFile};

fn lexer_token_count(source: &str) -> usize {
    let file = SourceFile::new(0, "bench.sb", source);
    let handler = Handler::new();
    Lexer::new(&file, &handler).count()
}

fn bench_lexer_ascii(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_ascii");

    let source = "alpha = 1\nbeta = alpha + 2\ngamma_delta = (beta * 3) / 4\n".repeat(50);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("short_assignment", |b| {
        b.iter(|| lexer_token_count(black_box("x = 42")))
    });

    group.bench_function("assignments", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_lexer_unicode(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_unicode");

    // NFKC fixed points: quick check answers Yes, no allocation.
    let stable = "ä = 1\n蟒 = 2\nжираф = 3\n".repeat(50);
    group.throughput(Throughput::Bytes(stable.len() as u64));
    group.bench_function("fixed_points", |b| {
        b.iter(|| lexer_token_count(black_box(&stable)))
    });

    // Every identifier is rewritten by normalization.
    let rewritten = "µ = 1\nﬁle = 2\n𝔘𝔫𝔦𝔠𝔬𝔡𝔢 = 3\n".repeat(50);
    group.throughput(Throughput::Bytes(rewritten.len() as u64));
    group.bench_function("compatibility_forms", |b| {
        b.iter(|| lexer_token_count(black_box(&rewritten)))
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("ascii", |b| {
        b.iter(|| normalize_str(black_box("very_long_variable_name")))
    });

    group.bench_function("quick_check_yes", |b| {
        b.iter(|| normalize_str(black_box("переменная")))
    });

    group.bench_function("fraktur", |b| {
        b.iter(|| normalize_str(black_box("𝔘𝔫𝔦𝔠𝔬𝔡𝔢")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_ascii,
    bench_lexer_unicode,
    bench_normalize
);
criterion_main!(benches);
