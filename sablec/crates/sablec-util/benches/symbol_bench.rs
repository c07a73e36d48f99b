//! Interning benchmarks
//!
//! Measures the interning table under the workload the lexer produces:
//! many repeats of a small set of identifiers, mixed ASCII and non-ASCII.
//! Run with: `cargo bench --bench symbol_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sablec_util::symbol::Symbol;

/// Identifier spellings as they come out of normalization.
const NAMES: &[&str] = &[
    "self", "value", "μ", "ä", "переменная", "蟒蛇", "Unicode", "fi", "XII", "x1",
];

fn bench_intern(c: &mut Criterion) {
    let mut group = c.benchmark_group("intern");
    group.throughput(Throughput::Elements(NAMES.len() as u64));

    for name in NAMES {
        Symbol::intern(name);
    }

    group.bench_function("known_names", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(Symbol::intern(name));
            }
        })
    });

    group.bench_function("fresh_name", |b| {
        let mut counter = 0u64;
        b.iter(|| {
            counter += 1;
            Symbol::intern(&format!("ident_{}", counter))
        })
    });

    group.bench_function("lookup_unknown", |b| {
        b.iter(|| black_box(Symbol::lookup("never_bound_ξ")))
    });

    group.finish();
}

fn bench_name_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("name_length");

    for &len in &[1, 8, 64, 512] {
        let ascii = "a".repeat(len);
        let cyrillic = "ж".repeat(len);
        group.bench_with_input(BenchmarkId::new("ascii", len), &ascii, |b, s| {
            b.iter(|| black_box(Symbol::intern(s)))
        });
        group.bench_with_input(BenchmarkId::new("cyrillic", len), &cyrillic, |b, s| {
            b.iter(|| black_box(Symbol::intern(s)))
        });
    }

    group.finish();
}

/// Parallel lexers interning the same names, as `sablet check` does.
fn bench_parallel_files(c: &mut Criterion) {
    use std::thread;

    let mut group = c.benchmark_group("parallel_files");

    for &files in &[1, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(files), &files, |b, &n| {
            b.iter(|| {
                let workers: Vec<_> = (0..n)
                    .map(|_| {
                        thread::spawn(|| {
                            for _ in 0..50 {
                                for name in NAMES {
                                    black_box(Symbol::intern(name));
                                }
                            }
                        })
                    })
                    .collect();

                for worker in workers {
                    worker.join().unwrap();
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_intern, bench_name_length, bench_parallel_files);
criterion_main!(benches);
