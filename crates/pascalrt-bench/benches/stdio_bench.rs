//! Output rendering benchmarks.
//!
//! Measures the `%g`/`%d` renderers the write family is built on. The ABI
//! crate is not linked: its release exports would replace write(2) for the
//! benchmark binary itself.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use pascalrt_core::stdio::{LineEnd, integer_output, real_output, text_output};

fn bench_real(c: &mut Criterion) {
    let values: &[(&str, f64)] = &[
        ("integral", 2.0),
        ("short", 3.14),
        ("full", std::f64::consts::PI),
        ("tiny", 1.0e-7),
        ("huge", 6.022e23),
        ("nan", f64::NAN),
    ];
    let mut group = c.benchmark_group("real_output");
    for &(name, x) in values {
        group.bench_with_input(BenchmarkId::new("writelnf", name), &x, |b, &x| {
            b.iter(|| criterion::black_box(real_output(criterion::black_box(x), LineEnd::Newline)));
        });
    }
    group.finish();
}

fn bench_integer(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_output");
    for n in [0, 42, -7, i32::MAX, i32::MIN] {
        group.bench_with_input(BenchmarkId::new("writelni", n), &n, |b, &n| {
            b.iter(|| criterion::black_box(integer_output(criterion::black_box(n), LineEnd::Newline)));
        });
    }
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let line: &[u8] = b"the quick brown fox jumps over the lazy dog";
    c.bench_function("text_output/writeln", |b| {
        b.iter(|| criterion::black_box(text_output(Some(criterion::black_box(line)), LineEnd::Newline)));
    });
}

criterion_group!(benches, bench_real, bench_integer, bench_text);
criterion_main!(benches);
