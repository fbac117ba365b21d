//! Scanner benchmarks for `monkey_lexer`.
//!
//! Measures pure tokenization throughput: tokens are consumed in a tight
//! loop without being collected.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use monkey_lexer::{KeywordTable, Scanner};

/// Generate N simple functions for scaling benchmarks.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| format!("let func{i} = fn(x, y) {{ if (x < y) {{ return x + {i}; }} else {{ return y; }} }};"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn scan_all(src: &str, keywords: &KeywordTable) {
    let mut scanner = Scanner::with_keywords(src, keywords);
    loop {
        let tok = scanner.next_token();
        if tok.is_eof() {
            break;
        }
        black_box(tok);
    }
}

/// Benchmark scanner throughput at various scales.
fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/throughput");

    for num_functions in [10, 100, 1000, 5000] {
        let source = generate_n_functions(num_functions);
        let bytes = source.len() as u64;

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &source,
            |b, src| b.iter(|| scan_all(src, KeywordTable::standard())),
        );
    }

    group.finish();
}

/// Compare keyword resolution cost between the built-in tables.
fn bench_keyword_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/keywords");
    let source = generate_n_functions(1000);
    let minimal = KeywordTable::minimal();
    let empty = KeywordTable::empty();

    group.bench_function("standard", |b| {
        b.iter(|| scan_all(&source, KeywordTable::standard()));
    });
    group.bench_function("minimal", |b| b.iter(|| scan_all(&source, &minimal)));
    group.bench_function("empty", |b| b.iter(|| scan_all(&source, &empty)));

    group.finish();
}

criterion_group!(benches, bench_throughput, bench_keyword_tables);
criterion_main!(benches);
