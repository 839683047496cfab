//! Lexer benchmarks.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use prolog_lex::tokenize;

fn token_count(source: &str) -> usize {
    tokenize(source).map(|tokens| tokens.len()).unwrap_or(0)
}

fn bench_clauses(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = r"
% standard list append
append([], L, L).
append([H|T], L, [H|R]) :- append(T, L, R).

max(X, Y, X) :- X >= Y, !.
max(_, Y, Y).
";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("fact", |b| {
        b.iter(|| token_count(black_box("likes(mary, wine).")))
    });

    group.bench_function("small_program", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    group.bench_function("quoted_plain", |b| {
        b.iter(|| token_count(black_box("'a plain quoted atom with some length'")))
    });

    group.bench_function("quoted_escapes", |b| {
        b.iter(|| token_count(black_box(r"'tab\there \x41\ and B and \101'")))
    });

    group.bench_function("hex", |b| {
        b.iter(|| token_count(black_box("0xdeadbeef 0x1 0xFFFF")))
    });

    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_operators");

    group.bench_function("long_runs", |b| {
        b.iter(|| token_count(black_box("A =.. B, C =:= D ; E *-> F | G")))
    });

    group.bench_function("mark_fallback", |b| {
        b.iter(|| token_count(black_box("~ ~ ~ # # #")))
    });

    group.finish();
}

fn bench_comments(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_comments");

    group.bench_function("line_comments", |b| {
        b.iter(|| token_count(black_box("% one\n% two\n% three\nfoo.\n")))
    });

    group.bench_function("block_comment", |b| {
        b.iter(|| token_count(black_box("/* a reasonably long block comment body */ foo.")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_clauses,
    bench_literals,
    bench_operators,
    bench_comments
);
criterion_main!(benches);
