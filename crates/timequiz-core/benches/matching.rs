use criterion::{black_box, criterion_group, criterion_main, Criterion};

use timequiz_core::loader::load_str;
use timequiz_core::matcher::matches;

fn bench_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("matches");

    group.bench_function("exact", |b| b.iter(|| matches(black_box("7"), black_box("7"))));

    group.bench_function("padded_mixed_case", |b| {
        b.iter(|| matches(black_box("Yes"), black_box("  \t yEs  \n")))
    });

    let long_answer = "the quick brown fox jumps over the lazy dog ".repeat(20);
    let long_given = format!("   {}   ", long_answer.to_uppercase());
    group.bench_function("long_answer", |b| {
        b.iter(|| matches(black_box(&long_answer), black_box(&long_given)))
    });

    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    let small = "5+5,10\n1+1,2\n8+3,11\n";
    let large: String = (0..1000).map(|i| format!("{i}+{i},{}\n", i * 2)).collect();
    let quoted: String = (0..200)
        .map(|i| format!("\"what is {i},000 + 1?\",\"{i}001\"\n"))
        .collect();

    group.bench_function("small", |b| b.iter(|| load_str(black_box(small))));
    group.bench_function("thousand_rows", |b| b.iter(|| load_str(black_box(&large))));
    group.bench_function("quoted", |b| b.iter(|| load_str(black_box(&quoted))));

    group.finish();
}

criterion_group!(benches, bench_matches, bench_load);
criterion_main!(benches);
