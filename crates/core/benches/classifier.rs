use code_analyser_core::{LanguageRegistry, count_bytes};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_source() -> Vec<u8> {
    let chunk = "/* header\n * block\n */\nfn main() {\n    // line comment\n    let x = 1; // trailing\n\n}\n";
    chunk.repeat(2_000).into_bytes()
}

fn benchmark_count_bytes(c: &mut Criterion) {
    let registry = LanguageRegistry::builtin();
    let Some(rust) = registry.lookup(".rs") else {
        return;
    };
    let input = sample_source();

    c.bench_function("count_bytes_rust_16k_lines", |b| {
        b.iter(|| black_box(count_bytes(black_box(&input), rust)));
    });
}

criterion_group!(benches, benchmark_count_bytes);
criterion_main!(benches);
