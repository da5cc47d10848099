//! Synthesis benchmarks.
//!
//! Measures parse + synthesize + print for structs of increasing size, and
//! synthesis alone on a pre-parsed declaration.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use pmi_emitter::{EmitOptions, InitializerPrinter, synthesize_initializer};
use pmi_parser::parse_source_file;

/// A struct with `groups` shorthand groups of four members each, plus a
/// defaulted and a computed member per group.
fn generate_struct(groups: usize) -> String {
    let mut source = String::from("@PublicMemberwiseInitializer\npublic struct Big {\n");
    for i in 0..groups {
        source.push_str(&format!(
            "    let a{i}, b{i}: [String: [Int?]], c{i}, d{i}: String?\n"
        ));
        source.push_str(&format!("    var e{i} = {i}\n"));
        source.push_str(&format!("    var f{i}: Int {{ {i} }}\n"));
    }
    source.push_str("}\n");
    source
}

fn bench_synthesize_only(c: &mut Criterion) {
    let source = generate_struct(64);
    let file = parse_source_file("big.swift", &source);
    let decl = &file.declarations[0];
    let options = EmitOptions::default();

    c.bench_function("synthesize_256_members", |b| {
        b.iter(|| black_box(synthesize_initializer(black_box(decl), &options)));
    });
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_synthesize_print");
    let options = EmitOptions::default();

    for groups in [1usize, 16, 256] {
        let source = generate_struct(groups);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("groups", groups), &source, |b, source| {
            b.iter(|| {
                let file = parse_source_file("big.swift", black_box(source));
                let init = synthesize_initializer(&file.declarations[0], &options);
                black_box(init.map(|init| InitializerPrinter::emit_to_string(&init)))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_synthesize_only, bench_end_to_end);
criterion_main!(benches);
