//! Correction benchmarks.
//!
//! Measures reference parsing and fix application on synthetic corpora.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glyphcheck::correction::{apply_fixes, compute_fixes};
use glyphcheck::corpus::extract;
use glyphcheck::validation::validate_all;
use glyphcheck::ReferenceDatabase;

/// Generate a reference corpus with `rows` records over a rotating alphabet.
fn generate_reference(rows: usize) -> String {
    let mut data = String::new();
    for row in 0..rows {
        let character = char::from_u32(0x4E00 + (row % 20_000) as u32).unwrap_or('一');
        data.push_str(&format!("{}\t{}\t{}\n", ["ab", "cde", "f"][row % 3], character, rows - row));
    }
    data
}

/// Benchmark building the reference database.
fn bench_build_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_reference");

    for rows in [1_000, 10_000, 100_000].iter() {
        let data = generate_reference(*rows);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| black_box(ReferenceDatabase::build(data)))
        });
    }

    group.finish();
}

/// Benchmark applying fixes with a growing number of correction groups.
fn bench_apply_fixes(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_fixes");
    let db = ReferenceDatabase::build(&generate_reference(1_000));

    for tokens in [100, 1_000, 10_000].iter() {
        let text: String = (0..*tokens)
            .map(|i| {
                let character = char::from_u32(0x4E00 + (i % 1_000) as u32).unwrap_or('一');
                format!("  makeChar(\"{}\", \"ZZ\", None, ()),\n", character)
            })
            .collect();
        let report = validate_all(&db, &extract(&text), &text);
        let groups = compute_fixes(&report.incorrect);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("tokens", tokens), &text, |b, text| {
            b.iter(|| black_box(apply_fixes(text, &groups)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_reference, bench_apply_fixes);
criterion_main!(benches);
