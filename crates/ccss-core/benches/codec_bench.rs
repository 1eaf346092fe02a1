//! Codec benchmarks
//!
//! Parse, serialize, and field access on the packed record.

use std::hint::black_box;

use ccss_core::{CcssVector, Metric};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const VECTORS: &[(&str, &str)] = &[
    ("base", "AV:N/AC:L/Au:N/C:N/I:P/A:N/PL:ND/EM:P"),
    ("temporal", "AV:L/AC:L/Au:N/C:P/I:P/A:P/PL:U/EM:A/GEL:L/GRL:M"),
    (
        "full",
        "AV:L/AC:L/Au:N/C:P/I:P/A:P/PL:U/EM:A/GEL:L/GRL:M/LVP:L/PTV:L/LRL:L/EC:C/EI:C/EA:C/CDP:L/CR:M/IR:M/AR:L",
    ),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, vector) in VECTORS {
        group.bench_with_input(BenchmarkId::from_parameter(name), vector, |b, v| {
            b.iter(|| CcssVector::parse(black_box(v)))
        });
    }
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    for (name, vector) in VECTORS {
        let record = CcssVector::parse(vector).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &record, |b, r| {
            b.iter(|| black_box(r).to_vector_string())
        });
    }
    group.finish();
}

fn bench_field_access(c: &mut Criterion) {
    let record = CcssVector::parse(VECTORS[2].1).unwrap();
    c.bench_function("read_all_metrics", |b| {
        b.iter(|| {
            Metric::ALL
                .iter()
                .map(|m| black_box(&record).index_of(*m) as u32)
                .sum::<u32>()
        })
    });
    c.bench_function("set_by_abbreviation", |b| {
        let mut scratch = record;
        b.iter(|| scratch.set(black_box("EI"), black_box("P")))
    });
}

criterion_group!(benches, bench_parse, bench_serialize, bench_field_access);
criterion_main!(benches);
