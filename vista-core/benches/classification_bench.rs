//! Benchmarks for the column analysis pipeline.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use vista_core::prelude::*;

/// A plausible mid-sized load: an identifier column, a continuous
/// measurement, and a low-cardinality category, all as raw text.
fn build_table(rows: usize) -> Table {
    let ids: Vec<String> = (0..rows).map(|i| i.to_string()).collect();
    let scores: Vec<String> = (0..rows).map(|i| format!("{}.5", i % 1000)).collect();
    let labels: Vec<String> = (0..rows).map(|i| format!("group_{}", i % 12)).collect();
    Table::new(vec![
        Column::from_strings("id", &ids),
        Column::from_strings("score", &scores),
        Column::from_strings("label", &labels),
    ])
    .expect("columns share a row count")
}

fn bench_pipeline(c: &mut Criterion) {
    let table = build_table(10_000);
    let domains = column_domains(&table);

    c.bench_function("column_domains_10k", |b| {
        b.iter(|| column_domains(std::hint::black_box(&table)))
    });

    c.bench_function("classify_columns_10k", |b| {
        b.iter(|| {
            classify_columns(
                std::hint::black_box(&table),
                std::hint::black_box(&domains),
            )
        })
    });

    c.bench_function("analyze_table_10k", |b| {
        b.iter_batched(
            || table.clone(),
            |mut table| analyze_table(&mut table).expect("analysis succeeds"),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
