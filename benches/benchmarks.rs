use std::hint::black_box;

use clickhouse_exporter::clickhouse::{
    parse_partitions, parse_replicas, partition_schema, replica_schema,
};
use criterion::{criterion_group, criterion_main, Criterion};

fn parts_body(rows: usize) -> String {
    (0..rows)
        .map(|i| {
            format!(
                "db{} tbl{} 2024{:02} {} {} {}\n",
                i % 8,
                i,
                i % 12 + 1,
                1024 * (i + 1),
                i % 16 + 1,
                500 * (i + 1)
            )
        })
        .collect()
}

fn replicas_body(rows: usize) -> String {
    (0..rows)
        .map(|i| format!("db{} tbl{} 0 0 1 0 5 2 {} {} 2 3\n", i % 8, i, i + 100, i + 99))
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let parts = parts_body(1000);
    c.bench_function("parse_partitions_1000_rows", |b| {
        b.iter(|| parse_partitions(black_box(&parts), partition_schema()).unwrap())
    });

    let replicas = replicas_body(1000);
    c.bench_function("parse_replicas_1000_rows", |b| {
        b.iter(|| parse_replicas(black_box(&replicas), replica_schema()).unwrap())
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
