//! Performance benchmarks for number selection and device output parsing.
//!
//! These run on every chat action and on every list refresh:
//! - Best-number selection over contacts with few and many numbers
//! - Normalization of stored numbers into link digits
//! - Parsing `content query` output of different sizes

use contact_gateway_mcp::client::parse_content_rows;
use contact_gateway_mcp::domain::{PhoneEntry, PhoneType};
use contact_gateway_mcp::{normalize_for_messaging_link, select_best_number};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

fn phone_entries(count: usize) -> Vec<PhoneEntry> {
    (0..count)
        .map(|i| {
            let phone_type = if i % 3 == 0 {
                PhoneType::Mobile
            } else {
                PhoneType::Work
            };
            PhoneEntry::new(format!("06-{:08}", i), phone_type)
        })
        .collect()
}

fn content_query_output(rows: usize) -> String {
    (0..rows)
        .map(|i| {
            format!(
                "Row: {} _id={}, lookup=0r{}-ABC, display_name=Contact {}\n",
                i, i, i, i
            )
        })
        .collect()
}

fn bench_select_best_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_best_number");

    for count in [1, 5, 50].iter() {
        let entries = phone_entries(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| select_best_number(black_box(entries.clone())));
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let numbers = [
        "06-12345678",
        "+31 6 12345678",
        "0031612345678",
        "+44 20 7946 0958",
    ];

    c.bench_function("normalize_for_messaging_link", |b| {
        b.iter(|| {
            for number in numbers.iter() {
                black_box(normalize_for_messaging_link(black_box(number), "31"));
            }
        });
    });
}

fn bench_parse_content_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_content_rows");

    for rows in [10, 100, 1000].iter() {
        let output = content_query_output(*rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), rows, |b, _| {
            b.iter(|| parse_content_rows(black_box(&output), &["_id", "lookup", "display_name"]));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_select_best_number,
        bench_normalize,
        bench_parse_content_rows
}

criterion_main!(benches);
