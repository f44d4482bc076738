//! Benchmark – `spansplit` delimiter strategies.
#![allow(missing_docs)]

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use spansplit::{TextOptions, split_any_str, split_str};

/// Produce a deterministic comma-separated payload of `fields` short fields
/// so every scenario scans the same amount of data.
fn make_payload(fields: usize, separator: &str) -> String {
    let mut payload = String::with_capacity(fields * 8);
    for index in 0..fields {
        if index > 0 {
            payload.push_str(separator);
        }
        payload.push_str("field");
        payload.push_str(&(index % 100).to_string());
    }
    payload
}

fn bench_split(c: &mut Criterion) {
    let comma = make_payload(10_000, ",");
    let spaced = make_payload(10_000, " \t ");

    let mut group = c.benchmark_group("split");

    group.bench_function("sequence", |b| {
        b.iter(|| black_box(split_str(black_box(&comma), ",").count()));
    });

    group.bench_function("whitespace_any", |b| {
        b.iter(|| black_box(split_any_str(black_box(&spaced), &[]).count()));
    });

    group.bench_function("whitespace_any_drop_empty", |b| {
        b.iter(|| {
            let options = TextOptions {
                remove_empty_entries: true,
                ..Default::default()
            };
            black_box(
                split_any_str(black_box(&spaced), &[])
                    .with_options(options)
                    .count(),
            );
        });
    });

    group.finish();
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
