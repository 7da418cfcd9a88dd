//! Benchmarks for link and sample cell encoding.
//!
//! Benchmark targets:
//! - Single link encoding: <5us
//! - Cell with 50 links: <250us

// Criterion macros generate items without docs - this is expected for benchmarks
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use downloadable_export::io::{decode_cell, encode_link, encode_sample, format_row, join_components};
use downloadable_export::{ExportConfig, Link, Payload, Product, Sample, Shareable};

fn product() -> Product {
    Product::downloadable(1_u64)
        .with_links_title("Downloads")
        .with_samples_title("Previews")
        .with_links_purchased_separately(true)
}

fn full_link(i: usize) -> Link {
    Link::new(format!("Track {i}"), Payload::url(format!("https://cdn.example/t{i}.mp3")))
        .with_price(1.99)
        .with_downloads(3)
        .with_sort_order(i64::try_from(i).unwrap_or(i64::MAX))
        .with_shareable(Shareable::No)
        .with_sample(Payload::file(format!("previews/t{i}.mp3")))
}

fn bench_single_component(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_component");
    group.measurement_time(Duration::from_secs(5));

    let config = ExportConfig::default();
    let product = product();
    let link = full_link(1);
    let sample = Sample::new("Preview", Payload::file("preview.pdf")).with_sort_order(1);

    group.bench_function("link", |b| {
        b.iter(|| format_row(&encode_link(black_box(&product), black_box(&link)), &config));
    });

    group.bench_function("sample", |b| {
        b.iter(|| format_row(&encode_sample(black_box(&product), black_box(&sample)), &config));
    });

    group.finish();
}

fn bench_cell(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell");
    let config = ExportConfig::default();
    let product = product();

    for size in [1_usize, 10, 50] {
        let links: Vec<Link> = (0..size).map(full_link).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &links, |b, links| {
            b.iter(|| {
                join_components(
                    links
                        .iter()
                        .map(|link| format_row(&encode_link(&product, link), &config)),
                    &config,
                )
            });
        });

        let cell = join_components(
            links
                .iter()
                .map(|link| format_row(&encode_link(&product, link), &config)),
            &config,
        )
        .unwrap_or_default();
        group.bench_with_input(BenchmarkId::new("decode", size), &cell, |b, cell| {
            b.iter(|| decode_cell(black_box(cell), &config));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_component, bench_cell);
criterion_main!(benches);
