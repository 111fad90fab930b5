//! Benchmarks for the swatch pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use swatch::{from_css, parse_stylesheet, ColorFormat, Options, SortOrder};

const SMALL_SHEET: &str = "a { color: red; } p { color: blue; }";

fn large_sheet() -> String {
    let mut css = String::from(":root { --accent: #123123; --base: rgb(1, 2, 3); }\n");
    for i in 0..200 {
        css.push_str(&format!(
            ".block-{i} {{ color: var(--accent); border: 1px solid #aabbcc; \
             background: linear-gradient(to bottom, rgba({}, 40, 60, 0.5), hsl({}, 50%, 50%)); }}\n",
            i % 256,
            i % 360,
        ));
    }
    css
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let sheet = large_sheet();

    group.bench_function("parse_small", |b| {
        b.iter(|| parse_stylesheet(black_box(SMALL_SHEET)).unwrap())
    });

    group.bench_function("parse_large", |b| {
        b.iter(|| parse_stylesheet(black_box(&sheet)).unwrap())
    });

    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    let sheet = large_sheet();

    group.bench_function("extract_defaults", |b| {
        let options = Options::default();
        b.iter(|| from_css(black_box(&sheet), &options).unwrap())
    });

    group.bench_function("extract_formatted_sorted", |b| {
        let options = Options {
            color_format: Some(ColorFormat::HexString),
            sort: Some(SortOrder::Frequency),
            ..Options::default()
        };
        b.iter(|| from_css(black_box(&sheet), &options).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_extraction);
criterion_main!(benches);
