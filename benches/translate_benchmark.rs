//! Benchmarks for mdocx translation and packaging.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic Markdown source with the given number of sections.
fn create_test_markdown(section_count: usize) -> String {
    let mut content = String::from("# Benchmark document\n\n");

    for i in 0..section_count {
        content.push_str(&format!("## Section {}\n", i + 1));
        content.push_str("Plain paragraph text for translation throughput.\n");
        content.push_str("A line with **bold** spans and **more bold** inside.\n");
        content.push_str("- first bullet\n* second bullet\n");
        content.push_str(&format!("{}. numbered item\n\n", i + 1));
    }

    content
}

/// Benchmark single-line classification.
fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_numbered", |b| {
        b.iter(|| mdocx::classify(black_box("12. Twelfth item")));
    });

    c.bench_function("classify_plain", |b| {
        b.iter(|| mdocx::classify(black_box("Nothing special on this line")));
    });
}

/// Benchmark translation at various sizes.
fn bench_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation");

    for section_count in [10, 100, 1000].iter() {
        let source = create_test_markdown(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| mdocx::parse_str(black_box(&source)));
        });
    }

    group.finish();
}

/// Benchmark DOCX packaging.
fn bench_docx(c: &mut Criterion) {
    let doc = mdocx::parse_str(&create_test_markdown(100));
    let options = mdocx::RenderOptions::default();

    c.bench_function("docx_100_sections", |b| {
        b.iter(|| mdocx::render::to_docx(black_box(&doc), &options).unwrap());
    });
}

criterion_group!(benches, bench_classify, bench_translation, bench_docx);
criterion_main!(benches);
