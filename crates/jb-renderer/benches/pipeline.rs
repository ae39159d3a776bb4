//! Benchmarks for heading extraction and the render pipeline.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use jb_renderer::{Highlighter, Pipeline, extract_headings};

/// Generate markdown content with specified structure.
fn generate_markdown(sections: usize, code_blocks_per_section: usize) -> String {
    let mut md = String::with_capacity(sections * 400);
    md.push_str("# JugadBase\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n### Details {i}\n\n"));
        md.push_str("Paragraph with **bold**, *italic* and `inline code`.\n\n");
        for j in 0..code_blocks_per_section {
            md.push_str(&format!(
                "```sql\nSELECT id, name FROM table_{j} WHERE id = {i};\n```\n\n"
            ));
        }
    }
    md
}

fn bench_extract_headings(c: &mut Criterion) {
    let markdown = generate_markdown(20, 0);

    c.bench_function("extract_headings_20_sections", |b| {
        b.iter(|| extract_headings(black_box(&markdown)));
    });
}

fn bench_pipeline_by_size(c: &mut Criterion) {
    let pipeline = Pipeline::standard(Arc::new(Highlighter::default()));
    let mut group = c.benchmark_group("pipeline_by_size");

    for (sections, blocks) in [(5, 1), (20, 2), (50, 3)] {
        let markdown = generate_markdown(sections, blocks);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("standard", format!("{sections}s_{blocks}c")),
            &markdown,
            |b, md| b.iter(|| pipeline.render(md)),
        );
    }

    group.finish();
}

fn bench_pipeline_without_highlighting(c: &mut Criterion) {
    let markdown = generate_markdown(20, 2);
    let pipeline = Pipeline::new()
        .with_stage(jb_renderer::SlugHeadings)
        .with_stage(jb_renderer::AutolinkHeadings);

    c.bench_function("pipeline_no_highlight_20_sections", |b| {
        b.iter(|| pipeline.render(black_box(&markdown)));
    });
}

criterion_group!(
    benches,
    bench_extract_headings,
    bench_pipeline_by_size,
    bench_pipeline_without_highlighting
);
criterion_main!(benches);
