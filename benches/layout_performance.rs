use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use quire::{DocumentSpec, PipelineBuilder, sample::sample_report};
use serde_json::{Value, json};
use std::hint::black_box;

const LOREM: &str = "Pagination splits content across pages while keeping every block's \
                     relative order intact. Words wrap greedily against the column width.";

fn document(blocks: Vec<Value>) -> DocumentSpec {
    let value = json!({
        "geometry": {"pageSize": "A4", "margins": "52pt 36pt 42pt 36pt"},
        "styles": [
            {"name": "Body", "fontSize": 10, "leading": 12},
            {"name": "Small", "parent": "Body", "fontSize": 8}
        ],
        "blocks": blocks,
        "template": {
            "footer": {"center": {"text": "Page %p of %t", "style": "Small"}, "offset": 18}
        }
    });
    DocumentSpec::from_json(&value.to_string()).expect("Failed to parse benchmark document")
}

fn paragraphs(count: usize) -> DocumentSpec {
    document(
        (0..count)
            .map(|i| json!({"type": "paragraph", "text": format!("{i}. {LOREM}"), "style": "Body"}))
            .collect(),
    )
}

fn table(rows: usize) -> DocumentSpec {
    let rows: Vec<Value> = (0..rows)
        .map(|i| {
            json!([
                {"type": "paragraph", "text": format!("Row {}", i + 1), "style": "Body"},
                {"type": "paragraph", "text": LOREM, "style": "Body"}
            ])
        })
        .collect();
    document(vec![json!({
        "type": "table",
        "columnWidths": [120, 403.28],
        "cellStyle": {"padding": "4pt 6pt", "grid": {"width": 0.5, "color": "#E2E8F0"}},
        "rows": rows
    })])
}

fn benchmark_layout_paragraphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_paragraphs");

    for count in [10, 100, 1000] {
        let pipeline = PipelineBuilder::new()
            .with_document(paragraphs(count))
            .build()
            .expect("Failed to build pipeline");

        group.bench_with_input(BenchmarkId::new("paragraphs", count), &count, |b, _| {
            b.iter(|| black_box(pipeline.layout().expect("Layout failed")));
        });
    }

    group.finish();
}

fn benchmark_layout_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_tables");

    for row_count in [10, 100, 500] {
        let pipeline = PipelineBuilder::new()
            .with_document(table(row_count))
            .build()
            .expect("Failed to build pipeline");

        group.bench_with_input(BenchmarkId::new("rows", row_count), &row_count, |b, _| {
            b.iter(|| black_box(pipeline.render().expect("Render failed")));
        });
    }

    group.finish();
}

fn benchmark_sample_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_report");
    let pipeline = PipelineBuilder::new()
        .with_document(sample_report())
        .build()
        .expect("Failed to build pipeline");

    group.bench_function("layout_and_decorate", |b| {
        b.iter(|| black_box(pipeline.render().expect("Render failed")));
    });
    group.bench_function("pdf", |b| {
        b.iter(|| black_box(pipeline.render_pdf().expect("PDF generation failed")));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_layout_paragraphs,
    benchmark_layout_tables,
    benchmark_sample_report
);
criterion_main!(benches);
