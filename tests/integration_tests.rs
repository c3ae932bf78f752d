mod common;

use chrono::{TimeZone, Utc};
use common::fixtures::*;
use common::{GeneratedPdf, TestResult, document, init_logger};
use quire::sample::sample_report;
use quire::{DocumentSpec, PipelineBuilder, PipelineError, render_batch};
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_sample_report_renders() -> TestResult {
    init_logger();

    let pipeline = PipelineBuilder::new().with_document(sample_report()).build()?;
    let pdf = GeneratedPdf::from_bytes(pipeline.render_pdf()?)?;
    let total = pdf.page_count();

    assert!(total >= 7, "expected at least one page per section, got {}", total);
    assert_pdf_contains_text!(pdf, "EU Label Compliance,");
    assert_pdf_contains_text!(pdf, "Findings Overview");
    assert_pdf_contains_text!(pdf, "Audit Trail");
    assert_pdf_has_font!(pdf, "Helvetica-Bold");
    assert_pdf_has_font!(pdf, "Courier");

    let last = format!("Page {} of {}", total, total);
    assert!(pdf.page_text(total as u32).contains(&last));
    assert!(pdf.page_text(1).iter().any(|t| t == "Nexodify AVA"));
    Ok(())
}

#[test]
fn test_document_json_round_trip() -> TestResult {
    let doc = sample_report();
    let json = doc.to_json()?;
    let parsed = DocumentSpec::from_json(&json)?;
    assert_eq!(parsed, doc);
    Ok(())
}

#[test]
fn test_non_ascii_color_is_a_json_error() {
    let json = r##"{"template": {"background": "#a€bb"}}"##;
    let err = DocumentSpec::from_json(json).unwrap_err();
    assert!(matches!(err, PipelineError::Json(_)), "unexpected error: {err}");
}

#[test]
fn test_reproducible_output_with_fixed_date() -> TestResult {
    init_logger();

    let date = Utc.with_ymd_and_hms(2025, 1, 5, 14, 32, 0).unwrap();
    let build = || {
        PipelineBuilder::new()
            .with_document(sample_report())
            .with_creation_date(date)
            .build()
    };
    assert_eq!(build()?.render_pdf()?, build()?.render_pdf()?);
    Ok(())
}

#[test]
fn test_generate_pdf_file() -> TestResult {
    init_logger();

    let dir = tempdir()?;
    let path = dir.path().join("report.pdf");
    let pipeline = PipelineBuilder::new()
        .with_document(document(&numbered_document(vec![
            paragraph("one"),
            page_break(),
            paragraph("two"),
        ]))?)
        .build()?;
    let summary = pipeline.generate_to_file(&path)?;

    let bytes = fs::read(&path)?;
    assert_eq!(summary.pages, 2);
    assert_eq!(summary.bytes, bytes.len() as u64);
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(GeneratedPdf::from_bytes(bytes)?.page_count(), 2);
    Ok(())
}

#[test]
fn test_generate_json_file() -> TestResult {
    init_logger();

    let dir = tempdir()?;
    let path = dir.path().join("pages.json");
    let pipeline = PipelineBuilder::new()
        .with_document(document(&numbered_document(vec![paragraph("hi")]))?)
        .build()?;
    pipeline.generate_to_file(&path)?;

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(value["pageCount"], 1);
    assert_eq!(value["pages"][0]["commands"][0]["op"], "fillRect");
    Ok(())
}

#[test]
fn test_document_file_loading() -> TestResult {
    init_logger();

    let dir = tempdir()?;
    let path = dir.path().join("doc.json");
    fs::write(&path, serde_json::to_string(&numbered_document(vec![paragraph("file")]))?)?;

    let pages = PipelineBuilder::new()
        .with_document_file(&path)?
        .build()?
        .render()?;
    assert!(pages[0].texts().any(|t| t == "file"));

    let missing = PipelineBuilder::new().with_document_file(dir.path().join("nope.json"));
    assert!(matches!(missing, Err(PipelineError::Io(_))));
    Ok(())
}

#[test]
fn test_render_batch_keeps_order_and_isolates_errors() -> TestResult {
    init_logger();

    let ok = |n: usize| -> Result<DocumentSpec, PipelineError> {
        let blocks = (0..n)
            .flat_map(|i| [paragraph(&format!("doc page {}", i)), page_break()])
            .take(2 * n - 1)
            .collect();
        document(&numbered_document(blocks))
    };
    let broken = document(&document_with_content_area(100.0, 100.0, vec![spacer(500.0)]))?;

    let results = render_batch(&[ok(1)?, broken, ok(3)?]);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().map(Vec::len).ok(), Some(1));
    assert!(matches!(results[1], Err(PipelineError::Layout(_))));
    assert_eq!(results[2].as_ref().map(Vec::len).ok(), Some(3));
    Ok(())
}

#[test]
fn test_cli_writes_sample_report() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("sample.pdf");
    let output = Command::new(env!("CARGO_BIN_EXE_quire")).arg(&path).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("Generated "), "{}", stdout);
    assert!(stdout.contains(" pages, "));
    assert!(stdout.trim_end().ends_with("KB)"));
    assert!(GeneratedPdf::from_bytes(fs::read(&path)?)?.page_count() >= 7);
    Ok(())
}

#[test]
fn test_cli_fails_on_bad_document() -> TestResult {
    let dir = tempdir()?;
    let doc = dir.path().join("broken.json");
    fs::write(&doc, "{ not json")?;
    let output = Command::new(env!("CARGO_BIN_EXE_quire"))
        .arg(dir.path().join("out.pdf"))
        .arg(&doc)
        .output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));
    Ok(())
}
