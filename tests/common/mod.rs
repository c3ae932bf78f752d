pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use quire::{DecoratedPage, DocumentSpec, PipelineBuilder, PipelineError};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text drawn on a 1-based page, one entry per text operation.
    pub fn page_text(&self, page: u32) -> Vec<String> {
        pdf_assertions::page_text(&self.doc, page)
    }
}

/// Parses a JSON document descriptor.
pub fn document(json: &Value) -> Result<DocumentSpec, PipelineError> {
    Ok(serde_json::from_value(json.clone())?)
}

/// Both passes, returning the decorated pages.
pub fn render_pages(json: &Value) -> Result<Vec<DecoratedPage>, PipelineError> {
    PipelineBuilder::new()
        .with_document(document(json)?)
        .build()?
        .render()
}

/// Renders a JSON document descriptor to PDF and re-loads it.
pub fn generate_pdf(json: &Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let pipeline = PipelineBuilder::new().with_document(document(json)?).build()?;
    GeneratedPdf::from_bytes(pipeline.render_pdf()?)
}
