use super::orchestrator::DocumentPipeline;
use crate::document::DocumentSpec;
use crate::error::PipelineError;
use chrono::{DateTime, Utc};
use quire_layout::LayoutConfig;
use quire_render_core::PageDecorator;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a `DocumentPipeline`.
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    document: Option<DocumentSpec>,
    layout: Option<LayoutConfig>,
    title: Option<String>,
    creation_date: Option<DateTime<Utc>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Configures the pipeline with a programmatically built document.
    pub fn with_document(mut self, document: DocumentSpec) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_document_json(mut self, json: &str) -> Result<Self, PipelineError> {
        self.document = Some(DocumentSpec::from_json(json)?);
        Ok(self)
    }

    pub fn with_document_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.document = Some(DocumentSpec::from_file(path)?);
        Ok(self)
    }

    /// Replaces the document's own layout configuration.
    pub fn with_layout_config(mut self, config: LayoutConfig) -> Self {
        self.layout = Some(config);
        self
    }

    /// Overrides the document title written to the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Pins the PDF creation date, for byte-for-byte reproducible output.
    pub fn with_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = Some(date);
        self
    }

    /// Consumes the builder and creates the `DocumentPipeline`.
    ///
    /// Styles are registered and the page template is checked against them
    /// here, so configuration mistakes surface before any layout work.
    pub fn build(self) -> Result<DocumentPipeline, PipelineError> {
        let mut document = self.document.ok_or_else(|| {
            PipelineError::Config(
                "No document has been configured. Use `with_document` or `with_document_file`."
                    .to_string(),
            )
        })?;
        if let Some(layout) = self.layout {
            document.layout = layout;
        }
        if let Some(title) = self.title {
            document.title = Some(title);
        }

        let styles = Arc::new(document.style_registry()?);
        let decorator = PageDecorator::new(&document.template, &document.geometry, &styles)?;
        log::debug!(
            "Pipeline ready: {} styles, {} top-level blocks",
            styles.len(),
            document.blocks.len()
        );

        Ok(DocumentPipeline::new(
            document,
            styles,
            decorator,
            self.creation_date,
        ))
    }
}
