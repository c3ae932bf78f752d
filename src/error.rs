use quire_layout::LayoutError;
use quire_render_core::RenderError;
use quire_style::StyleError;
use thiserror::Error;

/// A comprehensive error type for the entire document generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Style registry rejected the document styles: {0}")]
    Style(#[from] StyleError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pipeline is not configured correctly: {0}")]
    Config(String),
}
