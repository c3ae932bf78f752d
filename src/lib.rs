//! Quire lays a tree of blocks (paragraphs, tables, cards, spacers and page
//! breaks) onto fixed-size pages, then decorates every page with a
//! background, a header and a footer that can read "Page X of N".
//!
//! The work is split across the workspace crates; this crate ties them into
//! a [`DocumentPipeline`] and re-exports the types callers need.

pub mod document;
pub mod error;
pub mod pipeline;
pub mod sample;

pub use document::DocumentSpec;
pub use error::PipelineError;
pub use pipeline::{DocumentPipeline, LaidOutDocument, PipelineBuilder, RenderSummary, render_batch};

pub use quire_layout::{
    Block, Card, LayoutConfig, LayoutEngine, LayoutError, Page, PageGeometry, Paragraph, Spacer,
    Table, TableStyle,
};
pub use quire_render_core::{
    Band, BandText, DecoratedPage, DocumentWriter, DrawCommand, JsonWriter, PageDecorator,
    PageTemplate, RenderError, Rule, TextTemplate,
};
pub use quire_render_lopdf::PdfWriter;
pub use quire_style::{
    Style, StyleDefinition, StyleError, StyleOverride, StyleRegistry, TextAlign, VerticalAlign,
};
pub use quire_types::{Border, BorderStyle, Color, EdgeInsets, Margins, PageSize};
