//! Document generation pipeline.
//!
//! Layout runs once and materialises every page; decoration then runs once
//! per page with the final page count, which is what makes "Page X of N"
//! footers possible.
//!
//! - [`PipelineBuilder`]: fluent builder for a [`DocumentPipeline`]
//! - [`LaidOutDocument`]: the undecorated pages of one layout run
//! - [`render_batch`]: independent documents rendered in parallel
//!
//! # Example
//!
//! ```ignore
//! use quire::PipelineBuilder;
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_document_file("report.json")?
//!     .build()?;
//!
//! pipeline.generate_to_file("report.pdf")?;
//! ```

mod batch;
mod builder;
mod orchestrator;

pub use batch::render_batch;
pub use builder::PipelineBuilder;
pub use orchestrator::{DocumentPipeline, LaidOutDocument, RenderSummary};
