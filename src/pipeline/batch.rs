use super::builder::PipelineBuilder;
use crate::document::DocumentSpec;
use crate::error::PipelineError;
use quire_render_core::DecoratedPage;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Renders independent documents, one result per input in input order.
///
/// Each document gets its own registry and layout engine. With the
/// `parallel` feature the documents are spread over the rayon pool.
pub fn render_batch(documents: &[DocumentSpec]) -> Vec<Result<Vec<DecoratedPage>, PipelineError>> {
    log::debug!("Rendering a batch of {} documents", documents.len());

    #[cfg(feature = "parallel")]
    {
        documents.par_iter().map(render_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        documents.iter().map(render_one).collect()
    }
}

fn render_one(document: &DocumentSpec) -> Result<Vec<DecoratedPage>, PipelineError> {
    PipelineBuilder::new()
        .with_document(document.clone())
        .build()?
        .render()
}
