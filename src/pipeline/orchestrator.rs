use crate::document::DocumentSpec;
use crate::error::PipelineError;
use chrono::{DateTime, Utc};
use log::{debug, info};
use quire_layout::{LayoutEngine, Page};
use quire_render_core::{DecoratedPage, DocumentWriter, JsonWriter, PageDecorator};
use quire_render_lopdf::PdfWriter;
use quire_style::StyleRegistry;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// The pages of one layout run, before any decoration.
///
/// Decoration never changes the pages, so the same layout can be decorated
/// any number of times (a preview and the final render, say) with identical
/// results.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pages: Vec<Page>,
}

impl LaidOutDocument {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Second pass: decorates every page knowing the final total.
    pub fn decorate(&self, decorator: &PageDecorator) -> Vec<DecoratedPage> {
        let total = self.pages.len();
        self.pages
            .iter()
            .enumerate()
            .map(|(i, page)| decorator.decorate(page, i + 1, total))
            .collect()
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}

/// What `generate_to_file` wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub path: PathBuf,
    pub pages: usize,
    pub bytes: u64,
}

/// The main document generation pipeline.
///
/// Holds one document together with its own style registry; nothing is
/// shared between pipelines, so several can run on different threads.
#[derive(Debug)]
pub struct DocumentPipeline {
    document: DocumentSpec,
    styles: Arc<StyleRegistry>,
    decorator: PageDecorator,
    creation_date: Option<DateTime<Utc>>,
}

impl DocumentPipeline {
    pub(crate) fn new(
        document: DocumentSpec,
        styles: Arc<StyleRegistry>,
        decorator: PageDecorator,
        creation_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            document,
            styles,
            decorator,
            creation_date,
        }
    }

    pub fn document(&self) -> &DocumentSpec {
        &self.document
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    pub fn decorator(&self) -> &PageDecorator {
        &self.decorator
    }

    /// First pass: flows every block onto pages.
    pub fn layout(&self) -> Result<LaidOutDocument, PipelineError> {
        let start = Instant::now();
        let engine = LayoutEngine::new(Arc::clone(&self.styles), self.document.layout);
        let pages = engine.paginate_all(&self.document.blocks, &self.document.geometry)?;
        debug!(
            "Laid out {} blocks onto {} pages in {:.2?}",
            self.document.blocks.len(),
            pages.len(),
            start.elapsed()
        );
        Ok(LaidOutDocument::new(pages))
    }

    /// Both passes: the final, decorated page sequence.
    pub fn render(&self) -> Result<Vec<DecoratedPage>, PipelineError> {
        Ok(self.layout()?.decorate(&self.decorator))
    }

    /// Renders and hands the pages to `writer`. Returns the page count.
    pub fn render_with<W: DocumentWriter + ?Sized>(
        &self,
        writer: &W,
        out: &mut dyn Write,
    ) -> Result<usize, PipelineError> {
        let pages = self.render()?;
        writer.write_document(&pages, out)?;
        Ok(pages.len())
    }

    /// The PDF writer configured with this document's metadata.
    pub fn pdf_writer(&self) -> PdfWriter {
        PdfWriter {
            title: self.document.title.clone(),
            creation_date: self.creation_date,
        }
    }

    pub fn render_pdf(&self) -> Result<Vec<u8>, PipelineError> {
        let mut buf = Vec::new();
        self.render_with(&self.pdf_writer(), &mut buf)?;
        Ok(buf)
    }

    /// Writes the document to `path`. A `.json` extension selects the JSON
    /// writer; anything else gets a PDF.
    pub fn generate_to_file<P: AsRef<Path>>(&self, path: P) -> Result<RenderSummary, PipelineError> {
        let path = path.as_ref();
        let start = Instant::now();
        let file = File::create(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create output file '{}': {}", path.display(), e),
            ))
        })?;
        let mut out = BufWriter::new(file);

        let is_json = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let pages = if is_json {
            self.render_with(&JsonWriter::pretty(), &mut out)?
        } else {
            self.render_with(&self.pdf_writer(), &mut out)?
        };
        out.flush()?;
        drop(out);

        let bytes = fs::metadata(path)?.len();
        info!(
            "Wrote {} ({} pages, {} bytes) in {:.2?}",
            path.display(),
            pages,
            bytes,
            start.elapsed()
        );
        Ok(RenderSummary {
            path: path.to_path_buf(),
            pages,
            bytes,
        })
    }
}
