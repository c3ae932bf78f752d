use crate::command::DecoratedPage;
use crate::error::RenderError;
use crate::traits::DocumentWriter;
use serde::Serialize;
use std::io::Write;

/// Writes the decorated pages as JSON, mainly for inspection and tests.
#[derive(Debug, Clone, Default)]
pub struct JsonWriter {
    pub pretty: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument<'a> {
    page_count: usize,
    pages: &'a [DecoratedPage],
}

impl JsonWriter {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl DocumentWriter for JsonWriter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn write_document(
        &self,
        pages: &[DecoratedPage],
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        let doc = JsonDocument {
            page_count: pages.len(),
            pages,
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, &doc)?;
        } else {
            serde_json::to_writer(&mut *out, &doc)?;
        }
        out.flush()?;
        Ok(())
    }
}
