use crate::command::DecoratedPage;
use crate::error::RenderError;
use std::io::Write;

/// Serializes a finished, decorated page sequence.
pub trait DocumentWriter {
    /// File extension conventionally used for this output, without the dot.
    fn extension(&self) -> &'static str;

    fn write_document(
        &self,
        pages: &[DecoratedPage],
        out: &mut dyn Write,
    ) -> Result<(), RenderError>;
}
