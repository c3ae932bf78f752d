//! PDF output for decorated pages using lopdf.
//!
//! Text is drawn with the standard Type1 fonts, so no font programs are
//! embedded and the files stay small.

mod content;
mod encoding;
mod writer;

pub use encoding::to_win_ansi;
pub use writer::PdfWriter;
