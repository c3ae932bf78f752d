//! Page decoration and output abstractions.
//!
//! This crate turns laid-out pages into final, writer-ready pages:
//! - `PageDecorator` paints the background, header and footer bands and
//!   resolves page-number tokens once the total page count is known
//! - `DrawCommand` / `DecoratedPage` are the writer-facing page model
//! - `DocumentWriter` abstracts the output format; `JsonWriter` is built in

mod command;
mod decorator;
mod error;
mod json;
mod template;
mod traits;
pub mod utils;

pub use command::{DecoratedPage, DrawCommand};
pub use decorator::PageDecorator;
pub use error::RenderError;
pub use json::JsonWriter;
pub use template::{Band, BandText, PageNumberToken, PageTemplate, Rule, TextTemplate};
pub use traits::DocumentWriter;
