pub mod error;
pub mod font;
pub mod registry;
pub mod stylesheet;
pub mod text;

pub use error::StyleError;
pub use font::FontMetrics;
pub use registry::StyleRegistry;
pub use stylesheet::{Style, StyleDefinition, StyleOverride};
pub use text::{TextAlign, VerticalAlign};

#[cfg(test)]
mod registry_test;
