use quire_style::StyleError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Content of height {height:.2} exceeds the page content height of {available:.2}.")]
    ContentTooLarge { height: f32, available: f32 },
    #[error(transparent)]
    Style(#[from] StyleError),
    #[error("Invalid block: {0}")]
    InvalidBlock(String),
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
    #[error("Page limit exceeded ({0})")]
    PageLimitExceeded(usize),
}

pub(crate) mod engine;
pub use self::engine::{LayoutEngine, Paginator, paginate};

mod elements;
pub mod algorithms;
pub mod config;
pub mod interface;
pub mod nodes;
pub mod page;
pub mod text;
pub mod validate;

pub use self::config::LayoutConfig;
pub use self::elements::{LayoutElement, PositionedElement, RectElement, TextElement};
pub use self::interface::{Fit, Fragment, LayoutEnvironment, LayoutNode, NodeState, TableState};
pub use self::nodes::{Block, Card, Paragraph, Spacer, Table, TableStyle};
pub use self::page::{Page, PageGeometry, Placement};
pub use self::validate::validate;

// Re-export geometry types used by nodes from base to prevent type mismatches
pub use quire_types::{Rect, Size};

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod text_test;
