//! The block model: everything the flow engine can place on a page.

pub mod card;
pub mod paragraph;
pub mod spacer;
pub mod table;

pub use card::Card;
pub use paragraph::Paragraph;
pub use spacer::Spacer;
pub use table::{Table, TableStyle};

use crate::interface::{Fit, Fragment, LayoutEnvironment, LayoutNode, NodeState};
use crate::{LayoutError, PositionedElement};
use quire_types::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A node of the document tree. Block trees are never mutated by layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Paragraph(Paragraph),
    Spacer(Spacer),
    Table(Table),
    Card(Card),
    /// Closes the current page. Only valid at the top level of a document.
    PageBreak,
}

impl Block {
    pub fn paragraph(text: impl Into<String>, style: impl Into<String>) -> Self {
        Block::Paragraph(Paragraph::new(text, style))
    }

    pub fn spacer(height: f32) -> Self {
        Block::Spacer(Spacer { height })
    }

    pub fn table(rows: Vec<Vec<Block>>) -> Self {
        Block::Table(Table::new(rows))
    }

    pub fn card(child: Block) -> Self {
        Block::Card(Card::new(child))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "Paragraph",
            Block::Spacer(_) => "Spacer",
            Block::Table(_) => "Table",
            Block::Card(_) => "Card",
            Block::PageBreak => "PageBreak",
        }
    }

    pub fn is_page_break(&self) -> bool {
        matches!(self, Block::PageBreak)
    }

    fn node(&self) -> Option<&dyn LayoutNode> {
        match self {
            Block::Paragraph(n) => Some(n),
            Block::Spacer(n) => Some(n),
            Block::Table(n) => Some(n),
            Block::Card(n) => Some(n),
            Block::PageBreak => None,
        }
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

impl From<Card> for Block {
    fn from(card: Card) -> Self {
        Block::Card(card)
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

// PageBreak is handled by the engine; as a node it is an empty box.
impl LayoutNode for Block {
    fn measure(&self, env: &LayoutEnvironment, width: f32) -> Result<Size, LayoutError> {
        match self.node() {
            Some(node) => node.measure(env, width),
            None => Ok(Size::zero()),
        }
    }

    fn plan(
        &self,
        env: &LayoutEnvironment,
        width: f32,
        state: Option<&NodeState>,
        available: f32,
    ) -> Result<Fit, LayoutError> {
        match self.node() {
            Some(node) => node.plan(env, width, state, available),
            None => Ok(Fit::Placed(Fragment::whole(0.0))),
        }
    }

    fn paint(
        &self,
        env: &LayoutEnvironment,
        frame: Rect,
        rows: Option<Range<usize>>,
        out: &mut Vec<PositionedElement>,
    ) -> Result<(), LayoutError> {
        match self.node() {
            Some(node) => node.paint(env, frame, rows, out),
            None => Ok(()),
        }
    }

    fn is_splittable(&self) -> bool {
        self.node().is_some_and(|n| n.is_splittable())
    }

    fn space_before(&self, env: &LayoutEnvironment) -> Result<f32, LayoutError> {
        match self.node() {
            Some(node) => node.space_before(env),
            None => Ok(0.0),
        }
    }

    fn space_after(&self, env: &LayoutEnvironment) -> Result<f32, LayoutError> {
        match self.node() {
            Some(node) => node.space_after(env),
            None => Ok(0.0),
        }
    }
}
