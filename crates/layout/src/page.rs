use crate::elements::PositionedElement;
use crate::LayoutError;
use quire_types::{Margins, PageSize, Rect};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Page size and margins. Every page of a document shares them, so the
/// content area is the same on every page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGeometry {
    #[serde(default)]
    pub page_size: PageSize,
    #[serde(default = "default_margins")]
    pub margins: Margins,
}

fn default_margins() -> Margins {
    Margins::all(36.0)
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margins: default_margins(),
        }
    }
}

impl PageGeometry {
    pub fn new(page_size: PageSize, margins: Margins) -> Self {
        Self { page_size, margins }
    }

    /// Page width and height in points.
    pub fn dimensions(&self) -> (f32, f32) {
        self.page_size.dimensions_pt()
    }

    /// The content rectangle in page coordinates (top-left origin).
    pub fn content_rect(&self) -> Rect {
        let (w, h) = self.dimensions();
        let m = &self.margins;
        Rect::new(m.left, m.top, w - m.horizontal(), h - m.vertical())
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let (w, h) = self.dimensions();
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(LayoutError::InvalidGeometry(format!(
                "page size must be positive, got {}x{}",
                w, h
            )));
        }
        if !self.margins.is_valid() {
            return Err(LayoutError::InvalidGeometry(
                "margins must be finite and non-negative".into(),
            ));
        }
        let content = self.content_rect();
        if content.width <= 0.0 || content.height <= 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "margins leave no content area ({:.2}x{:.2})",
                content.width, content.height
            )));
        }
        Ok(())
    }
}

/// Where (a fragment of) a top-level block landed on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Index into the document's top-level block list.
    pub block_index: usize,
    /// Offset from the top of the content area.
    pub y: f32,
    pub height: f32,
    /// Table rows carried by this fragment, for split blocks.
    pub rows: Option<Range<usize>>,
}

/// A laid-out page, before decoration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub content_area: Rect,
    pub placements: Vec<Placement>,
    /// Content elements in absolute page coordinates.
    pub elements: Vec<PositionedElement>,
}

impl Page {
    pub fn new(number: usize, content_area: Rect) -> Self {
        Self {
            number,
            content_area,
            placements: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Bottom edge of the lowest placement, relative to the content area.
    pub fn used_height(&self) -> f32 {
        self.placements
            .iter()
            .map(|p| p.y + p.height)
            .fold(0.0, f32::max)
    }
}
