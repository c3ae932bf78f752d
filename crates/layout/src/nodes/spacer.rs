use crate::elements::PositionedElement;
use crate::interface::{LayoutEnvironment, LayoutNode};
use crate::LayoutError;
use quire_types::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Fixed vertical gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacer {
    pub height: f32,
}

impl LayoutNode for Spacer {
    fn measure(&self, _env: &LayoutEnvironment, _width: f32) -> Result<Size, LayoutError> {
        Ok(Size::new(0.0, self.height))
    }

    fn paint(
        &self,
        _env: &LayoutEnvironment,
        _frame: Rect,
        _rows: Option<Range<usize>>,
        _out: &mut Vec<PositionedElement>,
    ) -> Result<(), LayoutError> {
        Ok(())
    }
}
