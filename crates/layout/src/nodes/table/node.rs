use crate::algorithms::pagination::{EPSILON, fits, leading_fit};
use crate::elements::{LayoutElement, PositionedElement, RectElement};
use crate::interface::{Fit, Fragment, LayoutEnvironment, LayoutNode, NodeState, TableState};
use crate::nodes::Block;
use crate::LayoutError;
use quire_style::VerticalAlign;
use quire_types::{Border, Color, EdgeInsets, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ops::Range;

/// Cell presentation shared by every cell of a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableStyle {
    pub padding: EdgeInsets,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Fill for the first row only. Not repeated on continuation pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Border>,
    pub valign: VerticalAlign,
}

/// A grid of blocks. Rows are atomic; a table splits only between rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub rows: Vec<Vec<Block>>,
    /// Column widths in points. Empty means an equal split of the available
    /// width across the widest row.
    #[serde(default)]
    pub column_widths: Vec<f32>,
    #[serde(default)]
    pub cell_style: TableStyle,
}

#[derive(Clone, Debug)]
pub struct TableLayoutOutput {
    pub col_widths: Vec<f32>,
    pub row_heights: Vec<f32>,
}

impl TableLayoutOutput {
    pub fn total_width(&self) -> f32 {
        self.col_widths.iter().sum()
    }

    pub fn total_height(&self) -> f32 {
        self.row_heights.iter().sum()
    }
}

impl Table {
    pub fn new(rows: Vec<Vec<Block>>) -> Self {
        Self {
            rows,
            column_widths: Vec::new(),
            cell_style: TableStyle::default(),
        }
    }

    pub fn with_column_widths(mut self, widths: Vec<f32>) -> Self {
        self.column_widths = widths;
        self
    }

    pub fn with_cell_style(mut self, style: TableStyle) -> Self {
        self.cell_style = style;
        self
    }

    pub fn column_count(&self) -> usize {
        if self.column_widths.is_empty() {
            self.rows.iter().map(Vec::len).max().unwrap_or(0)
        } else {
            self.column_widths.len()
        }
    }

    /// Keyed by address: only valid while the table is borrowed by the
    /// running layout pass, which is why the engine resets its cache per call.
    fn get_cache_key(&self, width: f32) -> u64 {
        let mut s = DefaultHasher::new();
        (self as *const Table as usize).hash(&mut s);
        3u8.hash(&mut s); // Domain 3: Table Layout
        ((width * 100.0).round() as i32).hash(&mut s);
        s.finish()
    }

    fn resolve_widths(&self, width: f32) -> Vec<f32> {
        if !self.column_widths.is_empty() {
            return self.column_widths.clone();
        }
        let columns = self.column_count();
        if columns == 0 {
            return Vec::new();
        }
        vec![width / columns as f32; columns]
    }

    fn inner_width(&self, column_width: f32) -> f32 {
        (column_width - self.cell_style.padding.horizontal()).max(0.0)
    }

    fn compute_layout_output(
        &self,
        env: &LayoutEnvironment,
        width: f32,
    ) -> Result<TableLayoutOutput, LayoutError> {
        let col_widths = self.resolve_widths(width);
        let padding_y = self.cell_style.padding.vertical();

        let row_heights = self
            .rows
            .iter()
            .map(|row| {
                let mut content = 0.0f32;
                for (cell, col_width) in row.iter().zip(&col_widths) {
                    content = content.max(cell.measure(env, self.inner_width(*col_width))?.height);
                }
                Ok::<_, LayoutError>(content + padding_y)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TableLayoutOutput {
            col_widths,
            row_heights,
        })
    }

    pub fn layout_output(
        &self,
        env: &LayoutEnvironment,
        width: f32,
    ) -> Result<TableLayoutOutput, LayoutError> {
        env.cached(self.get_cache_key(width), || {
            self.compute_layout_output(env, width)
        })
    }

    fn cell_background(&self, row_index: usize) -> Option<Color> {
        match (row_index, self.cell_style.header_background) {
            (0, Some(header)) => Some(header),
            _ => self.cell_style.background,
        }
    }
}

impl LayoutNode for Table {
    fn measure(&self, env: &LayoutEnvironment, width: f32) -> Result<Size, LayoutError> {
        let output = self.layout_output(env, width)?;
        Ok(Size::new(output.total_width(), output.total_height()))
    }

    fn plan(
        &self,
        env: &LayoutEnvironment,
        width: f32,
        state: Option<&NodeState>,
        available: f32,
    ) -> Result<Fit, LayoutError> {
        let start = match state {
            Some(state) => state.as_table()?.row_index,
            None => 0,
        };
        let output = self.layout_output(env, width)?;

        if start == 0 && output.total_width() > width + EPSILON {
            log::warn!(
                "Table columns span {:.2}pt but only {:.2}pt are available; content will overflow",
                output.total_width(),
                width
            );
        }

        let remaining = output.row_heights.get(start..).unwrap_or(&[]);
        if remaining.is_empty() {
            if !fits(0.0, available) {
                return Ok(Fit::Deferred { required: 0.0 });
            }
            return Ok(Fit::Placed(Fragment {
                height: 0.0,
                rows: Some(start..start),
                next: None,
            }));
        }

        let count = leading_fit(remaining, available);
        if count == 0 {
            return Ok(Fit::Deferred {
                required: remaining[0],
            });
        }

        let end = start + count;
        let next = (end < output.row_heights.len())
            .then_some(NodeState::Table(TableState { row_index: end }));
        Ok(Fit::Placed(Fragment {
            height: remaining[..count].iter().sum(),
            rows: Some(start..end),
            next,
        }))
    }

    fn paint(
        &self,
        env: &LayoutEnvironment,
        frame: Rect,
        rows: Option<Range<usize>>,
        out: &mut Vec<PositionedElement>,
    ) -> Result<(), LayoutError> {
        let output = self.layout_output(env, frame.width)?;
        let rows = rows.unwrap_or(0..self.rows.len());
        let padding = self.cell_style.padding;

        let mut y = frame.y;
        for row_index in rows {
            let row_height = output.row_heights[row_index];
            let row = &self.rows[row_index];
            let mut x = frame.x;

            for (col_index, col_width) in output.col_widths.iter().enumerate() {
                let cell_rect = Rect::new(x, y, *col_width, row_height);

                if let Some(fill) = self.cell_background(row_index) {
                    out.push(PositionedElement::new(
                        cell_rect,
                        LayoutElement::Rectangle(RectElement {
                            fill: Some(fill),
                            stroke: None,
                        }),
                    ));
                }

                if let Some(cell) = row.get(col_index) {
                    let inner_width = self.inner_width(*col_width);
                    let content_height = cell.measure(env, inner_width)?.height;
                    let slack = (row_height - padding.vertical() - content_height).max(0.0);
                    let offset = match self.cell_style.valign {
                        VerticalAlign::Top => 0.0,
                        VerticalAlign::Middle => slack / 2.0,
                        VerticalAlign::Bottom => slack,
                    };
                    let content_frame = Rect::new(
                        x + padding.left,
                        y + padding.top + offset,
                        inner_width,
                        content_height,
                    );
                    cell.paint(env, content_frame, None, out)?;
                }

                if let Some(grid) = self.cell_style.grid {
                    out.push(PositionedElement::new(
                        cell_rect,
                        LayoutElement::Rectangle(RectElement {
                            fill: None,
                            stroke: Some(grid),
                        }),
                    ));
                }

                x += col_width;
            }
            y += row_height;
        }
        Ok(())
    }

    fn is_splittable(&self) -> bool {
        true
    }
}
