//! Fail-fast structural checks run before pagination.

use crate::nodes::{Block, Card, Table};
use crate::LayoutError;
use quire_style::StyleRegistry;

/// Checks a top-level block sequence.
///
/// Every paragraph style must resolve, sizes must be finite and
/// non-negative, table rows may not exceed the declared columns, and page
/// breaks are only allowed at the top level.
pub fn validate(blocks: &[Block], styles: &StyleRegistry) -> Result<(), LayoutError> {
    for (index, block) in blocks.iter().enumerate() {
        if block.is_page_break() {
            continue;
        }
        validate_block(block, styles)
            .map_err(|e| with_context(e, &format!("block {} ({})", index, block.kind())))?;
    }
    Ok(())
}

fn with_context(err: LayoutError, context: &str) -> LayoutError {
    match err {
        LayoutError::InvalidBlock(msg) => LayoutError::InvalidBlock(format!("{}: {}", context, msg)),
        other => other,
    }
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

fn validate_block(block: &Block, styles: &StyleRegistry) -> Result<(), LayoutError> {
    match block {
        Block::Paragraph(p) => {
            styles.resolve(&p.style)?;
            Ok(())
        }
        Block::Spacer(s) => {
            if non_negative(s.height) {
                Ok(())
            } else {
                Err(LayoutError::InvalidBlock(format!(
                    "spacer height must be non-negative, got {}",
                    s.height
                )))
            }
        }
        Block::Table(t) => validate_table(t, styles),
        Block::Card(c) => validate_card(c, styles),
        Block::PageBreak => Err(LayoutError::InvalidBlock(
            "page breaks are only allowed at the top level".into(),
        )),
    }
}

fn validate_card(card: &Card, styles: &StyleRegistry) -> Result<(), LayoutError> {
    if !card.padding.is_valid() {
        return Err(LayoutError::InvalidBlock(
            "card padding must be finite and non-negative".into(),
        ));
    }
    if let Some(border) = card.border.filter(|b| !non_negative(b.width)) {
        return Err(LayoutError::InvalidBlock(format!(
            "card border width must be non-negative, got {}",
            border.width
        )));
    }
    validate_block(&card.child, styles)
}

fn validate_table(table: &Table, styles: &StyleRegistry) -> Result<(), LayoutError> {
    if let Some(width) = table
        .column_widths
        .iter()
        .find(|w| !(w.is_finite() && **w > 0.0))
    {
        return Err(LayoutError::InvalidBlock(format!(
            "column widths must be positive, got {}",
            width
        )));
    }
    if !table.cell_style.padding.is_valid() {
        return Err(LayoutError::InvalidBlock(
            "cell padding must be finite and non-negative".into(),
        ));
    }
    if let Some(grid) = table.cell_style.grid.filter(|b| !non_negative(b.width)) {
        return Err(LayoutError::InvalidBlock(format!(
            "grid width must be non-negative, got {}",
            grid.width
        )));
    }

    let columns = table.column_count();
    for (row_index, row) in table.rows.iter().enumerate() {
        if row.len() > columns {
            return Err(LayoutError::InvalidBlock(format!(
                "row {} has {} cells but the table declares {} columns",
                row_index,
                row.len(),
                columns
            )));
        }
        for cell in row {
            validate_block(cell, styles)?;
        }
    }
    Ok(())
}
