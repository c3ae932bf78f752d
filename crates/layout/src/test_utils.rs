use crate::{Block, LayoutConfig, LayoutEngine, LayoutError, Page, PageGeometry};
use quire_style::{Style, StyleRegistry};
use quire_types::{Margins, PageSize};
use std::sync::Arc;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A registry with a 10pt Helvetica "Body" (leading 12) and a Courier "Mono".
pub fn test_styles() -> Arc<StyleRegistry> {
    let mut styles = StyleRegistry::new();
    styles
        .register("Body", Style::default())
        .expect("default style is valid");
    styles
        .register(
            "Mono",
            Style {
                font_family: "Courier".into(),
                ..Style::default()
            },
        )
        .expect("courier style is valid");
    Arc::new(styles)
}

/// Geometry whose content area is exactly `width` x `height` points.
pub fn content_geometry(width: f32, height: f32) -> PageGeometry {
    PageGeometry::new(PageSize::Custom { width, height }, Margins::default())
}

pub fn create_test_engine() -> LayoutEngine {
    init_logger();
    LayoutEngine::new(test_styles(), LayoutConfig::default())
}

pub fn paginate_test_blocks(
    blocks: &[Block],
    width: f32,
    height: f32,
) -> Result<Vec<Page>, LayoutError> {
    create_test_engine().paginate_all(blocks, &content_geometry(width, height))
}

/// A table of `rows` single-cell rows, each exactly `row_height` tall.
pub fn fixed_row_table(rows: usize, row_height: f32) -> Block {
    Block::table(
        (0..rows)
            .map(|_| vec![Block::spacer(row_height)])
            .collect(),
    )
}

/// Sums placement heights per block index across pages.
pub fn placed_height_by_block(pages: &[Page], block_count: usize) -> Vec<f32> {
    let mut heights = vec![0.0; block_count];
    for page in pages {
        for placement in &page.placements {
            heights[placement.block_index] += placement.height;
        }
    }
    heights
}
