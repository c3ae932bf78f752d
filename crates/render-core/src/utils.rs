use crate::command::DecoratedPage;
use std::collections::BTreeSet;

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Every font name referenced by text commands, in sorted order.
pub fn fonts_used(pages: &[DecoratedPage]) -> BTreeSet<String> {
    pages
        .iter()
        .flat_map(|p| p.commands.iter())
        .filter_map(|c| c.font())
        .map(str::to_string)
        .collect()
}
