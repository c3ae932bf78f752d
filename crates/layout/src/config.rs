use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Vertical gap inserted after every placed block, in points.
    ///
    /// Defaults to `0.0`.
    pub block_spacing: f32,
    /// Hard ceiling on the number of pages a single document may produce.
    /// Runaway layouts fail with `LayoutError::PageLimitExceeded` instead of
    /// exhausting memory.
    ///
    /// Defaults to `1000`.
    pub max_pages: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            block_spacing: 0.0,
            max_pages: 1000,
        }
    }
}
