use serde::{Deserialize, Serialize};

/// Horizontal alignment of wrapped lines within their box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

/// Vertical placement of cell content inside a table row taller than the content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}
