use super::color::Color;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f32,
    #[serde(default)]
    pub style: BorderStyle,
    pub color: Color,
}

impl Border {
    pub fn solid(width: f32, color: Color) -> Self {
        Self {
            width,
            style: BorderStyle::Solid,
            color,
        }
    }

    /// Dash pattern (on, off) in points, or `None` for a continuous stroke.
    pub fn dash_pattern(&self) -> Option<(f32, f32)> {
        match self.style {
            BorderStyle::Solid => None,
            BorderStyle::Dashed => Some((3.0 * self.width, 2.0 * self.width)),
            BorderStyle::Dotted => Some((self.width, 2.0 * self.width)),
        }
    }
}
