//! Resolved text styles and the partial overrides used to derive them.

use super::error::StyleError;
use super::font::FontMetrics;
use super::text::TextAlign;
use quire_types::Color;
use serde::{Deserialize, Serialize};

const DEFAULT_LEADING_FACTOR: f32 = 1.2;

/// A fully resolved, immutable text style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub font_family: String,
    pub font_size: f32,
    pub color: Color,
    /// Baseline-to-baseline distance in points.
    pub leading: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub alignment: TextAlign,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            font_size: 10.0,
            color: Color::BLACK,
            leading: 10.0 * DEFAULT_LEADING_FACTOR,
            space_before: 0.0,
            space_after: 0.0,
            alignment: TextAlign::Left,
        }
    }
}

impl Style {
    /// Metrics for this style's face. Falls back to Helvetica for names the
    /// registry would have rejected.
    pub fn metrics(&self) -> &'static FontMetrics {
        FontMetrics::lookup(&self.font_family).unwrap_or_else(FontMetrics::default_face)
    }

    pub fn text_width(&self, text: &str) -> f32 {
        self.metrics().text_width(text, self.font_size)
    }

    /// Returns a copy of `self` with every field set in `overrides` replaced.
    ///
    /// A new `font_size` without an explicit `leading` recomputes leading as
    /// 1.2 × size.
    pub fn apply(&self, overrides: &StyleOverride) -> Style {
        let mut style = self.clone();
        if let Some(family) = &overrides.font_family {
            style.font_family = family.clone();
        }
        if let Some(size) = overrides.font_size {
            style.font_size = size;
            style.leading = size * DEFAULT_LEADING_FACTOR;
        }
        if let Some(leading) = overrides.leading {
            style.leading = leading;
        }
        if let Some(color) = overrides.color {
            style.color = color;
        }
        if let Some(before) = overrides.space_before {
            style.space_before = before;
        }
        if let Some(after) = overrides.space_after {
            style.space_after = after;
        }
        if let Some(alignment) = overrides.alignment {
            style.alignment = alignment;
        }
        style
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if !FontMetrics::is_known(&self.font_family) {
            return Err(StyleError::Config(format!(
                "unknown font family '{}'",
                self.font_family
            )));
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(StyleError::Config(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }
        if !(self.leading.is_finite() && self.leading > 0.0) {
            return Err(StyleError::Config(format!(
                "leading must be positive, got {}",
                self.leading
            )));
        }
        for (field, value) in [
            ("spaceBefore", self.space_before),
            ("spaceAfter", self.space_after),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(StyleError::Config(format!(
                    "{} must be non-negative, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

/// A partial style. Unset fields are taken from the parent.
#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_before: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_after: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<TextAlign>,
}

/// One entry of a style seed list, as it appears in a document descriptor.
#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StyleDefinition {
    pub name: String,
    /// Registered style to start from; the built-in default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(flatten)]
    pub properties: StyleOverride,
}
