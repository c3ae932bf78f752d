use crate::elements::{LayoutElement, PositionedElement, TextElement};
use crate::interface::{LayoutEnvironment, LayoutNode};
use crate::text::{LineLayout, break_lines};
use crate::LayoutError;
use quire_style::{Style, TextAlign};
use quire_types::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::sync::Arc;

/// Ascender height as a fraction of the font size, used to position the
/// baseline within a line box.
const ASCENT_RATIO: f32 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    /// Name of a registered style.
    pub style: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
        }
    }

    fn resolve_style(&self, env: &LayoutEnvironment) -> Result<Arc<Style>, LayoutError> {
        Ok(env.styles.resolve(&self.style)?)
    }

    fn cache_key(&self, width: f32) -> u64 {
        let mut s = DefaultHasher::new();
        1u8.hash(&mut s); // Domain 1: wrapped lines
        self.text.hash(&mut s);
        self.style.hash(&mut s);
        ((width * 100.0).round() as i32).hash(&mut s);
        s.finish()
    }

    /// Wrapped lines at `width`, cached per text/style/width.
    pub fn lines(
        &self,
        env: &LayoutEnvironment,
        width: f32,
    ) -> Result<Arc<Vec<LineLayout>>, LayoutError> {
        let style = self.resolve_style(env)?;
        env.cached(self.cache_key(width), || {
            Ok(Arc::new(break_lines(
                &self.text,
                style.metrics(),
                style.font_size,
                width,
            )))
        })
    }
}

impl LayoutNode for Paragraph {
    fn measure(&self, env: &LayoutEnvironment, width: f32) -> Result<Size, LayoutError> {
        let style = self.resolve_style(env)?;
        let lines = self.lines(env, width)?;
        Ok(Size::new(width, lines.len() as f32 * style.leading))
    }

    fn paint(
        &self,
        env: &LayoutEnvironment,
        frame: Rect,
        _rows: Option<Range<usize>>,
        out: &mut Vec<PositionedElement>,
    ) -> Result<(), LayoutError> {
        let style = self.resolve_style(env)?;
        let lines = self.lines(env, frame.width)?;
        let half_leading = (style.leading - style.font_size) / 2.0;

        for (i, line) in lines.iter().enumerate() {
            if line.text.is_empty() {
                continue;
            }
            let top = frame.y + i as f32 * style.leading;
            let slack = (frame.width - line.width).max(0.0);

            let (dx, width, word_spacing) = match style.alignment {
                TextAlign::Left => (0.0, line.width, 0.0),
                TextAlign::Right => (slack, line.width, 0.0),
                TextAlign::Center => (slack / 2.0, line.width, 0.0),
                TextAlign::Justify if !line.ends_paragraph && line.spaces > 0 => {
                    (0.0, frame.width, slack / line.spaces as f32)
                }
                TextAlign::Justify => (0.0, line.width, 0.0),
            };

            out.push(PositionedElement::new(
                Rect::new(frame.x + dx, top, width, style.leading),
                LayoutElement::Text(TextElement {
                    content: line.text.clone(),
                    font: style.font_family.clone(),
                    size: style.font_size,
                    color: style.color,
                    baseline: top + half_leading + ASCENT_RATIO * style.font_size,
                    word_spacing,
                }),
            ));
        }
        Ok(())
    }

    fn space_before(&self, env: &LayoutEnvironment) -> Result<f32, LayoutError> {
        Ok(self.resolve_style(env)?.space_before)
    }

    fn space_after(&self, env: &LayoutEnvironment) -> Result<f32, LayoutError> {
        Ok(self.resolve_style(env)?.space_after)
    }
}
