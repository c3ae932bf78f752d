use quire_layout::{LayoutElement, PositionedElement};
use quire_types::{Border, Color, Point, Rect};
use serde::Serialize;

/// A drawing instruction at absolute, top-left-origin page coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        border: Border,
    },
    Line {
        from: Point,
        to: Point,
        border: Border,
    },
    #[serde(rename_all = "camelCase")]
    Text {
        x: f32,
        /// Baseline position.
        y: f32,
        text: String,
        font: String,
        size: f32,
        color: Color,
        word_spacing: f32,
    },
}

impl DrawCommand {
    /// Appends the commands equivalent to a laid-out element.
    pub fn extend_from_element(element: &PositionedElement, out: &mut Vec<DrawCommand>) {
        let rect = element.rect();
        match &element.element {
            LayoutElement::Rectangle(r) => {
                if let Some(color) = r.fill {
                    out.push(DrawCommand::FillRect { rect, color });
                }
                if let Some(border) = r.stroke {
                    out.push(DrawCommand::StrokeRect { rect, border });
                }
            }
            LayoutElement::Text(t) => out.push(DrawCommand::Text {
                x: rect.x,
                y: t.baseline,
                text: t.content.clone(),
                font: t.font.clone(),
                size: t.size,
                color: t.color,
                word_spacing: t.word_spacing,
            }),
        }
    }

    pub fn font(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { font, .. } => Some(font),
            _ => None,
        }
    }
}

/// A fully decorated page, ready for a writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedPage {
    /// 1-based ordinal in the final document.
    pub number: usize,
    pub total_pages: usize,
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl DecoratedPage {
    /// All text on the page in drawing order, one entry per text command.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
