use quire_types::{Border, Color, Rect};
use serde::Serialize;

/// A single drawable item at an absolute, top-left-origin page position.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn new(rect: Rect, element: LayoutElement) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            element,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LayoutElement {
    Text(TextElement),
    Rectangle(RectElement),
}

impl std::fmt::Display for LayoutElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutElement::Text(t) => write!(f, "Text(\"{}\")", t.content),
            LayoutElement::Rectangle(_) => write!(f, "Rectangle"),
        }
    }
}

/// One wrapped line of text. The element box is the line box; `baseline` is
/// the absolute y of the glyph baseline inside it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub content: String,
    pub font: String,
    pub size: f32,
    pub color: Color,
    pub baseline: f32,
    /// Extra advance added to every space, used for justified lines.
    pub word_spacing: f32,
}

/// A filled and/or stroked rectangle (card background, cell, border).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RectElement {
    pub fill: Option<Color>,
    pub stroke: Option<Border>,
}
