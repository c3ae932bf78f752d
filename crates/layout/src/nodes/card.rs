use crate::elements::{LayoutElement, PositionedElement, RectElement};
use crate::algorithms::pagination::fits;
use crate::interface::{Fit, Fragment, LayoutEnvironment, LayoutNode, NodeState, plan_whole};
use crate::nodes::Block;
use crate::LayoutError;
use quire_types::{Border, Color, EdgeInsets, Rect, Size};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A padded, optionally filled and bordered box around a single child.
///
/// A card splits exactly when its child does; every fragment carries the full
/// padding, background and border.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub child: Box<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(default)]
    pub padding: EdgeInsets,
}

impl Card {
    pub fn new(child: Block) -> Self {
        Self {
            child: Box::new(child),
            background: None,
            border: None,
            padding: EdgeInsets::default(),
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    fn inner_width(&self, width: f32) -> f32 {
        (width - self.padding.horizontal()).max(0.0)
    }
}

impl LayoutNode for Card {
    fn measure(&self, env: &LayoutEnvironment, width: f32) -> Result<Size, LayoutError> {
        let inner = self.child.measure(env, self.inner_width(width))?;
        Ok(Size::new(width, inner.height + self.padding.vertical()))
    }

    fn plan(
        &self,
        env: &LayoutEnvironment,
        width: f32,
        state: Option<&NodeState>,
        available: f32,
    ) -> Result<Fit, LayoutError> {
        if !self.child.is_splittable() {
            return plan_whole(self, env, width, available);
        }

        let padding_y = self.padding.vertical();
        let fit = self.child.plan(
            env,
            self.inner_width(width),
            state,
            available - padding_y,
        )?;
        Ok(match fit {
            // The padding must fit too, even when the child placed nothing.
            Fit::Placed(inner) if !fits(inner.height + padding_y, available) => Fit::Deferred {
                required: inner.height + padding_y,
            },
            Fit::Placed(inner) => Fit::Placed(Fragment {
                height: inner.height + padding_y,
                rows: inner.rows,
                next: inner.next,
            }),
            Fit::Deferred { required } => Fit::Deferred {
                required: required + padding_y,
            },
        })
    }

    fn paint(
        &self,
        env: &LayoutEnvironment,
        frame: Rect,
        rows: Option<Range<usize>>,
        out: &mut Vec<PositionedElement>,
    ) -> Result<(), LayoutError> {
        if self.background.is_some() || self.border.is_some() {
            out.push(PositionedElement::new(
                frame,
                LayoutElement::Rectangle(RectElement {
                    fill: self.background,
                    stroke: self.border,
                }),
            ));
        }

        let content = Rect::new(
            frame.x + self.padding.left,
            frame.y + self.padding.top,
            self.inner_width(frame.width),
            (frame.height - self.padding.vertical()).max(0.0),
        );
        self.child.paint(env, content, rows, out)
    }

    fn is_splittable(&self) -> bool {
        self.child.is_splittable()
    }
}
