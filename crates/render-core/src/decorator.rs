use crate::command::{DecoratedPage, DrawCommand};
use crate::template::{Band, PageTemplate, Rule, SlotAlign, TextTemplate};
use crate::RenderError;
use quire_layout::{Page, PageGeometry};
use quire_style::{Style, StyleRegistry};
use quire_types::{Color, Point, Rect};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Top,
    Bottom,
}

#[derive(Debug, Clone)]
struct ResolvedSlot {
    text: TextTemplate,
    style: Arc<Style>,
    align: SlotAlign,
}

#[derive(Debug, Clone)]
struct ResolvedBand {
    edge: Edge,
    offset: f32,
    slots: Vec<ResolvedSlot>,
    rule: Option<Rule>,
}

impl ResolvedBand {
    fn resolve(band: &Band, edge: Edge, styles: &StyleRegistry) -> Result<Self, RenderError> {
        let mut slots = Vec::new();
        for (slot, align) in band.slots() {
            if let Some(slot) = slot {
                slots.push(ResolvedSlot {
                    text: slot.text.clone(),
                    style: styles.resolve(&slot.style)?,
                    align,
                });
            }
        }
        Ok(Self {
            edge,
            offset: band.offset,
            slots,
            rule: band.rule,
        })
    }
}

/// Paints the static template and the page-number tokens around a page's
/// content.
///
/// Decoration is a pure function of the page, its ordinal and the total
/// count: running it twice gives identical output.
#[derive(Debug, Clone)]
pub struct PageDecorator {
    width: f32,
    height: f32,
    content: Rect,
    background: Option<Color>,
    header: Option<ResolvedBand>,
    footer: Option<ResolvedBand>,
}

impl PageDecorator {
    /// Resolves every band style up front, so a missing style fails here
    /// rather than halfway through a document.
    pub fn new(
        template: &PageTemplate,
        geometry: &PageGeometry,
        styles: &StyleRegistry,
    ) -> Result<Self, RenderError> {
        let (width, height) = geometry.dimensions();
        let header = template
            .header
            .as_ref()
            .map(|b| ResolvedBand::resolve(b, Edge::Top, styles))
            .transpose()?;
        let footer = template
            .footer
            .as_ref()
            .map(|b| ResolvedBand::resolve(b, Edge::Bottom, styles))
            .transpose()?;
        log::debug!(
            "Page decorator ready: background={}, header={}, footer={}",
            template.background.is_some(),
            header.is_some(),
            footer.is_some()
        );

        Ok(Self {
            width,
            height,
            content: geometry.content_rect(),
            background: template.background,
            header,
            footer,
        })
    }

    /// Background, then header and footer, then the page content.
    pub fn decorate(&self, page: &Page, ordinal: usize, total_pages: usize) -> DecoratedPage {
        let mut commands = Vec::with_capacity(page.elements.len() + 8);

        if let Some(color) = self.background {
            commands.push(DrawCommand::FillRect {
                rect: Rect::new(0.0, 0.0, self.width, self.height),
                color,
            });
        }
        for band in [&self.header, &self.footer].into_iter().flatten() {
            self.paint_band(band, ordinal, total_pages, &mut commands);
        }
        for element in &page.elements {
            DrawCommand::extend_from_element(element, &mut commands);
        }

        DecoratedPage {
            number: ordinal,
            total_pages,
            width: self.width,
            height: self.height,
            commands,
        }
    }

    fn edge_y(&self, edge: Edge, offset: f32) -> f32 {
        match edge {
            Edge::Top => offset,
            Edge::Bottom => self.height - offset,
        }
    }

    fn paint_band(
        &self,
        band: &ResolvedBand,
        ordinal: usize,
        total_pages: usize,
        out: &mut Vec<DrawCommand>,
    ) {
        if let Some(rule) = band.rule {
            let y = self.edge_y(band.edge, rule.offset);
            out.push(DrawCommand::Line {
                from: Point::new(self.content.x, y),
                to: Point::new(self.content.right(), y),
                border: rule.stroke,
            });
        }

        let baseline = self.edge_y(band.edge, band.offset);
        for slot in &band.slots {
            let text = slot.text.render(ordinal, total_pages);
            let width = slot.style.text_width(&text);
            let x = match slot.align {
                SlotAlign::Left => self.content.x,
                SlotAlign::Center => self.content.x + (self.content.width - width) / 2.0,
                SlotAlign::Right => self.content.right() - width,
            };
            out.push(DrawCommand::Text {
                x,
                y: baseline,
                text,
                font: slot.style.font_family.clone(),
                size: slot.style.font_size,
                color: slot.style.color,
                word_spacing: 0.0,
            });
        }
    }
}
