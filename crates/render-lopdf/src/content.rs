use crate::encoding::to_win_ansi;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use quire_render_core::utils::flip_y;
use quire_render_core::{DecoratedPage, DrawCommand};
use quire_types::{Border, Color, Point, Rect};
use std::collections::HashMap;

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_name: String,
    font_size: f32,
    fill_color: Option<Color>,
    word_spacing: f32,
}

/// Translates one decorated page into a PDF content stream.
///
/// Commands use a top-left origin; every y is flipped against the page
/// height on the way out.
pub(crate) struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: PageRenderState,
    font_map: &'a HashMap<String, String>,
}

impl<'a> PageContext<'a> {
    pub(crate) fn new(page_height: f32, font_map: &'a HashMap<String, String>) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
            font_map,
        }
    }

    pub(crate) fn render(page: &DecoratedPage, font_map: &'a HashMap<String, String>) -> Content {
        let mut ctx = Self::new(page.height, font_map);
        for command in &page.commands {
            ctx.draw(command);
        }
        ctx.finish()
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    pub(crate) fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::FillRect { rect, color } => self.fill_rect(rect, color),
            DrawCommand::StrokeRect { rect, border } => self.stroke_rect(rect, border),
            DrawCommand::Line { from, to, border } => self.line(*from, *to, border),
            DrawCommand::Text {
                x,
                y,
                text,
                font,
                size,
                color,
                word_spacing,
            } => self.text(*x, *y, text, font, *size, color, *word_spacing),
        }
    }

    fn set_fill_color(&mut self, color: &Color) {
        if self.state.fill_color.as_ref() != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(*color);
        }
    }

    fn fill_rect(&mut self, rect: &Rect, color: &Color) {
        self.set_fill_color(color);
        let y = flip_y(rect.bottom(), self.page_height);
        self.push(
            "re",
            vec![rect.x.into(), y.into(), rect.width.into(), rect.height.into()],
        );
        self.push("f", vec![]);
    }

    fn begin_stroke(&mut self, border: &Border) {
        let [r, g, b] = border.color.to_unit_rgb();
        self.push("RG", vec![r.into(), g.into(), b.into()]);
        self.push("w", vec![border.width.into()]);
        if let Some((on, off)) = border.dash_pattern() {
            self.push(
                "d",
                vec![Object::Array(vec![on.into(), off.into()]), Object::Integer(0)],
            );
        }
    }

    fn end_stroke(&mut self, border: &Border) {
        self.push("S", vec![]);
        if border.dash_pattern().is_some() {
            self.push("d", vec![Object::Array(vec![]), Object::Integer(0)]);
        }
    }

    fn stroke_rect(&mut self, rect: &Rect, border: &Border) {
        if border.width <= 0.0 {
            return;
        }
        self.begin_stroke(border);
        let y = flip_y(rect.bottom(), self.page_height);
        self.push(
            "re",
            vec![rect.x.into(), y.into(), rect.width.into(), rect.height.into()],
        );
        self.end_stroke(border);
    }

    fn line(&mut self, from: Point, to: Point, border: &Border) {
        if border.width <= 0.0 {
            return;
        }
        self.begin_stroke(border);
        self.push("m", vec![from.x.into(), flip_y(from.y, self.page_height).into()]);
        self.push("l", vec![to.x.into(), flip_y(to.y, self.page_height).into()]);
        self.end_stroke(border);
    }

    #[allow(clippy::too_many_arguments)]
    fn text(
        &mut self,
        x: f32,
        baseline: f32,
        text: &str,
        font: &str,
        size: f32,
        color: &Color,
        word_spacing: f32,
    ) {
        if text.trim().is_empty() {
            return;
        }
        let Some(resource) = self.font_map.get(font) else {
            log::warn!("No font resource for '{}', skipping text", font);
            return;
        };
        let resource = resource.clone();

        self.push("BT", vec![]);
        if self.state.font_name != resource || self.state.font_size != size {
            self.push("Tf", vec![Object::Name(resource.as_bytes().to_vec()), size.into()]);
            self.state.font_name = resource;
            self.state.font_size = size;
        }
        self.set_fill_color(color);
        if self.state.word_spacing != word_spacing {
            self.push("Tw", vec![word_spacing.into()]);
            self.state.word_spacing = word_spacing;
        }
        let pdf_y = flip_y(baseline, self.page_height);
        self.push("Td", vec![x.into(), pdf_y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }
}
