use crate::algorithms::pagination::EPSILON;
use quire_style::FontMetrics;

/// One output line of a wrapped paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub text: String,
    pub width: f32,
    /// Number of inter-word gaps, used to distribute justification slack.
    pub spaces: usize,
    /// True for the last line before an explicit `\n` or the end of text.
    /// Such lines are never justified.
    pub ends_paragraph: bool,
}

struct LineBuilder<'a> {
    metrics: &'a FontMetrics,
    size: f32,
    max_width: f32,
    space_width: f32,
    text: String,
    width: f32,
    spaces: usize,
    lines: Vec<LineLayout>,
}

impl<'a> LineBuilder<'a> {
    fn new(metrics: &'a FontMetrics, size: f32, max_width: f32) -> Self {
        Self {
            metrics,
            size,
            max_width,
            space_width: metrics.space_width(size),
            text: String::new(),
            width: 0.0,
            spaces: 0,
            lines: Vec::new(),
        }
    }

    fn push_word(&mut self, word: &str) {
        let word_width = self.metrics.text_width(word, self.size);

        if !self.text.is_empty() {
            if self.width + self.space_width + word_width <= self.max_width + EPSILON {
                self.text.push(' ');
                self.text.push_str(word);
                self.width += self.space_width + word_width;
                self.spaces += 1;
                return;
            }
            self.finish_line(false);
        }

        if word_width <= self.max_width + EPSILON {
            self.text.push_str(word);
            self.width = word_width;
        } else {
            self.push_broken_word(word);
        }
    }

    /// Splits a word wider than the line between characters. Every line gets
    /// at least one character so narrow columns still make progress.
    fn push_broken_word(&mut self, word: &str) {
        for c in word.chars() {
            let w = self.metrics.char_width(c, self.size);
            if !self.text.is_empty() && self.width + w > self.max_width + EPSILON {
                self.finish_line(false);
            }
            self.text.push(c);
            self.width += w;
        }
    }

    fn finish_line(&mut self, ends_paragraph: bool) {
        self.lines.push(LineLayout {
            text: std::mem::take(&mut self.text),
            width: self.width,
            spaces: self.spaces,
            ends_paragraph,
        });
        self.width = 0.0;
        self.spaces = 0;
    }
}

/// Greedy word wrap of `text` at `max_width` points.
///
/// `\n` forces a break. Runs of other whitespace collapse to single spaces.
/// Text that is empty or whitespace-only produces no lines at all; a blank
/// line between two non-blank ones is kept as an empty line. A single
/// trailing `\n` ends the last line and does not open a new one.
pub fn break_lines(
    text: &str,
    metrics: &FontMetrics,
    size: f32,
    max_width: f32,
) -> Vec<LineLayout> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let text = text.strip_suffix('\n').unwrap_or(text);
    let mut builder = LineBuilder::new(metrics, size, max_width);
    for hard_line in text.split('\n') {
        for word in hard_line.split_whitespace() {
            builder.push_word(word);
        }
        builder.finish_line(true);
    }
    builder.lines
}
