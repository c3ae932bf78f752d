//! Static page decorations: background, header and footer bands.

use quire_types::{Border, Color};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A page-number placeholder, resolved only at decoration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageNumberToken {
    Current,
    Total,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Token(PageNumberToken),
}

/// Header/footer text with embedded page-number tokens.
///
/// `%p` is the current page, `%t` the total page count and `%%` a literal
/// percent sign. Any other `%` sequence is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl TextTemplate {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            let token = match chars.peek() {
                Some('p') => Some(PageNumberToken::Current),
                Some('t') => Some(PageNumberToken::Total),
                Some('%') => {
                    chars.next();
                    literal.push('%');
                    continue;
                }
                _ => None,
            };
            match token {
                Some(token) => {
                    chars.next();
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Token(token));
                }
                None => literal.push('%'),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: source.to_string(),
            segments,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> impl Iterator<Item = PageNumberToken> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Token(t) => Some(*t),
            Segment::Literal(_) => None,
        })
    }

    /// Substitutes the tokens for page `current` of `total`.
    pub fn render(&self, current: usize, total: usize) -> String {
        let mut out = String::with_capacity(self.source.len() + 4);
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Token(PageNumberToken::Current) => out.push_str(&current.to_string()),
                Segment::Token(PageNumberToken::Total) => out.push_str(&total.to_string()),
            }
        }
        out
    }
}

impl From<&str> for TextTemplate {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for TextTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for TextTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for TextTemplate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Ok(Self::parse(&source))
    }
}

/// One text slot of a band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandText {
    pub text: TextTemplate,
    /// Name of a registered style.
    pub style: String,
}

impl BandText {
    pub fn new(text: &str, style: &str) -> Self {
        Self {
            text: TextTemplate::parse(text),
            style: style.to_string(),
        }
    }
}

/// A horizontal rule across the content width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Distance from the band's page edge.
    pub offset: f32,
    pub stroke: Border,
}

/// A header or footer.
///
/// Offsets are measured from the top page edge for headers and from the
/// bottom page edge for footers. Slots align to the content area's left
/// edge, centre and right edge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Band {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<BandText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<BandText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<BandText>,
    /// Baseline distance from the page edge.
    pub offset: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
}

impl Band {
    pub fn at(offset: f32) -> Self {
        Self {
            offset,
            ..Default::default()
        }
    }

    pub fn with_left(mut self, text: &str, style: &str) -> Self {
        self.left = Some(BandText::new(text, style));
        self
    }

    pub fn with_center(mut self, text: &str, style: &str) -> Self {
        self.center = Some(BandText::new(text, style));
        self
    }

    pub fn with_right(mut self, text: &str, style: &str) -> Self {
        self.right = Some(BandText::new(text, style));
        self
    }

    pub fn with_rule(mut self, offset: f32, stroke: Border) -> Self {
        self.rule = Some(Rule { offset, stroke });
        self
    }

    pub(crate) fn slots(&self) -> [(&Option<BandText>, SlotAlign); 3] {
        [
            (&self.left, SlotAlign::Left),
            (&self.center, SlotAlign::Center),
            (&self.right, SlotAlign::Right),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlotAlign {
    Left,
    Center,
    Right,
}

/// The per-page decorations shared by every page of a document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageTemplate {
    /// Full-page fill painted beneath everything else.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Band>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Band>,
}
