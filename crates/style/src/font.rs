//! Advance-width tables for the standard PDF Type1 fonts.
//!
//! Widths are in 1/1000 em, taken from the Adobe AFM files. Only printable
//! ASCII (0x20..=0x7E) is tabulated; anything else measures as the font's
//! fallback width. No kerning, no ligatures.

/// Glyph advance widths for one font face.
#[derive(Debug)]
pub struct FontMetrics {
    name: &'static str,
    /// `widths[i]` is the advance of `char::from(i + 0x20)`.
    widths: &'static [u16; 95],
    fallback: u16,
}

#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

#[rustfmt::skip]
static TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    278, 278, 564, 564, 564, 444, 921,
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    333, 278, 333, 469, 500, 333,
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    480, 200, 480, 541,
];

#[rustfmt::skip]
static TIMES_BOLD_WIDTHS: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    333, 333, 570, 570, 570, 500, 930,
    722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944,
    722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
    333, 278, 333, 581, 500, 333,
    500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833,
    556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
    394, 220, 394, 520,
];

static COURIER_WIDTHS: [u16; 95] = [600; 95];

static HELVETICA: FontMetrics = FontMetrics {
    name: "Helvetica",
    widths: &HELVETICA_WIDTHS,
    fallback: 556,
};
static HELVETICA_BOLD: FontMetrics = FontMetrics {
    name: "Helvetica-Bold",
    widths: &HELVETICA_BOLD_WIDTHS,
    fallback: 611,
};
// Obliques share the upright advances.
static HELVETICA_OBLIQUE: FontMetrics = FontMetrics {
    name: "Helvetica-Oblique",
    widths: &HELVETICA_WIDTHS,
    fallback: 556,
};
static HELVETICA_BOLD_OBLIQUE: FontMetrics = FontMetrics {
    name: "Helvetica-BoldOblique",
    widths: &HELVETICA_BOLD_WIDTHS,
    fallback: 611,
};
static TIMES_ROMAN: FontMetrics = FontMetrics {
    name: "Times-Roman",
    widths: &TIMES_ROMAN_WIDTHS,
    fallback: 500,
};
static TIMES_BOLD: FontMetrics = FontMetrics {
    name: "Times-Bold",
    widths: &TIMES_BOLD_WIDTHS,
    fallback: 500,
};
static COURIER: FontMetrics = FontMetrics {
    name: "Courier",
    widths: &COURIER_WIDTHS,
    fallback: 600,
};
static COURIER_BOLD: FontMetrics = FontMetrics {
    name: "Courier-Bold",
    widths: &COURIER_WIDTHS,
    fallback: 600,
};

static KNOWN_FONTS: [&FontMetrics; 8] = [
    &HELVETICA,
    &HELVETICA_BOLD,
    &HELVETICA_OBLIQUE,
    &HELVETICA_BOLD_OBLIQUE,
    &TIMES_ROMAN,
    &TIMES_BOLD,
    &COURIER,
    &COURIER_BOLD,
];

impl FontMetrics {
    /// Finds the metrics for a standard font by its PostScript name.
    pub fn lookup(family: &str) -> Option<&'static FontMetrics> {
        KNOWN_FONTS.iter().copied().find(|m| m.name == family)
    }

    pub fn is_known(family: &str) -> bool {
        Self::lookup(family).is_some()
    }

    /// The default face used when nothing else is requested.
    pub fn default_face() -> &'static FontMetrics {
        &HELVETICA
    }

    pub fn known_families() -> impl Iterator<Item = &'static str> {
        KNOWN_FONTS.iter().map(|m| m.name)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Advance of a single character at `size` points.
    pub fn char_width(&self, c: char, size: f32) -> f32 {
        let units = match c as u32 {
            code @ 0x20..=0x7E => self.widths[(code - 0x20) as usize],
            // NBSP measures like a space.
            0xA0 => self.widths[0],
            _ => self.fallback,
        };
        units as f32 * size / 1000.0
    }

    /// Total advance of `text` at `size` points.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|c| self.char_width(c, size)).sum()
    }

    pub fn space_width(&self, size: f32) -> f32 {
        self.char_width(' ', size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_and_unknown() {
        assert!(FontMetrics::lookup("Helvetica-Bold").is_some());
        assert!(FontMetrics::lookup("Comic Sans").is_none());
        assert_eq!(FontMetrics::known_families().count(), 8);
    }

    #[test]
    fn helvetica_widths() {
        let m = FontMetrics::lookup("Helvetica").unwrap();
        // "Hello" = 722 + 556 + 222 + 222 + 556 = 2278 units
        assert!((m.text_width("Hello", 10.0) - 22.78).abs() < 1e-4);
        assert!((m.space_width(10.0) - 2.78).abs() < 1e-4);
    }

    #[test]
    fn courier_is_monospaced() {
        let m = FontMetrics::lookup("Courier").unwrap();
        assert_eq!(m.text_width("iiii", 10.0), m.text_width("WWWW", 10.0));
        assert!((m.text_width("abc", 10.0) - 18.0).abs() < 1e-4);
    }

    #[test]
    fn non_ascii_uses_fallback() {
        let m = FontMetrics::lookup("Times-Roman").unwrap();
        assert!((m.char_width('é', 10.0) - 5.0).abs() < 1e-4);
    }
}
