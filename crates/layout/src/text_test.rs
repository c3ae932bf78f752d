use crate::test_utils::create_test_engine;
use crate::text::break_lines;
use crate::{Block, LayoutElement, LayoutNode, Paragraph};
use quire_style::{FontMetrics, Style, StyleRegistry, TextAlign};
use std::sync::Arc;

fn helvetica() -> &'static FontMetrics {
    FontMetrics::lookup("Helvetica").unwrap()
}

#[test]
fn test_greedy_wrap() {
    // "aaa" = 3 * 5.56 = 16.68pt at 10pt; space = 2.78pt.
    let lines = break_lines("aaa aaa aaa", helvetica(), 10.0, 40.0);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "aaa aaa");
    assert_eq!(lines[0].spaces, 1);
    assert!(!lines[0].ends_paragraph);
    assert_eq!(lines[1].text, "aaa");
    assert!(lines[1].ends_paragraph);
}

#[test]
fn test_explicit_newlines_and_blank_lines() {
    let lines = break_lines("one\n\ntwo", helvetica(), 10.0, 500.0);
    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "", "two"]);
    assert!(lines.iter().all(|l| l.ends_paragraph));
}

#[test]
fn test_trailing_newline_adds_no_line() {
    let lines = break_lines("Hello\n", helvetica(), 10.0, 500.0);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "Hello");
    assert!(lines[0].ends_paragraph);

    let texts: Vec<String> = break_lines("Hello\n\n", helvetica(), 10.0, 500.0)
        .into_iter()
        .map(|l| l.text)
        .collect();
    assert_eq!(texts, vec!["Hello", ""]);

    let engine = create_test_engine();
    let height = engine
        .measure(&Block::paragraph("Hello\n", "Body"), 500.0)
        .unwrap()
        .height;
    assert_eq!(height, 12.0);
}

#[test]
fn test_empty_and_whitespace_text_has_no_lines() {
    assert!(break_lines("", helvetica(), 10.0, 100.0).is_empty());
    assert!(break_lines("  \n\t ", helvetica(), 10.0, 100.0).is_empty());
}

#[test]
fn test_overlong_word_breaks_between_characters() {
    let courier = FontMetrics::lookup("Courier").unwrap();
    // 6pt per char at 10pt; 20pt fits 3 chars.
    let lines = break_lines("abcdefgh", courier, 10.0, 20.0);
    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["abc", "def", "gh"]);
}

#[test]
fn test_zero_width_still_progresses() {
    let lines = break_lines("ab", helvetica(), 10.0, 0.0);
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_measure_is_idempotent_and_width_dependent() {
    let engine = create_test_engine();
    let env = engine.environment();
    let p = Paragraph::new("The quick brown fox jumps over the lazy dog", "Body");

    let wide = p.measure(&env, 1000.0).unwrap();
    assert_eq!(wide.height, 12.0);
    assert_eq!(p.measure(&env, 1000.0).unwrap(), wide);

    let narrow = p.measure(&env, 60.0).unwrap();
    assert!(narrow.height > wide.height);
    assert_eq!(narrow.height % 12.0, 0.0);
}

#[test]
fn test_empty_paragraph_measures_zero() {
    let engine = create_test_engine();
    let size = engine
        .measure(&Block::paragraph("   ", "Body"), 200.0)
        .unwrap();
    assert_eq!(size.height, 0.0);
}

#[test]
fn test_alignment_offsets() {
    let mut styles = StyleRegistry::new();
    for (name, alignment) in [
        ("L", TextAlign::Left),
        ("R", TextAlign::Right),
        ("C", TextAlign::Center),
        ("J", TextAlign::Justify),
    ] {
        styles
            .register(
                name,
                Style {
                    font_family: "Courier".into(),
                    alignment,
                    ..Style::default()
                },
            )
            .unwrap();
    }
    let engine = crate::LayoutEngine::new(Arc::new(styles), Default::default());
    let env = engine.environment();
    let frame = crate::Rect::new(0.0, 0.0, 100.0, 100.0);

    let first_text = |style: &str, text: &str| {
        let mut out = Vec::new();
        Paragraph::new(text, style)
            .paint(&env, frame, None, &mut out)
            .unwrap();
        out.into_iter()
            .find_map(|e| match e.element {
                LayoutElement::Text(ref t) => Some((e.x, t.word_spacing)),
                _ => None,
            })
            .unwrap()
    };

    // "ab" is 12pt wide in 10pt Courier.
    assert_eq!(first_text("L", "ab").0, 0.0);
    assert!((first_text("R", "ab").0 - 88.0).abs() < 1e-4);
    assert!((first_text("C", "ab").0 - 44.0).abs() < 1e-4);

    // Justified: "aaaa bbbb cccc" (84pt) fills the first line, 16pt slack over two gaps.
    let (x, spacing) = first_text("J", "aaaa bbbb cccc dddd eeee ffff");
    assert_eq!(x, 0.0);
    assert!((spacing - 8.0).abs() < 1e-4);
    // Last line is never stretched.
    assert_eq!(first_text("J", "ab").1, 0.0);
}
