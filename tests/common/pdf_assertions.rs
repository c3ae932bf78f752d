use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};
use std::collections::BTreeSet;

/// Text drawn on a 1-based page, one entry per `Tj` operation, in order.
pub fn page_text(doc: &LopdfDocument, page_num: u32) -> Vec<String> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_num) else {
        return Vec::new();
    };
    let Ok(bytes) = doc.get_page_content(*page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&bytes) else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            // WinAnsi agrees with Latin-1 for everything the tests draw.
            Some(Object::String(bytes, _)) => Some(bytes.iter().map(|&b| b as char).collect()),
            _ => None,
        })
        .collect()
}

/// All text in the document, pages separated by newlines.
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    for page_num in 1..=doc.get_pages().len() as u32 {
        text.push_str(&page_text(doc, page_num).join(" "));
        text.push('\n');
    }
    text
}

/// BaseFont names of every font dictionary in the file.
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let fonts: BTreeSet<String> = doc
        .objects
        .values()
        .filter_map(|obj| obj.as_dict().ok())
        .filter(|dict| matches!(dict.get(b"Type").and_then(Object::as_name), Ok(b"Font")))
        .filter_map(|dict| dict.get(b"BaseFont").and_then(Object::as_name).ok())
        .map(|name| String::from_utf8_lossy(name).to_string())
        .collect();
    fonts.into_iter().collect()
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_object(*page_id).ok()?.as_dict().ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_float().ok()? - arr[0].as_float().ok()?;
    let height = arr[3].as_float().ok()? - arr[1].as_float().ok()?;
    Some((width, height))
}

/// A string entry of the document Info dictionary.
pub fn info_string(doc: &LopdfDocument, key: &[u8]) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    match doc.get_dictionary(info_id).ok()?.get(key).ok()? {
        Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).to_string()),
        _ => None,
    }
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}

/// Assert page dimensions within tolerance
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!(
            (w - $width).abs() < 1.0,
            "Page {} width expected ~{}, got {}",
            $page,
            $width,
            w
        );
        assert!(
            (h - $height).abs() < 1.0,
            "Page {} height expected ~{}, got {}",
            $page,
            $height,
            h
        );
    };
}
