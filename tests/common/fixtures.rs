use serde_json::{Value, json};

/// "Body" is 10pt Helvetica with 12pt leading, "Small" 8pt and "Mono" Courier.
pub fn default_styles() -> Value {
    json!([
        {"name": "Body", "fontSize": 10, "leading": 12},
        {"name": "Small", "parent": "Body", "fontSize": 8},
        {"name": "Mono", "parent": "Body", "fontFamily": "Courier"}
    ])
}

/// A document whose content area is exactly `width` x `height` points.
pub fn document_with_content_area(width: f32, height: f32, blocks: Vec<Value>) -> Value {
    json!({
        "geometry": {
            "pageSize": {"width": width, "height": height},
            "margins": 0
        },
        "styles": default_styles(),
        "blocks": blocks
    })
}

/// An A4 document with the report margins and a "Page X of N" footer.
pub fn numbered_document(blocks: Vec<Value>) -> Value {
    json!({
        "title": "Numbered",
        "geometry": {"pageSize": "A4", "margins": "52pt 36pt 42pt 36pt"},
        "styles": default_styles(),
        "blocks": blocks,
        "template": {
            "background": "#F4F6FB",
            "header": {
                "left": {"text": "Quire", "style": "Small"},
                "offset": 24,
                "rule": {"offset": 32, "stroke": {"width": 1, "color": "#5B6CFF"}}
            },
            "footer": {
                "center": {"text": "Page %p of %t", "style": "Small"},
                "offset": 18
            }
        }
    })
}

pub fn paragraph(text: &str) -> Value {
    styled_paragraph(text, "Body")
}

pub fn styled_paragraph(text: &str, style: &str) -> Value {
    json!({"type": "paragraph", "text": text, "style": style})
}

pub fn spacer(height: f32) -> Value {
    json!({"type": "spacer", "height": height})
}

pub fn page_break() -> Value {
    json!({"type": "pageBreak"})
}

pub fn card(child: Value) -> Value {
    json!({
        "type": "card",
        "child": child,
        "background": "#FFFFFF",
        "border": {"width": 1, "color": "#E2E8F0"},
        "padding": 16
    })
}

pub fn table(rows: Vec<Vec<Value>>) -> Value {
    json!({"type": "table", "rows": rows})
}

/// `count` rows, each one spacer cell of `height` points.
pub fn fixed_row_table(count: usize, height: f32) -> Value {
    table((0..count).map(|_| vec![spacer(height)]).collect())
}

/// `count` rows of labelled text cells.
pub fn text_table(count: usize) -> Value {
    json!({
        "type": "table",
        "columnWidths": [120, 300],
        "cellStyle": {"padding": "4pt 6pt", "grid": {"width": 0.5, "color": "#E2E8F0"}},
        "rows": (0..count)
            .map(|i| vec![paragraph(&format!("Row {}", i + 1)), paragraph("value")])
            .collect::<Vec<_>>()
    })
}
