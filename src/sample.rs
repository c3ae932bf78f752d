//! The built-in sample: an EU label compliance preflight report.
//!
//! Seven sections, each starting on a new page, with a branded header, a
//! "Page X of N" footer and a light page background.

use crate::document::DocumentSpec;
use quire_layout::{Block, Card, LayoutConfig, PageGeometry, Table, TableStyle};
use quire_render_core::{Band, PageTemplate};
use quire_style::{StyleDefinition, StyleOverride, TextAlign, VerticalAlign};
use quire_types::{Border, Color, EdgeInsets, Margins, PageSize};

pub const PRIMARY: Color = Color::rgb(0x5b, 0x6c, 0xff);
pub const PAGE_BG: Color = Color::rgb(0xf4, 0xf6, 0xfb);
pub const SURFACE: Color = Color::WHITE;
pub const HEADER_ROW: Color = Color::rgb(0xee, 0xf0, 0xff);
pub const TEXT: Color = Color::rgb(0x1f, 0x29, 0x37);
pub const MUTED: Color = Color::rgb(0x6b, 0x72, 0x80);
pub const BORDER: Color = Color::rgb(0xe2, 0xe8, 0xf0);
pub const CRITICAL: Color = Color::rgb(0xf4, 0x3f, 0x5e);
pub const WARNING: Color = Color::rgb(0xd9, 0x77, 0x06);
pub const PASS: Color = Color::rgb(0x10, 0xb9, 0x81);

pub const RUN_ID: &str = "SAMPLE-AVA-0001";

/// Usable width of an A4 page with 36pt side margins.
const CONTENT_WIDTH: f32 = 595.28 - 72.0;

#[derive(Clone, Copy)]
enum Severity {
    Critical,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Warning => "WARNING",
        }
    }

    fn style(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Warning => "Warning",
        }
    }
}

/// Builds the sample report document.
pub fn sample_report() -> DocumentSpec {
    let mut blocks = Vec::new();
    let sections = [
        summary_section(),
        findings_overview(),
        evidence_part_one(),
        evidence_part_two(),
        cross_check(),
        next_steps(),
        audit_trail(),
    ];
    for (i, section) in sections.into_iter().enumerate() {
        if i > 0 {
            blocks.push(Block::PageBreak);
        }
        blocks.extend(section);
    }

    DocumentSpec {
        title: Some("Nexodify AVA - EU Label Compliance Preflight Report (Sample)".into()),
        geometry: PageGeometry::new(PageSize::A4, Margins::new(52.0, 36.0, 42.0, 36.0)),
        styles: styles(),
        blocks,
        template: template(),
        layout: LayoutConfig {
            block_spacing: 6.0,
            ..LayoutConfig::default()
        },
    }
}

fn define(name: &str, parent: Option<&str>, properties: StyleOverride) -> StyleDefinition {
    StyleDefinition {
        name: name.to_string(),
        parent: parent.map(str::to_string),
        properties,
    }
}

fn styles() -> Vec<StyleDefinition> {
    let bold = Some("Helvetica-Bold".to_string());
    vec![
        define(
            "Body",
            None,
            StyleOverride {
                font_size: Some(10.0),
                leading: Some(14.0),
                color: Some(TEXT),
                ..Default::default()
            },
        ),
        define(
            "Title",
            Some("Body"),
            StyleOverride {
                font_family: bold.clone(),
                font_size: Some(22.0),
                space_after: Some(4.0),
                ..Default::default()
            },
        ),
        define(
            "Accent",
            Some("Title"),
            StyleOverride {
                color: Some(PRIMARY),
                ..Default::default()
            },
        ),
        define(
            "Heading",
            Some("Body"),
            StyleOverride {
                font_family: bold.clone(),
                font_size: Some(15.0),
                space_before: Some(10.0),
                space_after: Some(4.0),
                ..Default::default()
            },
        ),
        define(
            "Subheading",
            Some("Body"),
            StyleOverride {
                font_family: bold.clone(),
                font_size: Some(11.5),
                ..Default::default()
            },
        ),
        define(
            "Label",
            Some("Body"),
            StyleOverride {
                font_family: bold.clone(),
                font_size: Some(8.0),
                color: Some(MUTED),
                ..Default::default()
            },
        ),
        define(
            "Small",
            Some("Body"),
            StyleOverride {
                font_size: Some(8.5),
                color: Some(MUTED),
                ..Default::default()
            },
        ),
        define(
            "Disclaimer",
            Some("Small"),
            StyleOverride {
                alignment: Some(TextAlign::Center),
                space_before: Some(12.0),
                ..Default::default()
            },
        ),
        define(
            "Cell",
            Some("Body"),
            StyleOverride {
                font_size: Some(9.0),
                ..Default::default()
            },
        ),
        define(
            "CellHeader",
            Some("Cell"),
            StyleOverride {
                font_family: bold.clone(),
                ..Default::default()
            },
        ),
        define(
            "Mono",
            Some("Cell"),
            StyleOverride {
                font_family: Some("Courier".into()),
                leading: Some(12.0),
                ..Default::default()
            },
        ),
        define(
            "Score",
            Some("Title"),
            StyleOverride {
                font_size: Some(34.0),
                color: Some(WARNING),
                ..Default::default()
            },
        ),
        define(
            "Critical",
            Some("CellHeader"),
            StyleOverride {
                color: Some(CRITICAL),
                ..Default::default()
            },
        ),
        define(
            "Warning",
            Some("CellHeader"),
            StyleOverride {
                color: Some(WARNING),
                ..Default::default()
            },
        ),
        define(
            "Pass",
            Some("CellHeader"),
            StyleOverride {
                color: Some(PASS),
                ..Default::default()
            },
        ),
        define(
            "Brand",
            Some("Body"),
            StyleOverride {
                font_family: bold,
                font_size: Some(10.0),
                color: Some(PRIMARY),
                ..Default::default()
            },
        ),
        define(
            "HeaderMeta",
            Some("Small"),
            StyleOverride {
                font_size: Some(8.0),
                ..Default::default()
            },
        ),
    ]
}

fn template() -> PageTemplate {
    PageTemplate {
        background: Some(PAGE_BG),
        header: Some(
            Band::at(24.0)
                .with_left("Nexodify AVA", "Brand")
                .with_center("EU Label Compliance Preflight Report", "HeaderMeta")
                .with_right(&format!("Run ID: {}", RUN_ID), "HeaderMeta")
                .with_rule(32.0, Border::solid(1.5, PRIMARY)),
        ),
        footer: Some(
            Band::at(18.0)
                .with_left("Generated: January 5, 2025 at 14:32 UTC", "HeaderMeta")
                .with_right("Page %p of %t", "HeaderMeta")
                .with_rule(30.0, Border::solid(0.5, BORDER)),
        ),
    }
}

fn p(text: &str, style: &str) -> Block {
    Block::paragraph(text, style)
}

/// Blocks stacked vertically with no chrome. Splits between blocks.
fn stack(blocks: Vec<Block>) -> Block {
    Table::new(blocks.into_iter().map(|b| vec![b]).collect()).into()
}

fn card(child: Block) -> Block {
    Card::new(child)
        .with_background(SURFACE)
        .with_border(Border::solid(1.0, BORDER))
        .with_padding(EdgeInsets::all(14.0))
        .into()
}

fn grid_style(header: bool) -> TableStyle {
    TableStyle {
        padding: EdgeInsets::new(5.0, 6.0, 5.0, 6.0),
        background: None,
        header_background: header.then_some(HEADER_ROW),
        grid: Some(Border::solid(0.5, BORDER)),
        valign: VerticalAlign::Middle,
    }
}

fn key_value_table(rows: &[(&str, &str)]) -> Block {
    Table::new(
        rows.iter()
            .map(|(key, value)| vec![p(key, "CellHeader"), p(value, "Cell")])
            .collect(),
    )
    .with_column_widths(vec![150.0, CONTENT_WIDTH - 2.0 * 14.0 - 150.0])
    .with_cell_style(grid_style(false))
    .into()
}

fn data_table(header: &[&str], widths: Vec<f32>, rows: Vec<Vec<Block>>) -> Block {
    let mut all = vec![header.iter().map(|h| p(h, "CellHeader")).collect()];
    all.extend(rows);
    Table::new(all)
        .with_column_widths(widths)
        .with_cell_style(TableStyle {
            background: Some(SURFACE),
            ..grid_style(true)
        })
        .into()
}

fn numbered(items: &[&str]) -> Block {
    marked(
        items
            .iter()
            .enumerate()
            .map(|(i, item)| (format!("{}.", i + 1), *item)),
    )
}

fn bullets(items: &[&str]) -> Block {
    marked(items.iter().map(|item| ("\u{2022}".to_string(), *item)))
}

fn marked<'a>(items: impl Iterator<Item = (String, &'a str)>) -> Block {
    Table::new(
        items
            .map(|(marker, text)| vec![p(&marker, "Body"), p(text, "Body")])
            .collect(),
    )
    .with_column_widths(vec![18.0, CONTENT_WIDTH - 2.0 * 14.0 - 18.0])
    .with_cell_style(TableStyle {
        padding: EdgeInsets::new(1.0, 0.0, 1.0, 0.0),
        ..Default::default()
    })
    .into()
}

fn severity_line(severity: Severity, source: &str) -> Block {
    p(
        &format!("{}  |  Source: {}", severity.label(), source),
        severity.style(),
    )
}

struct Evidence<'a> {
    label: &'a str,
    excerpt: &'a str,
}

fn evidence_card(
    severity: Severity,
    title: &str,
    description: &str,
    evidence: &[Evidence<'_>],
    fix: &[&str],
    reference: &str,
) -> Block {
    let mut parts = vec![
        severity_line(severity, "Label"),
        Block::spacer(4.0),
        p(title, "Subheading"),
        Block::spacer(4.0),
        p(description, "Body"),
    ];
    for item in evidence {
        parts.push(Block::spacer(8.0));
        parts.push(p(item.label, "Label"));
        parts.push(Block::spacer(3.0));
        parts.push(
            Card::new(p(item.excerpt, "Mono"))
                .with_background(PAGE_BG)
                .with_padding(EdgeInsets::all(8.0))
                .into(),
        );
    }
    parts.push(Block::spacer(8.0));
    parts.push(p("Recommended Fix", "Label"));
    parts.push(Block::spacer(3.0));
    parts.push(numbered(fix));
    parts.push(Block::spacer(6.0));
    parts.push(p(reference, "Small"));
    card(stack(parts))
}

fn summary_section() -> Vec<Block> {
    let counters = Table::new(vec![vec![
        p("3 Critical", "Critical"),
        p("5 Warnings", "Warning"),
        p("12 Passed", "Pass"),
    ]])
    .with_cell_style(TableStyle {
        padding: EdgeInsets::new(4.0, 0.0, 0.0, 0.0),
        ..Default::default()
    });

    vec![
        p("EU Label Compliance,", "Title"),
        p("Preflighted.", "Accent"),
        p(
            "Automated preflight of label artwork and technical data sheet against \
             Regulation (EU) 1169/2011 on the provision of food information to consumers.",
            "Body",
        ),
        card(stack(vec![
            p("PRODUCT INFORMATION", "Label"),
            Block::spacer(6.0),
            key_value_table(&[
                ("Product Name", "Omega-3 Capsules 1000mg"),
                ("Company", "Example Nutrition S.r.l."),
                ("Country of Sale", "Italy"),
                ("Languages Provided", "Italian, English"),
                ("Run ID", RUN_ID),
            ]),
        ])),
        card(stack(vec![
            p("COMPLIANCE SCORE", "Label"),
            p("72%", "Score"),
            p("Issues require attention", "Small"),
            counters.into(),
        ])),
        p("What was checked", "Heading"),
        bullets(&[
            "Mandatory particulars (Article 9): name, ingredients, allergens, net quantity, \
             date marking, operator",
            "Allergen emphasis requirements (Article 21, Annex II)",
            "QUID requirements for characterising ingredients (Article 22)",
            "Nutrition declaration format and values (Articles 29-35)",
            "Label vs. TDS cross-check for consistency",
        ]),
        p(
            "Sample format preview only. This report does not constitute legal advice. \
             Consult qualified regulatory professionals for compliance decisions.",
            "Disclaimer",
        ),
    ]
}

fn findings_overview() -> Vec<Block> {
    let findings = [
        (Severity::Critical, "Label", "Allergen emphasis missing", "Apply bold, CAPS, or underline to allergen names"),
        (Severity::Critical, "Label", "QUID percentage absent", "Add percentage declaration for fish oil"),
        (Severity::Critical, "Label", "Language mismatch", "Provide Italian translation for all mandatory info"),
        (Severity::Warning, "Label", "Nutrition table incomplete", "Add Reference Intake percentages per Article 32"),
        (Severity::Warning, "Label", "Operator address incomplete", "Include complete address with postal code"),
        (Severity::Warning, "Label", "Net quantity format inconsistent", "Use the 'e' symbol correctly with metric units"),
        (Severity::Warning, "TDS", "Storage conditions missing", "Add specific storage conditions (e.g. 'Store below 25\u{b0}C')"),
        (Severity::Warning, "Label", "Claim wording verification", "Verify claim against the EU Register of health claims"),
    ];
    let rows = findings
        .iter()
        .map(|(severity, source, title, fix)| {
            vec![
                p(severity.label(), severity.style()),
                p(source, "Cell"),
                p(title, "Cell"),
                p(fix, "Cell"),
            ]
        })
        .collect();

    vec![
        p("Findings Overview", "Heading"),
        p(
            "8 issues identified across label and technical data sheet analysis.",
            "Body",
        ),
        data_table(
            &["Severity", "Source", "Finding", "Recommended fix"],
            vec![70.0, 50.0, 150.0, CONTENT_WIDTH - 270.0],
            rows,
        ),
    ]
}

fn evidence_part_one() -> Vec<Block> {
    vec![
        p("Evidence & Fix Details", "Heading"),
        evidence_card(
            Severity::Critical,
            "Allergen Emphasis Missing",
            "Regulation (EU) 1169/2011 Article 21 requires allergens to be emphasised through \
             a typeset that clearly distinguishes them from the rest of the ingredients list.",
            &[Evidence {
                label: "EVIDENCE (LABEL EXCERPT)",
                excerpt: "\"Ingredients: Fish oil, gelatin capsule (bovine gelatin, glycerol), \
                          soy lecithin, mixed tocopherols. Contains: fish, soy.\"\n\n\
                          Allergens \"soy\" and \"fish\" appear in regular typeface.",
            }],
            &[
                "Update the ingredients list to emphasise allergens using CAPITALS: \
                 \"...FISH oil, gelatin capsule...\"",
                "Alternatively, use bold typeface for allergen names throughout",
                "Ensure the \"Contains:\" statement also uses emphasised text",
                "Apply consistently across all label languages",
            ],
            "Reference: Regulation (EU) 1169/2011, Article 21(1)(b), Annex II",
        ),
        evidence_card(
            Severity::Critical,
            "QUID Percentage Absent",
            "When an ingredient is highlighted in the product name or by emphasis, its quantity \
             must be declared as a percentage (Quantitative Ingredient Declaration).",
            &[Evidence {
                label: "EVIDENCE (LABEL EXCERPT)",
                excerpt: "Product name: \"Omega-3 Capsules 1000mg\"\n\
                          Ingredients: \"Fish oil, gelatin capsule...\"\n\n\
                          No percentage given for fish oil / omega-3 content.",
            }],
            &[
                "Add the percentage of fish oil in ingredients: \"Fish oil (72%), gelatin capsule...\"",
                "Verify the percentage against the TDS specification",
                "Consider adding EPA/DHA content per capsule in the nutrition panel",
            ],
            "Reference: Regulation (EU) 1169/2011, Article 22, Annex VIII",
        ),
    ]
}

fn evidence_part_two() -> Vec<Block> {
    let classification = data_table(
        &["Severity", "Meaning"],
        vec![80.0, CONTENT_WIDTH - 2.0 * 14.0 - 80.0],
        vec![
            vec![
                p("Critical", "Critical"),
                p(
                    "Direct violation of mandatory requirements; potential enforcement action \
                     or consumer safety concern",
                    "Cell",
                ),
            ],
            vec![
                p("Warning", "Warning"),
                p(
                    "Non-compliance that may require correction; lower immediate risk but \
                     should be addressed",
                    "Cell",
                ),
            ],
            vec![p("Pass", "Pass"), p("Requirement met; no action needed", "Cell")],
        ],
    );

    vec![
        p("Evidence & Fix Details (continued)", "Heading"),
        evidence_card(
            Severity::Critical,
            "Language Mismatch for Country of Sale",
            "For products sold in Italy, mandatory particulars must be provided in Italian. \
             Some required information appears only in English.",
            &[
                Evidence {
                    label: "EVIDENCE (LABEL EXCERPT)",
                    excerpt: "Storage instructions: \"Store in a cool, dry place away from direct sunlight.\"\n\
                              Usage directions: \"Take 1-2 capsules daily with food.\"\n\n\
                              Both statements in English only; Italian translation absent.",
                },
                Evidence {
                    label: "EVIDENCE (TDS EXCERPT)",
                    excerpt: "Target markets: \"IT, DE, FR, ES\"\n\
                              Label languages: \"EN\" (English only)",
                },
            ],
            &[
                "Add Italian translations for all mandatory particulars",
                "Storage: \"Conservare in luogo fresco e asciutto, al riparo dalla luce diretta.\"",
                "Usage: \"Assumere 1-2 capsule al giorno con il cibo.\"",
                "Update the TDS to reflect the bilingual label",
                "Consider a separate SKU or multi-language label for each market",
            ],
            "Reference: Regulation (EU) 1169/2011, Article 15(1), Member State language requirements",
        ),
        card(stack(vec![
            p("Severity Classification", "Subheading"),
            Block::spacer(4.0),
            p(
                "Findings are classified based on regulatory impact and consumer safety implications:",
                "Body",
            ),
            Block::spacer(6.0),
            classification,
        ])),
    ]
}

fn cross_check() -> Vec<Block> {
    let matched = [
        "Product Name",
        "Net Quantity (1000mg x 60 capsules)",
        "Ingredients Order",
        "Best Before Format",
        "Capsule Count",
    ];
    let mismatched = [
        ("Allergen List", "Fish, Soy", "Fish, Soy, Shellfish", "TDS includes shellfish not on label"),
        ("EPA Content", "180mg", "200mg", "Label shows lower value than spec"),
        ("Storage Temperature", "Not specified", "< 25\u{b0}C", "TDS has temperature; label missing"),
    ];

    vec![
        p("Label vs. TDS Cross-Check", "Heading"),
        p(
            "Automated comparison between label declarations and Technical Data Sheet specifications.",
            "Body",
        ),
        p("Matched Fields", "Subheading"),
        data_table(
            &["Field", "Status"],
            vec![CONTENT_WIDTH - 100.0, 100.0],
            matched
                .iter()
                .map(|field| vec![p(field, "Cell"), p("Match", "Pass")])
                .collect(),
        ),
        p("Mismatched Fields", "Subheading"),
        data_table(
            &["Field", "Label", "TDS", "Note"],
            vec![120.0, 90.0, 110.0, CONTENT_WIDTH - 320.0],
            mismatched
                .iter()
                .map(|(field, label, tds, note)| {
                    vec![
                        p(field, "CellHeader"),
                        p(label, "Cell"),
                        p(tds, "Cell"),
                        p(note, "Warning"),
                    ]
                })
                .collect(),
        ),
        p("Recommended Reconciliation Steps", "Subheading"),
        numbered(&[
            "Review TDS shellfish cross-contact status; if applicable, add to the label allergen statement",
            "Confirm EPA content with the supplier CoA; update label or TDS to match the actual specification",
            "Add storage temperature to the label based on TDS stability data",
            "Re-run preflight after corrections to verify alignment",
        ]),
    ]
}

fn next_steps() -> Vec<Block> {
    let tasks = [
        ("P1", "Address Critical findings: allergen emphasis, QUID, language translation"),
        ("P1", "Reconcile Label vs. TDS mismatches with supplier/formulator"),
        ("P2", "Update nutrition table with %RI values"),
        ("P2", "Complete operator address with full postal details"),
        ("P3", "Verify health claim authorization status in the EU Register"),
        ("P3", "Re-run preflight to confirm corrections"),
    ];

    vec![
        p("Next Steps Checklist", "Heading"),
        p("Priority actions to achieve compliance:", "Body"),
        data_table(
            &["Priority", "Task", "Status"],
            vec![60.0, CONTENT_WIDTH - 130.0, 70.0],
            tasks
                .iter()
                .map(|(priority, task)| {
                    let style = if *priority == "P1" { "Critical" } else { "CellHeader" };
                    vec![p(priority, style), p(task, "Cell"), p("Open", "Cell")]
                })
                .collect(),
        ),
    ]
}

fn audit_trail() -> Vec<Block> {
    vec![
        p("Audit Trail", "Heading"),
        p(
            "This preflight run created the following artifacts for your records:",
            "Body",
        ),
        card(stack(vec![
            key_value_table(&[
                ("Original Uploads", "label.pdf, tds.pdf"),
                ("Extracted Text", "label_text.txt, tds_text.txt, evidence_text.txt"),
                ("Request Payload", "request.json"),
                ("Report Data", "report.json"),
                ("PDF Report", "report.pdf (this document)"),
            ]),
            Block::spacer(8.0),
            p("In production, artifacts are stored at:", "Small"),
            p(&format!("/srv/ava/data/runs/{}/", RUN_ID), "Mono"),
        ])),
        Card::new(stack(vec![
            p("Important Notice", "Subheading"),
            Block::spacer(4.0),
            p(
                "This report is an automated preflight check and does not guarantee regulatory \
                 compliance. Final compliance responsibility rests with the food business operator. \
                 For complex cases, consult qualified food law professionals or contact the relevant \
                 national competent authority.",
                "Body",
            ),
        ]))
        .with_background(HEADER_ROW)
        .with_border(Border::solid(1.0, PRIMARY))
        .with_padding(EdgeInsets::all(14.0))
        .into(),
        p(
            "Questions about this report? Contact support@nexodify.com",
            "Disclaimer",
        ),
        p("\u{a9} 2025 Nexodify. All rights reserved.", "Disclaimer"),
    ]
}
