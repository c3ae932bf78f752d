mod common;

use common::fixtures::*;
use common::{TestResult, document, generate_pdf, init_logger};
use quire::{DecoratedPage, PipelineBuilder};

fn footer(page: &DecoratedPage) -> Option<&str> {
    page.texts().find(|t| t.starts_with("Page "))
}

#[test]
fn test_page_x_of_n_after_layout() -> TestResult {
    init_logger();

    let doc = numbered_document(vec![
        paragraph("one"),
        page_break(),
        paragraph("two"),
        page_break(),
        paragraph("three"),
    ]);
    let pipeline = PipelineBuilder::new().with_document(document(&doc)?).build()?;
    let pages = pipeline.render()?;

    let footers: Vec<&str> = pages.iter().filter_map(footer).collect();
    assert_eq!(footers, vec!["Page 1 of 3", "Page 2 of 3", "Page 3 of 3"]);
    for (i, page) in pages.iter().enumerate() {
        assert_eq!(page.number, i + 1);
        assert_eq!(page.total_pages, 3);
    }
    Ok(())
}

#[test]
fn test_total_matches_overflowed_page_count() -> TestResult {
    init_logger();

    let blocks = (0..60)
        .map(|i| paragraph(&format!("Line {} of a long document that keeps going.", i)))
        .chain(std::iter::once(spacer(400.0)))
        .chain((0..60).map(|i| paragraph(&format!("Tail {}", i))))
        .collect();
    let pipeline = PipelineBuilder::new()
        .with_document(document(&numbered_document(blocks))?)
        .build()?;
    let pages = pipeline.render()?;
    let total = pages.len();

    assert!(total >= 2);
    for page in &pages {
        assert_eq!(
            footer(page),
            Some(format!("Page {} of {}", page.number, total).as_str())
        );
    }
    Ok(())
}

#[test]
fn test_decoration_can_be_repeated() -> TestResult {
    init_logger();

    let doc = numbered_document(vec![paragraph("a"), page_break(), paragraph("b")]);
    let pipeline = PipelineBuilder::new().with_document(document(&doc)?).build()?;
    let laid_out = pipeline.layout()?;
    let before = laid_out.clone();

    let preview = laid_out.decorate(pipeline.decorator());
    let final_pages = laid_out.decorate(pipeline.decorator());
    assert_eq!(preview, final_pages);
    assert_eq!(laid_out, before);
    assert_eq!(pipeline.render()?, final_pages);
    Ok(())
}

#[test]
fn test_background_is_painted_first() -> TestResult {
    init_logger();

    let pages = common::render_pages(&numbered_document(vec![paragraph("content")]))?;
    match &pages[0].commands[0] {
        quire::DrawCommand::FillRect { rect, color } => {
            assert_eq!(rect.width, pages[0].width);
            assert_eq!(rect.height, pages[0].height);
            assert_eq!(*color, quire::Color::rgb(0xf4, 0xf6, 0xfb));
        }
        other => panic!("expected the background fill, got {:?}", other),
    }
    // Content comes after the header and footer.
    assert_eq!(pages[0].texts().last(), Some("content"));
    Ok(())
}

#[test]
fn test_footer_in_pdf() -> TestResult {
    init_logger();

    let pdf = generate_pdf(&numbered_document(vec![
        paragraph("first"),
        page_break(),
        paragraph("second"),
    ]))?;
    assert_pdf_page_count!(pdf, 2);
    assert!(pdf.page_text(1).iter().any(|t| t == "Page 1 of 2"));
    assert!(pdf.page_text(2).iter().any(|t| t == "Page 2 of 2"));
    Ok(())
}
