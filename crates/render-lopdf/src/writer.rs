use crate::content::PageContext;
use crate::encoding::to_win_ansi;
use chrono::{DateTime, Utc};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use quire_render_core::utils::fonts_used;
use quire_render_core::{DecoratedPage, DocumentWriter, RenderError};
use std::collections::HashMap;
use std::io::Write;

/// Writes decorated pages as a PDF document.
///
/// The whole object graph is built in memory and written in one go; page
/// counts for these documents are small enough that streaming buys nothing.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    pub title: Option<String>,
    /// Fixed creation date for reproducible output. Defaults to now.
    pub creation_date: Option<DateTime<Utc>>,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = Some(date);
        self
    }

    /// Builds the lopdf document without serializing it.
    pub fn build(&self, pages: &[DecoratedPage]) -> Result<Document, RenderError> {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();

        let mut font_map = HashMap::new();
        let mut font_dict = Dictionary::new();
        for (i, name) in fonts_used(pages).into_iter().enumerate() {
            let resource = format!("F{}", i + 1);
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => Object::Name(name.as_bytes().to_vec()),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(resource.as_bytes(), font_id);
            font_map.insert(name, resource);
        }
        let resources_id = document.add_object(dictionary! { "Font" => font_dict });

        let mut page_ids = Vec::with_capacity(pages.len());
        for page in pages {
            let page_id = self.write_page(&mut document, page, &font_map, pages_id, resources_id)?;
            page_ids.push(page_id);
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => page_ids.len() as i64,
        };
        document.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);

        let info_id = document.add_object(self.info_dictionary());
        document.trailer.set("Info", info_id);

        log::debug!(
            "Built PDF with {} pages and {} fonts",
            page_ids.len(),
            font_map.len()
        );
        Ok(document)
    }

    fn write_page(
        &self,
        document: &mut Document,
        page: &DecoratedPage,
        font_map: &HashMap<String, String>,
        pages_id: ObjectId,
        resources_id: ObjectId,
    ) -> Result<ObjectId, RenderError> {
        let content = PageContext::render(page, font_map);
        let content_id = document.add_object(Stream::new(dictionary! {}, content.encode()?));
        let media_box = vec![
            Object::Real(0.0),
            Object::Real(0.0),
            page.width.into(),
            page.height.into(),
        ];
        Ok(document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box,
            "Contents" => content_id,
            "Resources" => resources_id,
        }))
    }

    fn info_dictionary(&self) -> Dictionary {
        let date = self.creation_date.unwrap_or_else(Utc::now);
        let mut info = dictionary! {
            "Producer" => Object::String(b"quire".to_vec(), StringFormat::Literal),
            "CreationDate" => Object::String(
                date.format("D:%Y%m%d%H%M%SZ").to_string().into_bytes(),
                StringFormat::Literal,
            ),
        };
        if let Some(title) = &self.title {
            info.set("Title", Object::String(to_win_ansi(title), StringFormat::Literal));
        }
        info
    }
}

impl DocumentWriter for PdfWriter {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn write_document(
        &self,
        pages: &[DecoratedPage],
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        let mut document = self.build(pages)?;
        let mut sink = &mut *out;
        document.save_to(&mut sink)?;
        out.flush()?;
        Ok(())
    }
}
