use crate::helpers::{pdf_text_string, PageContext};
use bitacora_layout::{BuiltinFont, Document};
use bitacora_render_core::{DocumentEncoder, EncodeOptions, RenderError};
use lopdf::{dictionary, Dictionary, Object, ObjectId, Stream};

const PRODUCER: &str = concat!("bitacora ", env!("CARGO_PKG_VERSION"));

/// An in-memory PDF encoder built on the `lopdf` object model.
///
/// Each call builds a fresh `lopdf::Document`, so one encoder can be reused for
/// any number of reports.
#[derive(Debug, Clone, Default)]
pub struct LopdfEncoder {
    options: EncodeOptions,
}

impl LopdfEncoder {
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    fn font_resources(pdf: &mut lopdf::Document) -> Dictionary {
        let mut fonts = Dictionary::new();
        for font in BuiltinFont::ALL {
            let font_id = pdf.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font.resource_name(), font_id);
        }
        fonts
    }

    fn info_dictionary(&self) -> Option<Dictionary> {
        let options = &self.options;
        if options.title.is_none() && options.creation_date.is_none() {
            return None;
        }
        let mut info = dictionary! { "Producer" => pdf_text_string(PRODUCER) };
        if let Some(title) = &options.title {
            info.set("Title", pdf_text_string(title));
        }
        if let Some(date) = &options.creation_date {
            info.set("CreationDate", pdf_text_string(date));
        }
        Some(info)
    }
}

impl DocumentEncoder for LopdfEncoder {
    fn encode(&self, document: &Document) -> Result<Vec<u8>, RenderError> {
        let geometry = document.geometry();
        let page_count = document.page_count();
        let mut pdf = lopdf::Document::with_version("1.7");

        let pages_id = pdf.new_object_id();
        let fonts = Self::font_resources(&mut pdf);
        let resources_id = pdf.add_object(dictionary! { "Font" => fonts });

        let mut page_ids: Vec<ObjectId> = Vec::with_capacity(page_count);
        for (index, placements) in document.pages().iter().enumerate() {
            let mut page_ctx = PageContext::new(geometry.page_height);
            for placement in placements {
                page_ctx.draw_text(placement);
            }
            if let Some(footer) = &self.options.footer {
                page_ctx.draw_footer(footer, geometry, index + 1, page_count);
            }

            let content = page_ctx.finish();
            let content_id = pdf.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = pdf.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.0f32.into(), 0.0f32.into(), geometry.page_width.into(), geometry.page_height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            log::debug!(
                "Encoded page {}/{} with {} text placements",
                index + 1,
                page_count,
                placements.len()
            );
            page_ids.push(page_id);
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => page_ids.len() as i64,
        };
        pdf.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = pdf.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        pdf.trailer.set("Root", catalog_id);
        if let Some(info) = self.info_dictionary() {
            let info_id = pdf.add_object(info);
            pdf.trailer.set("Info", info_id);
        }

        let mut buffer = Vec::new();
        pdf.save_to(&mut buffer).map_err(lopdf::Error::from)?;
        Ok(buffer)
    }
}
