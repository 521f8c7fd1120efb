use bitacora_types::{Color, TextStyle};

/// Text repeated at the bottom of every page, right-aligned to the content edge.
///
/// `{page}` and `{pages}` in the template are replaced with the 1-based page
/// number and the page count.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFooter {
    pub template: String,
    pub style: TextStyle,
}

impl PageFooter {
    pub fn text_for(&self, page_number: usize, page_count: usize) -> String {
        self.template
            .replace("{page}", &page_number.to_string())
            .replace("{pages}", &page_count.to_string())
    }
}

impl Default for PageFooter {
    fn default() -> Self {
        Self {
            template: "Página {page} de {pages}".to_string(),
            style: TextStyle {
                font_size: 8.0,
                color: Color::gray(0x80),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodeOptions {
    /// Written to the document information dictionary.
    pub title: Option<String>,
    /// A PDF date string such as `D:20240603`.
    pub creation_date: Option<String>,
    pub footer: Option<PageFooter>,
}
