// Page content stream drawing, shared by every page of a report.

use bitacora_layout::fonts::encode_win_ansi;
use bitacora_layout::{BuiltinFont, PositionedText};
use bitacora_render_core::utils::baseline_y;
use bitacora_render_core::PageFooter;
use bitacora_types::{Color, PageGeometry, TextStyle};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

#[derive(Default, Clone, PartialEq)]
struct LopdfPageRenderState {
    font: Option<BuiltinFont>,
    font_size: f32,
    fill_color: Option<Color>,
}

pub(crate) struct PageContext {
    page_height: f32,
    content: Content,
    state: LopdfPageRenderState,
}

impl PageContext {
    pub(crate) fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_font(&mut self, style: &TextStyle) {
        let font = BuiltinFont::for_weight(style.font_weight);
        if self.state.font != Some(font) || self.state.font_size != style.font_size {
            self.push(
                "Tf",
                vec![
                    Object::Name(font.resource_name().as_bytes().to_vec()),
                    style.font_size.into(),
                ],
            );
            self.state.font = Some(font);
            self.state.font_size = style.font_size;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn show_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        if text.trim().is_empty() {
            return;
        }
        self.push("BT", vec![]);
        self.set_font(style);
        self.set_fill_color(style.color);
        let pdf_y = baseline_y(y, style.font_size, self.page_height);
        self.push("Td", vec![x.into(), pdf_y.into()]);
        self.push(
            "Tj",
            vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    pub(crate) fn draw_text(&mut self, placement: &PositionedText) {
        self.show_text(&placement.text, placement.x, placement.y, &placement.style);
    }

    /// Draws the footer right-aligned to the content edge, inside the bottom margin.
    pub(crate) fn draw_footer(
        &mut self,
        footer: &PageFooter,
        geometry: &PageGeometry,
        page_number: usize,
        page_count: usize,
    ) {
        let text = footer.text_for(page_number, page_count);
        let width = BuiltinFont::for_weight(footer.style.font_weight)
            .text_width(&text, footer.style.font_size);
        let x = (geometry.page_width - geometry.margin - width).max(geometry.margin);
        let y = geometry.page_height - geometry.margin * 0.5 - footer.style.font_size;
        self.show_text(&text, x, y, &footer.style);
    }
}

/// A PDF text string for the document information dictionary: a literal for
/// plain ASCII, UTF-16BE with a byte order mark otherwise.
pub fn pdf_text_string(s: &str) -> Object {
    if s.is_ascii() {
        return Object::String(s.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in s.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}
