use crate::{BlockRenderer, ContentBlock, Document, PageCursor, TextMeasurer};
use bitacora_types::{BlockStyles, PageGeometry};

/// A small page so a handful of lines is enough to force breaks.
pub fn small_geometry() -> PageGeometry {
    PageGeometry {
        page_width: 200.0,
        page_height: 200.0,
        margin: 20.0,
        bottom_break_threshold: 150.0,
    }
}

/// Lays out `blocks` in order on a fresh cursor and collects them into a document.
pub fn layout_blocks(geometry: PageGeometry, blocks: &[ContentBlock]) -> Document {
    let measurer = TextMeasurer::default();
    let styles = BlockStyles::default();
    let renderer = BlockRenderer::new(&measurer, geometry, &styles);
    let mut cursor = PageCursor::new(geometry).unwrap();
    let mut document = Document::new(geometry);
    for block in blocks {
        document.extend(renderer.render(block, &mut cursor).unwrap());
    }
    document
}

pub fn paragraph(text: &str) -> ContentBlock {
    ContentBlock::Paragraph {
        text: text.to_string(),
    }
}

pub fn label(text: &str) -> ContentBlock {
    ContentBlock::LabelLine {
        text: text.to_string(),
    }
}
