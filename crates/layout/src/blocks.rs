use crate::elements::PositionedText;
use crate::pagination::PageCursor;
use crate::text::{MeasuredLine, TextMeasurer};
use crate::LayoutError;
use bitacora_types::{BlockStyle, BlockStyles, PageGeometry};

/// A semantic unit of report content, before layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// Document title.
    Heading { text: String },
    /// An entry's already-localized date.
    DateHeader { date: String },
    LabelLine { text: String },
    /// Free text, wrapped to the content width.
    Paragraph { text: String },
    SummaryLine { text: String },
}

impl ContentBlock {
    pub fn text(&self) -> &str {
        match self {
            ContentBlock::Heading { text }
            | ContentBlock::LabelLine { text }
            | ContentBlock::Paragraph { text }
            | ContentBlock::SummaryLine { text } => text,
            ContentBlock::DateHeader { date } => date,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Heading { .. } => "Heading",
            ContentBlock::DateHeader { .. } => "DateHeader",
            ContentBlock::LabelLine { .. } => "LabelLine",
            ContentBlock::Paragraph { .. } => "Paragraph",
            ContentBlock::SummaryLine { .. } => "SummaryLine",
        }
    }

    pub fn style<'s>(&self, styles: &'s BlockStyles) -> &'s BlockStyle {
        match self {
            ContentBlock::Heading { .. } => &styles.heading,
            ContentBlock::DateHeader { .. } => &styles.date_header,
            ContentBlock::LabelLine { .. } => &styles.label,
            ContentBlock::Paragraph { .. } => &styles.paragraph,
            ContentBlock::SummaryLine { .. } => &styles.summary,
        }
    }

    fn is_multiline(&self) -> bool {
        matches!(self, ContentBlock::Paragraph { .. })
    }
}

/// Turns content blocks into positioned, styled lines, moving the page cursor as it goes.
pub struct BlockRenderer<'a> {
    measurer: &'a TextMeasurer,
    geometry: PageGeometry,
    styles: &'a BlockStyles,
}

impl<'a> BlockRenderer<'a> {
    pub fn new(measurer: &'a TextMeasurer, geometry: PageGeometry, styles: &'a BlockStyles) -> Self {
        Self {
            measurer,
            geometry,
            styles,
        }
    }

    /// Vertical space the block's first line claims: line height, plus the gap for
    /// single-line blocks.
    pub fn advance_height(&self, block: &ContentBlock) -> f32 {
        let style = block.style(self.styles);
        let line_height = self.measurer.line_height(&style.text);
        if block.is_multiline() {
            line_height
        } else {
            line_height + style.gap_after
        }
    }

    pub fn render(
        &self,
        block: &ContentBlock,
        cursor: &mut PageCursor,
    ) -> Result<Vec<PositionedText>, LayoutError> {
        let style = block.style(self.styles);

        let lines = if block.is_multiline() {
            self.measurer
                .wrap(block.text(), &style.text, self.geometry.content_width())?
        } else {
            let line = self.measurer.measure(block.text(), &style.text);
            if line.width > self.geometry.content_width() {
                log::warn!(
                    "{} '{}' is {:.1}pt wide, wider than the {:.1}pt content area",
                    block.kind(),
                    line.text,
                    line.width,
                    self.geometry.content_width()
                );
            }
            vec![line]
        };

        let mut placements = Vec::with_capacity(lines.len());
        for line in lines {
            let MeasuredLine {
                text,
                width,
                height,
            } = line;
            if !text.is_empty() {
                let at = cursor.begin_write();
                placements.push(PositionedText {
                    page_index: at.page_index,
                    x: self.geometry.margin,
                    y: at.y,
                    width,
                    height,
                    text,
                    style: style.text,
                });
            }
            cursor.advance(height);
        }
        cursor.advance(style.gap_after);
        Ok(placements)
    }
}
