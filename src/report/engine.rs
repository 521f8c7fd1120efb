use crate::config::{DatePolicy, ReportConfig};
use crate::error::ReportError;
use crate::locale::{parse_entry_date, DateFormatter, LongDateFormatter};
use crate::report::model::LogEntry;
use bitacora_layout::{BlockRenderer, ContentBlock, Document, PageCursor, TextMeasurer};
use std::sync::Arc;

/// Lays out a project's daily log entries, one after another, into a paginated
/// [`Document`].
///
/// The engine is immutable once built and can be shared across threads; each call
/// to [`generate`](Self::generate) owns its own cursor and document.
pub struct ReportLayoutEngine {
    config: ReportConfig,
    formatter: Arc<dyn DateFormatter>,
    measurer: TextMeasurer,
}

impl ReportLayoutEngine {
    pub fn new(config: ReportConfig) -> Result<Self, ReportError> {
        Self::with_formatter(config, Arc::new(LongDateFormatter))
    }

    /// Builds an engine that renders date headers with `formatter`. Fails when the
    /// configuration is invalid or the formatter does not support its locale.
    pub fn with_formatter(
        config: ReportConfig,
        formatter: Arc<dyn DateFormatter>,
    ) -> Result<Self, ReportError> {
        config.validate()?;
        if !formatter.supports(&config.locale) {
            return Err(ReportError::Configuration(format!(
                "locale '{}' is not supported by the date formatter",
                config.locale
            )));
        }
        let measurer = TextMeasurer::new(config.layout_config());
        Ok(Self {
            config,
            formatter,
            measurer,
        })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Lays out the heading followed by every entry in the order given.
    ///
    /// Entries are never re-sorted. An empty slice yields a single page holding
    /// only the heading.
    pub fn generate(
        &self,
        project_name: &str,
        entries: &[LogEntry],
    ) -> Result<Document, ReportError> {
        let geometry = self.config.page;
        let renderer = BlockRenderer::new(&self.measurer, geometry, &self.config.styles);
        let mut cursor = PageCursor::new(geometry)?;
        let mut document = Document::new(geometry);

        let heading = ContentBlock::Heading {
            text: project_name.to_string(),
        };
        document.extend(renderer.render(&heading, &mut cursor)?);

        for (index, entry) in entries.iter().enumerate() {
            let body = entry_body(entry);

            if let Some(header) = self.date_header(index, entry)? {
                // Keep the header with the entry's first line.
                if entry.has_body() && !cursor.reserve(renderer.advance_height(&header)) {
                    cursor.force_break();
                }
                document.extend(renderer.render(&header, &mut cursor)?);
            }

            for block in &body {
                document.extend(renderer.render(block, &mut cursor)?);
            }
            cursor.advance(self.config.entry_gap);
        }

        log::debug!(
            "Laid out {} entries for '{}' on {} page(s)",
            entries.len(),
            project_name,
            document.page_count()
        );
        Ok(document)
    }

    fn date_header(
        &self,
        index: usize,
        entry: &LogEntry,
    ) -> Result<Option<ContentBlock>, ReportError> {
        let formatted = parse_entry_date(&entry.date)
            .and_then(|date| self.formatter.format_long(date, &self.config.locale));
        match (formatted, self.config.date_policy) {
            (Ok(date), _) => Ok(Some(ContentBlock::DateHeader { date })),
            (Err(reason), DatePolicy::FailFast) => Err(ReportError::Formatting {
                index,
                date: entry.date.clone(),
                reason,
            }),
            (Err(reason), DatePolicy::Lenient) => {
                log::warn!(
                    "Entry {} has an unusable date '{}' ({}); laying it out without a date header",
                    index,
                    entry.date,
                    reason
                );
                Ok(None)
            }
        }
    }
}

/// The blocks that follow an entry's date header, in display order.
fn entry_body(entry: &LogEntry) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    if let Some(text) = entry.incident_line() {
        blocks.push(ContentBlock::LabelLine { text });
    }
    if let Some(text) = entry.personnel_line() {
        blocks.push(ContentBlock::LabelLine { text });
    }
    if let Some(text) = entry.narrative_text() {
        blocks.push(ContentBlock::Paragraph {
            text: text.to_string(),
        });
    }
    if let Some(text) = entry.photo_summary() {
        blocks.push(ContentBlock::SummaryLine { text });
    }
    blocks
}
