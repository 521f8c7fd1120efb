//! Print-ready PDF reports of a construction project's daily log.
//!
//! [`ReportGenerator`] ties the pieces together: entries are laid out by the
//! [`ReportLayoutEngine`] into a paginated document, encoded to PDF by
//! [`LopdfEncoder`], and returned as a [`ReportArtifact`] named by
//! [`suggest_filename`].
//!
//! ```no_run
//! use bitacora::{DirectorySink, LogEntry, ReportConfig, ReportGenerator};
//!
//! # fn main() -> Result<(), bitacora::ReportError> {
//! let entries: Vec<LogEntry> = serde_json::from_str(r#"[{"date": "2024-06-03", "total_personnel": 6}]"#)?;
//! let generator = ReportGenerator::new(ReportConfig::default())?;
//! generator.export_today("Torre Norte", &entries, &DirectorySink::new("reports"))?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod locale;
pub mod report;

pub use config::{DatePolicy, FooterConfig, ReportConfig};
pub use error::ReportError;
pub use export::{suggest_filename, ArtifactSink, DirectorySink, ReportArtifact};
pub use locale::{DateFormatter, LongDateFormatter};
pub use report::{LogEntry, ReportLayoutEngine};

pub use bitacora_layout::{Document, PositionedText};
pub use bitacora_render_core::{DocumentEncoder, EncodeOptions, PageFooter};
pub use bitacora_render_lopdf::LopdfEncoder;

use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Generates report artifacts from a project's entries.
pub struct ReportGenerator {
    engine: ReportLayoutEngine,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Result<Self, ReportError> {
        Ok(Self {
            engine: ReportLayoutEngine::new(config)?,
        })
    }

    /// Uses `formatter` instead of the built-in long-date formatter.
    pub fn with_formatter(
        config: ReportConfig,
        formatter: Arc<dyn DateFormatter>,
    ) -> Result<Self, ReportError> {
        Ok(Self {
            engine: ReportLayoutEngine::with_formatter(config, formatter)?,
        })
    }

    pub fn config(&self) -> &ReportConfig {
        self.engine.config()
    }

    /// Lays out `entries` without encoding them.
    pub fn layout(&self, project_name: &str, entries: &[LogEntry]) -> Result<Document, ReportError> {
        self.engine.generate(project_name, entries)
    }

    /// Lays out and encodes the report. `today` only affects the filename and the
    /// creation date in the PDF metadata.
    pub fn generate(
        &self,
        project_name: &str,
        entries: &[LogEntry],
        today: NaiveDate,
    ) -> Result<ReportArtifact, ReportError> {
        let document = self.engine.generate(project_name, entries)?;
        let encoder = LopdfEncoder::new(self.encode_options(project_name, today));
        let bytes = encoder.encode(&document)?;
        let filename = suggest_filename(project_name, today);
        log::info!(
            "Generated '{}': {} entries, {} page(s), {} bytes",
            filename,
            entries.len(),
            document.page_count(),
            bytes.len()
        );
        Ok(ReportArtifact { filename, bytes })
    }

    /// Generates the report and hands it to `sink`.
    pub fn export(
        &self,
        project_name: &str,
        entries: &[LogEntry],
        today: NaiveDate,
        sink: &dyn ArtifactSink,
    ) -> Result<ReportArtifact, ReportError> {
        let artifact = self.generate(project_name, entries, today)?;
        sink.deliver(&artifact)?;
        Ok(artifact)
    }

    /// [`export`](Self::export) dated with the local calendar day.
    pub fn export_today(
        &self,
        project_name: &str,
        entries: &[LogEntry],
        sink: &dyn ArtifactSink,
    ) -> Result<ReportArtifact, ReportError> {
        self.export(project_name, entries, Local::now().date_naive(), sink)
    }

    fn encode_options(&self, project_name: &str, today: NaiveDate) -> EncodeOptions {
        let config = self.engine.config();
        EncodeOptions {
            title: config.title_for(project_name),
            creation_date: Some(today.format("D:%Y%m%d").to_string()),
            footer: config.footer.as_ref().map(PageFooter::from),
        }
    }
}
