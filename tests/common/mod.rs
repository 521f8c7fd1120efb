pub mod pdf_assertions;

use bitacora::{LogEntry, ReportConfig, ReportGenerator};
use chrono::NaiveDate;
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text drawn on a 1-based page, one string per `Tj`, in drawing order.
    pub fn page_lines(&self, page_number: u32) -> Vec<String> {
        pdf_assertions::shown_text(&self.doc, page_number)
    }

    pub fn all_lines(&self) -> Vec<String> {
        (1..=self.page_count() as u32)
            .flat_map(|page| self.page_lines(page))
            .collect()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

/// Default configuration without the page footer, so page text is only report content.
pub fn config_without_footer() -> ReportConfig {
    ReportConfig {
        footer: None,
        ..Default::default()
    }
}

pub fn generate_pdf(
    config: ReportConfig,
    project: &str,
    entries: &[LogEntry],
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    init_logging();
    let generator = ReportGenerator::new(config)?;
    let artifact = generator.generate(project, entries, report_date())?;
    let doc = LopdfDocument::load_mem(&artifact.bytes)?;
    Ok(GeneratedPdf {
        filename: artifact.filename,
        bytes: artifact.bytes,
        doc,
    })
}

/// A realistic entry: crew, incident, narrative and photos, dated `day` of June 2024.
pub fn full_entry(day: u32, narrative: &str) -> LogEntry {
    LogEntry::new(format!("2024-06-{:02}", day))
        .with_incident("Avance de obra")
        .with_crew(Some(3), Some(5), 0)
        .with_narrative(narrative)
        .with_photos(2, 1)
}

pub const LONG_NARRATIVE: &str = "Se realizó el colado de la losa del tercer nivel en el eje B-C. \
    Llegaron dos camiones de concreto premezclado con retraso de cuarenta minutos. \
    El supervisor de obra solicitó pruebas de revenimiento adicionales y se detuvo \
    la cuadrilla de acero mientras se liberaba el área de trabajo. \
    Por la tarde se retiraron cimbras del segundo nivel y se limpió el acceso principal.";
