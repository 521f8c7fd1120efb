use bitacora_layout::LayoutError;
use bitacora_render_core::RenderError;
use thiserror::Error;

/// Everything that can stop a report from being produced.
///
/// No variant carries partial output: a failed run yields no document and no bytes.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid report configuration: {0}")]
    Configuration(String),

    #[error("Entry {index} has an unusable date '{date}': {reason}")]
    Formatting {
        index: usize,
        date: String,
        reason: String,
    },

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
