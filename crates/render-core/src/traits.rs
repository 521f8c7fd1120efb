use crate::error::RenderError;
use bitacora_layout::Document;

/// Serializes a laid-out document into a complete output file.
///
/// Implementations either return the whole file or fail; a partially written
/// buffer is never handed back as a result.
pub trait DocumentEncoder {
    fn encode(&self, document: &Document) -> Result<Vec<u8>, RenderError>;
}
