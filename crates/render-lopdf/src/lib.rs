//! PDF encoder for bitacora reports using the lopdf library.
//!
//! Pages are drawn with the non-embedded standard Type1 Helvetica faces, so the
//! output stays small and the widths used by the layout engine match what viewers
//! render.

mod encoder;
mod helpers;

pub use encoder::LopdfEncoder;
pub use helpers::pdf_text_string;
