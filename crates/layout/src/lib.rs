//! Page-flow layout for bitacora reports.
//!
//! The crate turns semantic [`ContentBlock`]s into page-scoped [`PositionedText`]
//! placements. Measurement uses the built-in metrics of the standard PDF Helvetica
//! faces, so no font files are loaded and layout is a pure function of its inputs.

pub mod blocks;
pub mod config;
pub mod elements;
mod error;
pub mod fonts;
pub mod pagination;
pub mod text;

pub use self::blocks::{BlockRenderer, ContentBlock};
pub use self::config::LayoutConfig;
pub use self::elements::{Document, PositionedText};
pub use self::error::LayoutError;
pub use self::fonts::BuiltinFont;
pub use self::pagination::{Cursor, PageCursor};
pub use self::text::{MeasuredLine, TextMeasurer};

// Re-export the value types used in this crate's signatures
pub use bitacora_types::{BlockStyle, BlockStyles, Color, FontWeight, PageGeometry, TextStyle};

#[cfg(test)]
mod test_utils;
