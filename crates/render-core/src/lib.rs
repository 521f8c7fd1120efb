//! Core rendering abstractions for report encoding.
//!
//! This crate provides what every output backend shares:
//! - `DocumentEncoder` trait for turning a laid-out `Document` into file bytes
//! - Encoding options (document title, page footer)
//! - Error types for rendering operations
//! - Coordinate helpers

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::DocumentEncoder;
pub use types::{EncodeOptions, PageFooter};
