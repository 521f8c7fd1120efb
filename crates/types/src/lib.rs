pub mod color;
pub mod font;
pub mod geometry;
pub mod style;

pub use color::Color;
pub use font::FontWeight;
pub use geometry::{A4_SIZE_PT, PageGeometry};
pub use style::{BlockStyle, BlockStyles, TextStyle};
