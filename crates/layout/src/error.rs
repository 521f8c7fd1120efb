use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Wrap width must be a positive, finite number of points, got {0}.")]
    InvalidWidth(f32),
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
}
