#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Line height as a multiple of the font size.
    ///
    /// Every wrapped line of a block is `font_size * line_spacing` points tall,
    /// regardless of the glyphs it contains.
    ///
    /// Defaults to `1.45`.
    pub line_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { line_spacing: 1.45 }
    }
}
