mod wrapper;

use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::fonts::BuiltinFont;
use bitacora_types::TextStyle;

/// One laid-out line of text with its measured extent in points.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredLine {
    pub text: String,
    pub width: f32,
    pub height: f32,
}

/// Measures and greedily word-wraps text set in the built-in Helvetica faces.
///
/// Holds no state besides the line spacing, so one measurer can serve any number
/// of report runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMeasurer {
    config: LayoutConfig,
}

impl TextMeasurer {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn line_height(&self, style: &TextStyle) -> f32 {
        style.font_size * self.config.line_spacing
    }

    pub fn text_width(&self, text: &str, style: &TextStyle) -> f32 {
        BuiltinFont::for_weight(style.font_weight).text_width(text, style.font_size)
    }

    /// Measures `text` as a single line, without wrapping.
    pub fn measure(&self, text: &str, style: &TextStyle) -> MeasuredLine {
        MeasuredLine {
            text: text.to_string(),
            width: self.text_width(text, style),
            height: self.line_height(style),
        }
    }

    /// Wraps `text` into lines no wider than `max_width`.
    ///
    /// Hard line breaks are kept. Blank lines between paragraphs come back as blank
    /// lines; blank lines at either end are dropped, so empty or whitespace-only text
    /// yields no lines at all. A token wider than `max_width` gets a line of its own.
    pub fn wrap(
        &self,
        text: &str,
        style: &TextStyle,
        max_width: f32,
    ) -> Result<Vec<MeasuredLine>, LayoutError> {
        if !max_width.is_finite() || max_width <= 0.0 {
            return Err(LayoutError::InvalidWidth(max_width));
        }

        let font = BuiltinFont::for_weight(style.font_weight);
        let measure = |s: &str| font.text_width(s, style.font_size);
        let height = self.line_height(style);

        let source_lines: Vec<&str> = text.lines().collect();
        let Some(first) = source_lines.iter().position(|l| !l.trim().is_empty()) else {
            return Ok(Vec::new());
        };
        let last = source_lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .unwrap_or(first);

        let mut lines = Vec::new();
        for source in &source_lines[first..=last] {
            if source.trim().is_empty() {
                lines.push(MeasuredLine {
                    text: String::new(),
                    width: 0.0,
                    height,
                });
                continue;
            }
            for (text, width) in wrapper::break_lines(source, max_width, &measure) {
                lines.push(MeasuredLine {
                    text,
                    width,
                    height,
                });
            }
        }
        Ok(lines)
    }
}
