use serde::{Deserialize, Serialize};

/// A4 portrait in PDF points (1/72 inch).
pub const A4_SIZE_PT: (f32, f32) = (595.28, 841.89);

/// Fixed page geometry for one report run, in points.
///
/// `y` coordinates used by the layout grow downwards from the top edge of the page.
/// A line whose top sits at or above `bottom_break_threshold` may still be written;
/// the gap between the threshold and the bottom margin is what keeps that last line
/// on the paper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub bottom_break_threshold: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::with_page_size(A4_SIZE_PT, 40.0)
    }
}

impl PageGeometry {
    /// Geometry for a `(width, height)` page with a uniform margin. The break
    /// threshold leaves one and a half margins of room at the bottom.
    pub fn with_page_size((page_width, page_height): (f32, f32), margin: f32) -> Self {
        Self {
            page_width,
            page_height,
            margin,
            bottom_break_threshold: page_height - margin * 1.5,
        }
    }

    /// Width available to text between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    pub fn validate(&self) -> Result<(), String> {
        let values = [
            ("pageWidth", self.page_width),
            ("pageHeight", self.page_height),
            ("margin", self.margin),
            ("bottomBreakThreshold", self.bottom_break_threshold),
        ];
        for (name, value) in values {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }
        if self.content_width() <= 0.0 {
            return Err(format!(
                "margins of {} leave no content width on a page {} wide",
                self.margin, self.page_width
            ));
        }
        if self.bottom_break_threshold <= self.margin
            || self.bottom_break_threshold >= self.page_height - self.margin
        {
            return Err(format!(
                "bottomBreakThreshold must lie between the top margin ({}) and the bottom margin ({}), got {}",
                self.margin,
                self.page_height - self.margin,
                self.bottom_break_threshold
            ));
        }
        Ok(())
    }
}
