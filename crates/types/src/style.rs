use crate::{Color, FontWeight};
use serde::{Deserialize, Serialize};

/// Size, weight and fill color of a run of text. The family is always Helvetica.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            font_weight: FontWeight::Regular,
            color: Color::BLACK,
        }
    }
}

impl TextStyle {
    pub const fn new(font_size: f32, font_weight: FontWeight, color: Color) -> Self {
        Self {
            font_size,
            font_weight,
            color,
        }
    }
}

/// Style of one kind of content block plus the vertical gap left after it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockStyle {
    pub text: TextStyle,
    pub gap_after: f32,
}

impl BlockStyle {
    pub const fn new(text: TextStyle, gap_after: f32) -> Self {
        Self { text, gap_after }
    }
}

/// The style table for every block kind in a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockStyles {
    pub heading: BlockStyle,
    pub date_header: BlockStyle,
    pub label: BlockStyle,
    pub paragraph: BlockStyle,
    pub summary: BlockStyle,
}

impl Default for BlockStyles {
    fn default() -> Self {
        Self {
            heading: BlockStyle::new(
                TextStyle::new(18.0, FontWeight::Bold, Color::rgb(0x1F, 0x4E, 0x79)),
                12.0,
            ),
            date_header: BlockStyle::new(TextStyle::new(12.0, FontWeight::Bold, Color::BLACK), 4.0),
            label: BlockStyle::new(TextStyle::new(10.0, FontWeight::Regular, Color::gray(0x33)), 2.0),
            paragraph: BlockStyle::new(TextStyle::new(10.0, FontWeight::Regular, Color::BLACK), 4.0),
            summary: BlockStyle::new(TextStyle::new(9.0, FontWeight::Regular, Color::gray(0x66)), 2.0),
        }
    }
}

impl BlockStyles {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &BlockStyle)> {
        [
            ("heading", &self.heading),
            ("dateHeader", &self.date_header),
            ("label", &self.label),
            ("paragraph", &self.paragraph),
            ("summary", &self.summary),
        ]
        .into_iter()
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, style) in self.iter() {
            let size = style.text.font_size;
            if !size.is_finite() || size <= 0.0 {
                return Err(format!("{} font size must be positive, got {}", name, size));
            }
            if !style.gap_after.is_finite() || style.gap_after < 0.0 {
                return Err(format!(
                    "{} gapAfter must be zero or positive, got {}",
                    name, style.gap_after
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_is_the_largest_default_size() {
        let styles = BlockStyles::default();
        let heading = styles.heading.text.font_size;
        assert!(styles
            .iter()
            .filter(|(name, _)| *name != "heading")
            .all(|(_, s)| s.text.font_size < heading));
        assert!(styles.date_header.text.font_weight.is_bold());
    }

    #[test]
    fn overrides_merge_with_defaults() {
        let styles: BlockStyles = serde_json::from_str(
            r##"{"summary": {"text": {"fontSize": 8, "color": "#999"}, "gapAfter": 1}}"##,
        )
        .unwrap();
        assert_eq!(styles.summary.text.font_size, 8.0);
        assert_eq!(styles.summary.text.color, Color::gray(0x99));
        assert_eq!(styles.heading, BlockStyles::default().heading);
    }

    #[test]
    fn rejects_non_positive_font_size() {
        let mut styles = BlockStyles::default();
        styles.label.text.font_size = 0.0;
        assert!(styles.validate().is_err());
    }
}
