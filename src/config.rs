use crate::error::ReportError;
use bitacora_layout::LayoutConfig;
use bitacora_render_core::PageFooter;
use bitacora_types::{BlockStyles, Color, PageGeometry, TextStyle};
use serde::Deserialize;

/// What to do with an entry whose date cannot be parsed or formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DatePolicy {
    /// Abort the whole report with [`ReportError::Formatting`].
    #[default]
    FailFast,
    /// Log a warning and lay the entry out without its date header.
    Lenient,
}

/// Page-numbering footer drawn at the bottom of every page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterConfig {
    /// `{page}` and `{pages}` are substituted per page.
    pub template: String,
    pub style: TextStyle,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            template: "Página {page} de {pages}".to_string(),
            style: TextStyle {
                font_size: 8.0,
                color: Color::gray(0x80),
                ..Default::default()
            },
        }
    }
}

impl From<&FooterConfig> for PageFooter {
    fn from(config: &FooterConfig) -> Self {
        PageFooter {
            template: config.template.clone(),
            style: config.style,
        }
    }
}

/// Settings for one report run. Every field has a default, so `{}` is a valid
/// configuration.
///
/// ```json
/// {
///   "page": { "margin": 36 },
///   "styles": { "heading": { "text": { "color": "#0B5394" } } },
///   "locale": "en",
///   "datePolicy": "lenient",
///   "footer": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportConfig {
    pub page: PageGeometry,
    pub styles: BlockStyles,
    /// Line height as a multiple of the font size.
    pub line_spacing: f32,
    /// Vertical space after each entry, in points.
    pub entry_gap: f32,
    pub locale: String,
    pub date_policy: DatePolicy,
    /// `None` turns page numbering off.
    pub footer: Option<FooterConfig>,
    /// Document title written to the PDF metadata. `{project}` is replaced with the
    /// project name.
    pub title: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page: PageGeometry::default(),
            styles: BlockStyles::default(),
            line_spacing: LayoutConfig::default().line_spacing,
            entry_gap: 14.0,
            locale: "es".to_string(),
            date_policy: DatePolicy::default(),
            footer: Some(FooterConfig::default()),
            title: Some("Bitácora - {project}".to_string()),
        }
    }
}

impl ReportConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let config: ReportConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the geometry, the style table and the spacing values. Locale support
    /// is checked against the date formatter when the layout engine is built.
    pub fn validate(&self) -> Result<(), ReportError> {
        self.page.validate().map_err(ReportError::Configuration)?;
        self.styles.validate().map_err(ReportError::Configuration)?;
        if !self.line_spacing.is_finite() || self.line_spacing <= 0.0 {
            return Err(ReportError::Configuration(format!(
                "lineSpacing must be positive, got {}",
                self.line_spacing
            )));
        }
        if !self.entry_gap.is_finite() || self.entry_gap < 0.0 {
            return Err(ReportError::Configuration(format!(
                "entryGap must be zero or positive, got {}",
                self.entry_gap
            )));
        }
        if let Some(footer) = &self.footer {
            let size = footer.style.font_size;
            if !size.is_finite() || size <= 0.0 {
                return Err(ReportError::Configuration(format!(
                    "footer font size must be positive, got {}",
                    size
                )));
            }
        }
        if self.locale.trim().is_empty() {
            return Err(ReportError::Configuration("locale must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            line_spacing: self.line_spacing,
        }
    }

    pub fn title_for(&self, project_name: &str) -> Option<String> {
        self.title
            .as_ref()
            .map(|template| template.replace("{project}", project_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitacora_types::FontWeight;

    #[test]
    fn empty_object_is_the_default_config() {
        let config = ReportConfig::from_json("{}").unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.date_policy, DatePolicy::FailFast);
        assert_eq!(config.locale, "es");
        assert!(config.footer.is_some());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = ReportConfig::from_json(
            r##"{
                "page": { "margin": 36 },
                "styles": { "heading": { "text": { "fontSize": 20, "fontWeight": "bold", "color": "#0B5394" } } },
                "datePolicy": "lenient",
                "footer": null
            }"##,
        )
        .unwrap();
        assert_eq!(config.page.margin, 36.0);
        assert_eq!(config.page.page_width, PageGeometry::default().page_width);
        assert_eq!(config.styles.heading.text.font_size, 20.0);
        assert_eq!(config.styles.heading.text.font_weight, FontWeight::Bold);
        assert_eq!(config.styles.paragraph, BlockStyles::default().paragraph);
        assert_eq!(config.date_policy, DatePolicy::Lenient);
        assert!(config.footer.is_none());
    }

    #[test]
    fn invalid_geometry_is_a_configuration_error() {
        let err = ReportConfig::from_json(r#"{ "page": { "margin": 400 } }"#).unwrap_err();
        assert!(matches!(err, ReportError::Configuration(_)), "{err}");
    }

    #[test]
    fn non_positive_spacing_is_rejected() {
        let config = ReportConfig {
            line_spacing: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ReportError::Configuration(msg)) if msg.contains("lineSpacing")
        ));
    }

    #[test]
    fn malformed_json_surfaces_as_json_error() {
        let err = ReportConfig::from_json("{ page: }").unwrap_err();
        assert!(matches!(err, ReportError::Json(_)));
    }

    #[test]
    fn non_ascii_color_is_a_json_error() {
        let err = ReportConfig::from_json(r##"{"styles":{"heading":{"text":{"color":"#aé"}}}}"##)
            .unwrap_err();
        assert!(matches!(err, ReportError::Json(_)), "{err}");
    }

    #[test]
    fn title_template_takes_the_project_name() {
        let config = ReportConfig::default();
        assert_eq!(
            config.title_for("Torre Norte").as_deref(),
            Some("Bitácora - Torre Norte")
        );
    }
}
