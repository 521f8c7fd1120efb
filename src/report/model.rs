use serde::Deserialize;

/// One day's logged record for a project, as stored by the backend.
///
/// Field names follow the backend's snake_case rows, so a JSON array of rows
/// deserializes straight into `Vec<LogEntry>`. Missing counts default to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    /// Calendar date, `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: String,
    pub narrative: Option<String>,
    pub officer_count: Option<u32>,
    pub helper_count: Option<u32>,
    pub total_personnel: u32,
    pub incident_type: Option<String>,
    pub morning_photo_count: u32,
    pub afternoon_photo_count: u32,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl LogEntry {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Default::default()
        }
    }

    pub fn with_narrative(mut self, narrative: impl Into<String>) -> Self {
        self.narrative = Some(narrative.into());
        self
    }

    pub fn with_crew(mut self, officers: Option<u32>, helpers: Option<u32>, total: u32) -> Self {
        self.officer_count = officers;
        self.helper_count = helpers;
        self.total_personnel = total;
        self
    }

    pub fn with_incident(mut self, incident_type: impl Into<String>) -> Self {
        self.incident_type = Some(incident_type.into());
        self
    }

    pub fn with_photos(mut self, morning: u32, afternoon: u32) -> Self {
        self.morning_photo_count = morning;
        self.afternoon_photo_count = afternoon;
        self
    }

    /// Officers plus helpers when that sum is positive, the recorded total otherwise.
    pub fn effective_personnel(&self) -> u32 {
        let itemized = self
            .officer_count
            .unwrap_or(0)
            .saturating_add(self.helper_count.unwrap_or(0));
        if itemized > 0 { itemized } else { self.total_personnel }
    }

    pub fn has_personnel_data(&self) -> bool {
        self.officer_count.is_some() || self.helper_count.is_some() || self.total_personnel > 0
    }

    /// The headline shows the effective count while the breakdown always shows the
    /// raw officer and helper figures, so the two may disagree.
    ///
    /// Every entry gets the line except one that carries nothing but its date.
    pub fn personnel_line(&self) -> Option<String> {
        if !self.has_body() {
            return None;
        }
        Some(format!(
            "Personal: {} (Oficiales: {}, Ayudantes: {})",
            self.effective_personnel(),
            self.officer_count.unwrap_or(0),
            self.helper_count.unwrap_or(0)
        ))
    }

    pub fn incident_line(&self) -> Option<String> {
        non_blank(&self.incident_type).map(|kind| format!("Tipo: {}", kind))
    }

    pub fn narrative_text(&self) -> Option<&str> {
        self.narrative
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    pub fn photo_summary(&self) -> Option<String> {
        let total = self
            .morning_photo_count
            .saturating_add(self.afternoon_photo_count);
        (total > 0).then(|| {
            format!(
                "Fotos: Mañana {}, Tarde {}",
                self.morning_photo_count, self.afternoon_photo_count
            )
        })
    }

    /// Whether anything besides the date header will be laid out for this entry.
    pub fn has_body(&self) -> bool {
        self.incident_line().is_some()
            || self.has_personnel_data()
            || self.narrative_text().is_some()
            || self.photo_summary().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn itemized_crew_wins_over_total() {
        let entry = LogEntry::new("2024-06-03").with_crew(Some(3), Some(2), 1);
        assert_eq!(entry.effective_personnel(), 5);
        assert_eq!(
            entry.personnel_line().unwrap(),
            "Personal: 5 (Oficiales: 3, Ayudantes: 2)"
        );
    }

    #[test]
    fn total_is_used_when_itemized_is_missing_or_zero() {
        let missing = LogEntry::new("2024-06-03").with_crew(None, None, 7);
        assert_eq!(
            missing.personnel_line().unwrap(),
            "Personal: 7 (Oficiales: 0, Ayudantes: 0)"
        );
        let zeros = LogEntry::new("2024-06-03").with_crew(Some(0), Some(0), 4);
        assert_eq!(
            zeros.personnel_line().unwrap(),
            "Personal: 4 (Oficiales: 0, Ayudantes: 0)"
        );
    }

    #[test]
    fn one_sided_crew_counts() {
        let entry = LogEntry::new("2024-06-03").with_crew(Some(4), None, 9);
        assert_eq!(
            entry.personnel_line().unwrap(),
            "Personal: 4 (Oficiales: 4, Ayudantes: 0)"
        );
    }

    #[test]
    fn date_only_entry_has_no_body() {
        let entry = LogEntry::new("2024-06-03");
        assert!(!entry.has_body());
        assert!(entry.personnel_line().is_none());
        assert!(entry.photo_summary().is_none());
    }

    #[test]
    fn narrative_without_crew_still_reports_personnel() {
        let entry = LogEntry::new("2024-06-03").with_narrative("Lluvia.");
        assert!(entry.has_body());
        assert_eq!(
            entry.personnel_line().unwrap(),
            "Personal: 0 (Oficiales: 0, Ayudantes: 0)"
        );
        let photos_only = LogEntry::new("2024-06-03").with_photos(1, 0);
        assert!(photos_only.personnel_line().is_some());
    }

    #[test]
    fn blank_optional_text_is_ignored() {
        let entry = LogEntry::new("2024-06-03")
            .with_incident("   ")
            .with_narrative("\n \n");
        assert!(entry.incident_line().is_none());
        assert!(entry.narrative_text().is_none());
        assert_eq!(
            LogEntry::new("x").with_incident(" Lluvia ").incident_line().unwrap(),
            "Tipo: Lluvia"
        );
    }

    #[test]
    fn photo_summary_lists_both_shifts() {
        let entry = LogEntry::new("2024-06-03").with_photos(0, 3);
        assert_eq!(entry.photo_summary().unwrap(), "Fotos: Mañana 0, Tarde 3");
    }

    #[test]
    fn deserializes_backend_rows() {
        let entries: Vec<LogEntry> = serde_json::from_str(
            r#"[
                {"date": "2024-06-03", "narrative": "Colado de losa", "officer_count": 3,
                 "helper_count": null, "total_personnel": 6, "incident_type": null,
                 "morning_photo_count": 2, "afternoon_photo_count": 1},
                {"date": "2024-06-04"}
            ]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].officer_count, Some(3));
        assert_eq!(entries[0].helper_count, None);
        assert_eq!(entries[0].effective_personnel(), 3);
        assert_eq!(entries[1], LogEntry::new("2024-06-04"));
    }
}
