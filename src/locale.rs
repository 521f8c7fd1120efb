//! Long-form date rendering for entry headers.
//!
//! The layout engine only sees the [`DateFormatter`] trait, so callers can plug in
//! a full i18n library without touching layout code. [`LongDateFormatter`] covers
//! Spanish and English with built-in name tables.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};

pub trait DateFormatter: Send + Sync {
    fn supports(&self, locale: &str) -> bool;

    /// Renders `date` as a long, human-readable date in `locale`.
    fn format_long(&self, date: NaiveDate, locale: &str) -> Result<String, String>;
}

const ES_WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];
const ES_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];
const EN_WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// `es`: "lunes 3 de junio, 2024". `en`: "Monday, June 3, 2024".
///
/// Region subtags are ignored, so `es-MX` and `en_US` resolve to their language.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongDateFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Spanish,
    English,
}

fn language_of(locale: &str) -> Option<Language> {
    let primary = locale.split(['-', '_']).next().unwrap_or_default();
    match primary.to_ascii_lowercase().as_str() {
        "es" => Some(Language::Spanish),
        "en" => Some(Language::English),
        _ => None,
    }
}

fn weekday_index(day: Weekday) -> usize {
    day.num_days_from_monday() as usize
}

impl DateFormatter for LongDateFormatter {
    fn supports(&self, locale: &str) -> bool {
        language_of(locale).is_some()
    }

    fn format_long(&self, date: NaiveDate, locale: &str) -> Result<String, String> {
        let weekday = weekday_index(date.weekday());
        let month = date.month0() as usize;
        match language_of(locale) {
            Some(Language::Spanish) => Ok(format!(
                "{} {} de {}, {}",
                ES_WEEKDAYS[weekday],
                date.day(),
                ES_MONTHS[month],
                date.year()
            )),
            Some(Language::English) => Ok(format!(
                "{}, {} {}, {}",
                EN_WEEKDAYS[weekday],
                EN_MONTHS[month],
                date.day(),
                date.year()
            )),
            None => Err(format!("unsupported locale '{}'", locale)),
        }
    }
}

/// Parses an entry date: a plain `YYYY-MM-DD` calendar date, or the date part of
/// an RFC 3339 timestamp (`2024-06-03T08:15:00-06:00`) as written, without any
/// time-zone conversion.
pub fn parse_entry_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(timestamp.date());
    }
    Err(format!("expected YYYY-MM-DD or an RFC 3339 timestamp, got '{}'", raw))
}
