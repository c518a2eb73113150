//! Core data models for the holiday service
//!
//! This module contains the normalized holiday representation served to the
//! calendar client, along with the list operations used when merging holidays
//! from several countries.

pub mod holidays;

pub use holidays::{HolidayClient, HolidayClientError};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Discriminant separating holidays from user tasks on the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    Holiday,
}

/// One public holiday occurrence in one country
///
/// Serialized with camelCase keys; the kind is emitted as `"type": "holiday"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    /// Stable identifier derived from date, country and holiday name
    pub id: String,
    /// Calendar date of the holiday
    pub date: NaiveDate,
    /// Display name with the country code appended, e.g. "Christmas Day (GB)"
    pub title: String,
    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,
    /// Always `HolidayKind::Holiday`
    #[serde(rename = "type")]
    pub kind: HolidayKind,
}

impl Holiday {
    /// Builds a normalized holiday
    ///
    /// # Arguments
    /// * `date` - Date of the holiday
    /// * `country_code` - Country the holiday belongs to
    /// * `name` - English name, used for the id and as the title fallback
    /// * `local_name` - Name in the local language, preferred for the title when non-blank
    pub fn new(date: NaiveDate, country_code: &str, name: &str, local_name: Option<&str>) -> Self {
        let display_name = local_name
            .map(str::trim)
            .filter(|local| !local.is_empty())
            .unwrap_or(name);

        Self {
            id: format!("holiday-{}-{}-{}", date, country_code, slugify(name)),
            date,
            title: format!("{} ({})", display_name, country_code),
            country_code: country_code.to_string(),
            kind: HolidayKind::Holiday,
        }
    }
}

/// Lowercases `name` and replaces each run of whitespace with a single hyphen
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Validates an ISO 3166-1 alpha-2 code and returns it uppercased
///
/// Returns `None` unless `code` is exactly two ASCII letters.
pub fn normalize_country_code(code: &str) -> Option<String> {
    let code = code.trim();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(code.to_ascii_uppercase())
    } else {
        None
    }
}

/// Sorts by date ascending, then by title
///
/// Titles compare by Unicode code point (`str::cmp` on UTF-8 bytes), so the
/// order does not depend on locale.
pub fn sort_holidays(holidays: &mut [Holiday]) {
    holidays.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.title.cmp(&b.title)));
}

/// Keeps only holidays falling in `month` (1 = January)
pub fn retain_month(holidays: &mut Vec<Holiday>, month: u32) {
    holidays.retain(|holiday| holiday.date.month() == month);
}

/// Drops every holiday whose id was already seen, keeping first occurrences
pub fn dedup_by_id(holidays: &mut Vec<Holiday>) {
    let mut seen = HashSet::new();
    holidays.retain(|holiday| seen.insert(holiday.id.clone()));
}
