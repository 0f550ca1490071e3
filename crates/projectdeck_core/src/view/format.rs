//! Display-only derivations for project cards.
//!
//! Nothing computed here is ever stored.

use crate::model::project::Priority;
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Characters kept in a description preview.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;
pub const NO_DESCRIPTION: &str = "No description";
const ELLIPSIS: &str = "...";

/// Color coding for priority badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Info,
    WarningLow,
    WarningHigh,
    Critical,
}

impl BadgeTone {
    pub fn for_priority(priority: Priority) -> Self {
        match priority {
            Priority::Low => Self::Info,
            Priority::Medium => Self::WarningLow,
            Priority::High => Self::WarningHigh,
            Priority::Urgent => Self::Critical,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::WarningLow => "warning-low",
            Self::WarningHigh => "warning-high",
            Self::Critical => "critical",
        }
    }
}

/// First 100 characters of a description, with `...` when cut.
///
/// Absent or empty descriptions yield the placeholder.
pub fn preview_description(description: Option<&str>) -> String {
    let Some(text) = description.filter(|text| !text.is_empty()) else {
        return NO_DESCRIPTION.to_string();
    };

    let mut preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    if text.chars().count() > DESCRIPTION_PREVIEW_CHARS {
        preview.push_str(ELLIPSIS);
    }
    preview
}

/// Uppercases the first character only.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Long calendar date, e.g. `October 17th, 2026`.
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// Short numeric date, e.g. `10/17/2026`.
pub fn format_short_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%m/%d/%Y").to_string()
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
