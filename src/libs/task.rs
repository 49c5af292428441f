//! Board data model: tasks, their labels and public holidays.
//!
//! A [`Task`] lives on exactly one calendar date. Only the year, month and
//! day of that date matter; the board never looks at a time of day.
//!
//! ## Serialization
//!
//! Dates are written as `YYYY-MM-DD`. When reading, the following forms are
//! accepted so that boards exported by older front ends still import:
//!
//! - `2023-02-15`
//! - `2023-02-15T12:00:00.000Z` (RFC 3339; the date as written is used)
//! - `2023-02-15T12:00:00` (naive timestamp)

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Display colors offered when labeling a task.
///
/// Labels store their color as a plain string, so imported boards may carry
/// colors outside this set. These are the choices the board itself hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColor {
    #[default]
    Blue,
    Green,
    Yellow,
    Red,
}

impl LabelColor {
    pub const ALL: [LabelColor; 4] = [LabelColor::Blue, LabelColor::Green, LabelColor::Yellow, LabelColor::Red];

    pub fn hex(&self) -> &'static str {
        match self {
            LabelColor::Blue => "#007bff",
            LabelColor::Green => "#28a745",
            LabelColor::Yellow => "#ffc107",
            LabelColor::Red => "#dc3545",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LabelColor::Blue => "Blue",
            LabelColor::Green => "Green",
            LabelColor::Yellow => "Yellow",
            LabelColor::Red => "Red",
        }
    }

    /// Resolves a color given either by name (`red`) or by hex (`#dc3545`).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(value) || color.hex().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Unique within the owning task only.
    pub id: String,
    /// An empty text marks a label that is still being filled in.
    pub text: String,
    pub color: String,
}

impl Label {
    pub fn new(text: &str, color: LabelColor) -> Self {
        Label {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            color: color.hex().to_string(),
        }
    }

    /// Builds a label from `TEXT` or `TEXT:COLOR`, where COLOR is a color
    /// name or hex code from [`LabelColor`]. A suffix that is not a known
    /// color stays part of the text. Returns `None` for empty text.
    pub fn parse_spec(spec: &str, default_color: LabelColor) -> Option<Self> {
        let (text, color) = match spec.rsplit_once(':') {
            Some((text, color)) => match LabelColor::parse(color) {
                Some(color) => (text, color),
                None => (spec, default_color),
            },
            None => (spec, default_color),
        };
        let text = text.trim();
        (!text.is_empty()).then(|| Label::new(text, color))
    }

    pub fn is_pending(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Task {
    /// Creates a task with a freshly generated id and no labels.
    pub fn new(title: &str, date: NaiveDate) -> Self {
        Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            date,
            labels: Vec::new(),
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    pub name: String,
}

/// Parses any of the accepted date spellings into a calendar date.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}

pub mod calendar_date {
    use super::*;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_calendar_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date: {}", raw)))
    }
}
