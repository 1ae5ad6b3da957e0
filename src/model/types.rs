// src/model/types.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One CSV line as an ordered list of `(header, value)` pairs.
///
/// Headers and values are already trimmed. When a header name appears twice
/// the later column wins on lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<(String, String)>,
}

impl RawRow {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Value stored under `header`, if the header exists.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value.as_str())
    }

    /// First non-empty value among `candidates`, tried in order.
    pub fn first_non_empty<S: AsRef<str>>(&self, candidates: &[S]) -> Option<&str> {
        candidates
            .iter()
            .filter_map(|key| self.get(key.as_ref()))
            .find(|value| !value.is_empty())
    }
}

/// A fully derived launch event. Built once by the deriver, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionRecord {
    pub id: Option<String>,
    pub name: String,
    pub rocket: String,
    /// `rocket` up to the first `|`.
    pub rocket_family: String,
    pub location: String,
    pub date: NaiveDate,
    pub year: i32,
    /// 0-based month (January = 0).
    pub month: u32,
    pub month_name: String,
    pub day_of_week: String,
    pub decade: i32,
    pub status: String,
    /// `true` for "Success" and also for "Partial Failure".
    pub success: bool,
    pub country: String,
    pub country_full: String,
    pub agency: String,
    pub mission_type: Option<String>,
    pub mission_orbit: Option<String>,
}
