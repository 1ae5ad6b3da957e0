// src/config.rs

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::Path, str::FromStr};
use tracing::debug;

/// Runtime configuration. Every section has a default, so an empty YAML
/// document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fields: FieldKeys,
    pub locale: Locale,
    pub reports: ReportSizes,
    /// Countries compared year by year in the space-race report.
    pub major_powers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fields: FieldKeys::default(),
            locale: Locale::default(),
            reports: ReportSizes::default(),
            major_powers: vec![
                "United States".to_string(),
                "Russia".to_string(),
                "China".to_string(),
            ],
        }
    }
}

impl Config {
    /// Read a YAML config from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {:?}", path))?;
        let config: Config = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config file {:?}", path))?;
        debug!(?path, locale = %config.locale, "loaded config");
        Ok(config)
    }
}

/// Candidate CSV headers for each logical input column, tried in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldKeys {
    pub id: Vec<String>,
    pub date: Vec<String>,
    pub location: Vec<String>,
    pub detail: Vec<String>,
    pub status: Vec<String>,
    pub organisation: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for FieldKeys {
    fn default() -> Self {
        Self {
            id: keys(&["Unnamed: 0", "id"]),
            date: keys(&["Date", "date"]),
            location: keys(&["Location", "location_name"]),
            detail: keys(&["Detail", "rocket"]),
            status: keys(&["Mission_Status", "status"]),
            organisation: keys(&["Organisation", "agency"]),
        }
    }
}

/// How many entries each top-N report keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSizes {
    pub countries: usize,
    pub organizations: usize,
    pub statuses: usize,
    pub rockets: usize,
    pub rocket_families: usize,
    pub mission_types: usize,
}

impl Default for ReportSizes {
    fn default() -> Self {
        Self {
            countries: 15,
            organizations: 15,
            statuses: 8,
            rockets: 15,
            rocket_families: 12,
            mission_types: 10,
        }
    }
}

/// Locale used for month and weekday names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "en_GB")]
    EnGb,
    #[serde(rename = "fr_FR")]
    FrFr,
    #[serde(rename = "de_DE")]
    DeDe,
    #[serde(rename = "es_ES")]
    EsEs,
}

impl Locale {
    pub fn as_str(&self) -> &str {
        match self {
            Locale::EnUs => "en_US",
            Locale::EnGb => "en_GB",
            Locale::FrFr => "fr_FR",
            Locale::DeDe => "de_DE",
            Locale::EsEs => "es_ES",
        }
    }

    fn chrono(&self) -> chrono::Locale {
        match self {
            Locale::EnUs => chrono::Locale::en_US,
            Locale::EnGb => chrono::Locale::en_GB,
            Locale::FrFr => chrono::Locale::fr_FR,
            Locale::DeDe => chrono::Locale::de_DE,
            Locale::EsEs => chrono::Locale::es_ES,
        }
    }

    /// Long month and weekday names for this locale.
    pub fn calendar_names(&self) -> CalendarNames {
        let locale = self.chrono();
        let format = |date: NaiveDate, spec: &str| {
            DateTime::<Utc>::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
                .format_localized(spec, locale)
                .to_string()
        };

        // 2024-01-01 is a Monday; walking January from there yields Monday..Sunday.
        let months = (1..=12)
            .filter_map(|m| NaiveDate::from_ymd_opt(2024, m, 1))
            .map(|d| format(d, "%B"))
            .collect();
        let weekdays = (1..=7)
            .filter_map(|d| NaiveDate::from_ymd_opt(2024, 1, d))
            .map(|d| format(d, "%A"))
            .collect();

        CalendarNames { months, weekdays }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().replace('-', "_").to_lowercase().as_str() {
            "en_us" | "en" => Ok(Locale::EnUs),
            "en_gb" => Ok(Locale::EnGb),
            "fr_fr" | "fr" => Ok(Locale::FrFr),
            "de_de" | "de" => Ok(Locale::DeDe),
            "es_es" | "es" => Ok(Locale::EsEs),
            other => Err(anyhow!("unsupported locale `{}`", other)),
        }
    }
}

/// Precomputed month names (January first) and weekday names (Monday first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarNames {
    pub months: Vec<String>,
    pub weekdays: Vec<String>,
}

impl CalendarNames {
    pub fn month_name(&self, date: NaiveDate) -> &str {
        &self.months[date.month0() as usize]
    }

    pub fn weekday_name(&self, date: NaiveDate) -> &str {
        &self.weekdays[date.weekday().num_days_from_monday() as usize]
    }
}
