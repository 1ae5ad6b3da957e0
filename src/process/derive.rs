// src/process/derive.rs

use chrono::Datelike;
use thiserror::Error;

use crate::config::{CalendarNames, FieldKeys};
use crate::model::{MissionRecord, RawRow};
use crate::process::date_parser::parse_launch_date;

/// Statuses counted as a successful launch. "Partial Failure" is included on
/// purpose; existing reports depend on it.
pub const SUCCESS_STATUSES: [&str; 2] = ["Success", "Partial Failure"];

/// Why a row did not become a `MissionRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("no date in any of the columns {0:?}")]
    MissingDate(Vec<String>),
    #[error("unparseable date `{0}`")]
    InvalidDate(String),
}

impl SkipReason {
    /// Stable label used when tallying dropped rows.
    pub fn kind(&self) -> &'static str {
        match self {
            SkipReason::MissingDate(_) => "missing_date",
            SkipReason::InvalidDate(_) => "invalid_date",
        }
    }
}

pub fn is_success(status: &str) -> bool {
    SUCCESS_STATUSES.contains(&status)
}

/// Trailing comma-separated segment of a location, trimmed. An empty trailing
/// segment (e.g. `"Site,"`) yields an empty country.
pub fn extract_country(location: &str) -> &str {
    location.rsplit(',').next().unwrap_or("").trim()
}

/// Everything before the first `|`, trimmed.
pub fn extract_rocket_family(detail: &str) -> &str {
    detail.split('|').next().unwrap_or("").trim()
}

/// Turn one raw row into a record, or say why it was dropped.
pub fn derive_record(
    row: &RawRow,
    keys: &FieldKeys,
    names: &CalendarNames,
) -> Result<MissionRecord, SkipReason> {
    let date_str = row
        .first_non_empty(&keys.date)
        .ok_or_else(|| SkipReason::MissingDate(keys.date.clone()))?;
    let date =
        parse_launch_date(date_str).ok_or_else(|| SkipReason::InvalidDate(date_str.to_string()))?;

    let location = row.first_non_empty(&keys.location).unwrap_or("");
    let detail = row.first_non_empty(&keys.detail).unwrap_or("");
    let country = extract_country(location).to_string();
    let status = row
        .first_non_empty(&keys.status)
        .unwrap_or("Unknown")
        .to_string();
    let year = date.year();

    Ok(MissionRecord {
        id: row.first_non_empty(&keys.id).map(str::to_string),
        name: detail.to_string(),
        rocket: detail.to_string(),
        rocket_family: extract_rocket_family(detail).to_string(),
        location: location.to_string(),
        date,
        year,
        month: date.month0(),
        month_name: names.month_name(date).to_string(),
        day_of_week: names.weekday_name(date).to_string(),
        decade: year.div_euclid(10) * 10,
        success: is_success(&status),
        status,
        country_full: country.clone(),
        country,
        agency: row
            .first_non_empty(&keys.organisation)
            .unwrap_or("Unknown")
            .to_string(),
        mission_type: None,
        mission_orbit: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use chrono::NaiveDate;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        RawRow::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn derive(pairs: &[(&str, &str)]) -> Result<MissionRecord, SkipReason> {
        derive_record(
            &row(pairs),
            &FieldKeys::default(),
            &Locale::EnUs.calendar_names(),
        )
    }

    #[test]
    fn derives_full_kaggle_row() {
        let rec = derive(&[
            ("Unnamed: 0", "0"),
            ("Organisation", "SpaceX"),
            ("Location", "LC-39A, Kennedy Space Center, Florida, USA"),
            ("Date", "Fri Aug 07, 2020 05:12 UTC"),
            ("Detail", "Falcon 9 Block 5 | Starlink V1 L9 & BlackSky"),
            ("Rocket_Status", "StatusActive"),
            ("Mission_Status", "Success"),
        ])
        .unwrap();

        assert_eq!(rec.id.as_deref(), Some("0"));
        assert_eq!(rec.agency, "SpaceX");
        assert_eq!(rec.country, "USA");
        assert_eq!(rec.country_full, "USA");
        assert_eq!(rec.rocket_family, "Falcon 9 Block 5");
        assert_eq!(rec.name, rec.rocket);
        assert_eq!(rec.date, NaiveDate::from_ymd_opt(2020, 8, 7).unwrap());
        assert_eq!(rec.year, 2020);
        assert_eq!(rec.month, 7);
        assert_eq!(rec.month_name, "August");
        assert_eq!(rec.day_of_week, "Friday");
        assert_eq!(rec.decade, 2020);
        assert!(rec.success);
        assert_eq!(rec.mission_type, None);
        assert_eq!(rec.mission_orbit, None);
    }

    #[test]
    fn falls_back_to_alternate_headers() {
        let rec = derive(&[
            ("Date", ""),
            ("date", "1965-03-18"),
            ("location_name", "Baikonur Cosmodrome, Kazakhstan"),
            ("rocket", "Voskhod | Voskhod 2"),
            ("status", "Success"),
            ("agency", "RVSN USSR"),
            ("id", "m-42"),
        ])
        .unwrap();

        assert_eq!(rec.id.as_deref(), Some("m-42"));
        assert_eq!(rec.country, "Kazakhstan");
        assert_eq!(rec.rocket_family, "Voskhod");
        assert_eq!(rec.agency, "RVSN USSR");
        assert_eq!(rec.decade, 1960);
    }

    #[test]
    fn defaults_for_absent_fields() {
        let rec = derive(&[("Date", "2001-09-11")]).unwrap();
        assert_eq!(rec.id, None);
        assert_eq!(rec.status, "Unknown");
        assert!(!rec.success);
        assert_eq!(rec.agency, "Unknown");
        assert_eq!(rec.country, "");
        assert_eq!(rec.rocket, "");
        assert_eq!(rec.rocket_family, "");
    }

    #[test]
    fn partial_failure_counts_as_success() {
        let rec = derive(&[("Date", "1999-04-27"), ("Mission_Status", "Partial Failure")]).unwrap();
        assert!(rec.success);

        for status in ["Failure", "Prelaunch Failure", "success", "Success "] {
            assert!(!is_success(status), "{status}");
        }
    }

    #[test]
    fn trailing_comma_gives_empty_country() {
        assert_eq!(extract_country("Site 1, Plesetsk,"), "");
        assert_eq!(extract_country("Tanegashima, Japan "), "Japan");
        assert_eq!(extract_country("Shahrud Missile Test Site"), "Shahrud Missile Test Site");
    }

    #[test]
    fn family_without_pipe_is_whole_detail() {
        assert_eq!(extract_rocket_family(" Vanguard "), "Vanguard");
        assert_eq!(extract_rocket_family("Long March 2D | Gaofen"), "Long March 2D");
        assert_eq!(extract_rocket_family("|x"), "");
    }

    #[test]
    fn rows_without_usable_date_are_skipped() {
        let missing = derive(&[("Location", "Kourou, France")]).unwrap_err();
        assert_eq!(missing.kind(), "missing_date");

        let invalid = derive(&[("Date", "sometime in 1961")]).unwrap_err();
        assert_eq!(invalid, SkipReason::InvalidDate("sometime in 1961".into()));
        assert_eq!(invalid.kind(), "invalid_date");
    }

    #[test]
    fn decade_is_year_floored_to_ten() {
        for (date, decade) in [("1957-10-04", 1950), ("1960-01-01", 1960), ("2019-12-31", 2010)] {
            let rec = derive(&[("Date", date)]).unwrap();
            assert_eq!(rec.decade, decade);
            assert_eq!(rec.decade % 10, 0);
            assert_eq!(rec.decade, (rec.year / 10) * 10);
        }
    }
}
