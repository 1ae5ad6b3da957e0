// src/report/charts.rs

use serde::Serialize;
use std::collections::BTreeSet;

use crate::analysis::aggregate::{count_by, group_by_multiple, top_n};
use crate::analysis::stats::{
    moving_average, round_to, success_rate_by_decade, success_rate_by_year, TREND_WINDOW_RADIUS,
};
use crate::config::CalendarNames;
use crate::model::{Field, MissionRecord};

/// One named numeric series aligned with its report's labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

/// Labels plus one or more series sharing that label axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl Report {
    fn single(id: &str, title: &str, series_label: &str, points: Vec<(String, f64)>) -> Self {
        let (labels, values) = points.into_iter().unzip();
        Self {
            id: id.to_string(),
            title: title.to_string(),
            labels,
            series: vec![Series {
                label: series_label.to_string(),
                values,
            }],
        }
    }

    /// Values of the first series, the only one for most reports.
    pub fn values(&self) -> &[f64] {
        self.series.first().map(|s| s.values.as_slice()).unwrap_or(&[])
    }
}

fn top_report(
    records: &[MissionRecord],
    field: Field,
    n: usize,
    id: &str,
    title: &str,
    series_label: &str,
) -> Report {
    let points = top_n(&count_by(records, field), n)
        .into_iter()
        .map(|(label, count)| (label, count as f64))
        .collect();
    Report::single(id, title, series_label, points)
}

fn sorted_years(records: &[MissionRecord]) -> Vec<i32> {
    records
        .iter()
        .map(|r| r.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn by_country(records: &[MissionRecord], n: usize) -> Report {
    top_report(records, Field::CountryFull, n, "by_country", "Missions by Country", "Missions")
}

pub fn by_organization(records: &[MissionRecord], n: usize) -> Report {
    top_report(
        records,
        Field::Agency,
        n,
        "by_organization",
        "Missions by Organization",
        "Missions",
    )
}

pub fn yearly_totals(records: &[MissionRecord]) -> Report {
    let counts = count_by(records, Field::Year);
    let points = sorted_years(records)
        .into_iter()
        .map(|y| {
            let label = y.to_string();
            let n = counts.get(&label) as f64;
            (label, n)
        })
        .collect();
    Report::single("yearly_totals", "Space Missions Over Time", "Launches", points)
}

/// Launches per year for each of `powers`, zero-filled across every year.
pub fn space_race(records: &[MissionRecord], powers: &[String]) -> Report {
    let years = sorted_years(records);
    let groups = group_by_multiple(
        records.iter().filter(|r| powers.contains(&r.country_full)),
        &[Field::Year, Field::CountryFull],
    );

    let series = powers
        .iter()
        .map(|country| Series {
            label: country.clone(),
            values: years
                .iter()
                .map(|y| groups.get(&format!("{}|{}", y, country)) as f64)
                .collect(),
        })
        .collect();

    Report {
        id: "space_race".to_string(),
        title: powers.join(" vs "),
        labels: years.iter().map(|y| y.to_string()).collect(),
        series,
    }
}

pub fn by_month(records: &[MissionRecord], names: &CalendarNames) -> Report {
    let counts = count_by(records, Field::MonthName);
    let points = names
        .months
        .iter()
        .map(|m| (m.clone(), counts.get(m) as f64))
        .collect();
    Report::single("by_month", "Launches by Month", "Launches", points)
}

pub fn by_weekday(records: &[MissionRecord], names: &CalendarNames) -> Report {
    let counts = count_by(records, Field::DayOfWeek);
    let points = names
        .weekdays
        .iter()
        .map(|d| (d.clone(), counts.get(d) as f64))
        .collect();
    Report::single("by_weekday", "Launches by Day of Week", "Launches", points)
}

pub fn decade_success_rate(records: &[MissionRecord]) -> Report {
    let points = success_rate_by_decade(records)
        .into_iter()
        .map(|(decade, rate)| (format!("{}s", decade), round_to(rate, 1)))
        .collect();
    Report::single(
        "decade_success_rate",
        "Success Rate by Decade",
        "Success Rate (%)",
        points,
    )
}

pub fn status_breakdown(records: &[MissionRecord], n: usize) -> Report {
    top_report(records, Field::Status, n, "status_breakdown", "Mission Status", "Missions")
}

/// Yearly success rate (one decimal) and its clamped 5-year moving average.
pub fn success_trend(records: &[MissionRecord]) -> Report {
    let (labels, rates): (Vec<String>, Vec<f64>) = success_rate_by_year(records)
        .into_iter()
        .map(|(year, rate)| (year.to_string(), round_to(rate, 1)))
        .unzip();
    let smoothed = moving_average(&rates, TREND_WINDOW_RADIUS)
        .into_iter()
        .map(|v| round_to(v, 1))
        .collect();

    Report {
        id: "success_trend".to_string(),
        title: "Mission Success Rate Trend".to_string(),
        labels,
        series: vec![
            Series {
                label: "Yearly Success Rate".to_string(),
                values: rates,
            },
            Series {
                label: "5-Year Moving Average".to_string(),
                values: smoothed,
            },
        ],
    }
}

pub fn top_rockets(records: &[MissionRecord], n: usize) -> Report {
    top_report(records, Field::Rocket, n, "top_rockets", "Most Used Rockets", "Launches")
}

pub fn top_rocket_families(records: &[MissionRecord], n: usize) -> Report {
    top_report(
        records,
        Field::RocketFamily,
        n,
        "top_rocket_families",
        "Top Rocket Families",
        "Launches",
    )
}

/// Mission type is never populated, so this collapses to a single "Unknown" bar.
pub fn mission_types(records: &[MissionRecord], n: usize) -> Report {
    top_report(records, Field::MissionType, n, "mission_types", "Mission Types", "Missions")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tests::record;
    use crate::config::Locale;

    fn sample() -> Vec<MissionRecord> {
        vec![
            record("1957-10-04", "Success", "Russia", "RVSN USSR"),
            record("1958-02-01", "Success", "United States", "US Army"),
            record("1958-12-06", "Failure", "United States", "NASA"),
            record("1960-08-19", "Success", "Russia", "RVSN USSR"),
            record("1960-10-24", "Failure", "Russia", "RVSN USSR"),
            record("1962-02-20", "Success", "United States", "NASA"),
        ]
    }

    #[test]
    fn country_report_is_top_n() {
        let report = by_country(&sample(), 1);
        assert_eq!(report.labels, vec!["Russia"]);
        assert_eq!(report.values(), &[3.0]);
    }

    #[test]
    fn yearly_totals_ascend() {
        let report = yearly_totals(&sample());
        assert_eq!(report.labels, vec!["1957", "1958", "1960", "1962"]);
        assert_eq!(report.values(), &[1.0, 2.0, 2.0, 1.0]);
    }

    #[test]
    fn space_race_zero_fills_missing_years() {
        let powers: Vec<String> = ["United States", "Russia", "China"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let report = space_race(&sample(), &powers);

        assert_eq!(report.title, "United States vs Russia vs China");
        assert_eq!(report.labels.len(), 4);
        assert_eq!(report.series.len(), 3);
        assert_eq!(report.series[0].values, vec![0.0, 2.0, 0.0, 1.0]);
        assert_eq!(report.series[1].values, vec![1.0, 0.0, 2.0, 0.0]);
        assert_eq!(report.series[2].values, vec![0.0; 4]);
    }

    #[test]
    fn month_and_weekday_reports_cover_the_calendar() {
        let names = Locale::EnUs.calendar_names();
        let months = by_month(&sample(), &names);
        assert_eq!(months.labels.len(), 12);
        assert_eq!(months.labels[9], "October");
        assert_eq!(months.values()[9], 2.0);
        assert_eq!(months.values().iter().sum::<f64>(), 6.0);

        let days = by_weekday(&sample(), &names);
        assert_eq!(days.labels[0], "Monday");
        assert_eq!(days.values().iter().sum::<f64>(), 6.0);
    }

    #[test]
    fn decade_labels_have_suffix() {
        let report = decade_success_rate(&sample());
        assert_eq!(report.labels, vec!["1950s", "1960s"]);
        assert_eq!(report.values(), &[66.7, 66.7]);
    }

    #[test]
    fn trend_has_rate_and_average() {
        let report = success_trend(&sample());
        assert_eq!(report.series.len(), 2);
        assert_eq!(report.series[0].values, vec![100.0, 50.0, 50.0, 100.0]);
        assert_eq!(report.series[1].values[0], round_to(200.0 / 3.0, 1));
        assert_eq!(report.series[1].values.len(), 4);
    }

    #[test]
    fn mission_types_collapse_to_unknown() {
        let report = mission_types(&sample(), 10);
        assert_eq!(report.labels, vec!["Unknown"]);
        assert_eq!(report.values(), &[6.0]);
    }

    #[test]
    fn rocket_reports() {
        let families = top_rocket_families(&sample(), 12);
        assert_eq!(families.labels[0], "RVSN USSR Rocket");
        assert_eq!(families.values()[0], 3.0);

        let rockets = top_rockets(&sample(), 2);
        assert_eq!(rockets.labels.len(), 2);
        assert_eq!(rockets.labels[0], "RVSN USSR Rocket | Payload");
    }
}
