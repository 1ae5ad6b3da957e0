// src/analysis/stats.rs

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::analysis::aggregate::{count_by, top_n};
use crate::model::{Field, MissionRecord};

/// Half-width of the centered window used to smooth yearly success rates.
pub const TREND_WINDOW_RADIUS: usize = 2;

/// Headline numbers for the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    /// `(min, max)` launch year; `None` for an empty dataset.
    pub year_range: Option<(i32, i32)>,
    pub countries: usize,
    pub agencies: usize,
    pub successful: usize,
    pub failed: usize,
    /// Percentage in `0.0..=100.0`, unrounded. Zero for an empty dataset.
    pub success_rate: f64,
}

impl Summary {
    pub fn year_range_label(&self) -> String {
        match self.year_range {
            Some((min, max)) => format!("{} - {}", min, max),
            None => "n/a".to_string(),
        }
    }
}

pub fn summarize(records: &[MissionRecord]) -> Summary {
    let total = records.len();
    let successful = records.iter().filter(|r| r.success).count();
    let year_range = records
        .iter()
        .map(|r| r.year)
        .fold(None, |acc: Option<(i32, i32)>, y| match acc {
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            None => Some((y, y)),
        });

    Summary {
        total,
        year_range,
        countries: distinct(records, |r| r.country_full.as_str()),
        agencies: distinct(records, |r| r.agency.as_str()),
        successful,
        failed: total - successful,
        success_rate: percent(successful, total),
    }
}

fn distinct<'a, F>(records: &'a [MissionRecord], key: F) -> usize
where
    F: Fn(&'a MissionRecord) -> &'a str,
{
    records.iter().map(key).collect::<HashSet<_>>().len()
}

/// `part / whole * 100`, or zero when `whole` is zero.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Fixed-decimal rendering, e.g. `format_rate(92.345, 1) == "92.3"`.
pub fn format_rate(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Success rate per bucket, ascending by bucket key. Buckets come from the
/// records themselves so no bucket has a zero total.
pub fn success_rate_by<F>(records: &[MissionRecord], bucket: F) -> Vec<(i32, f64)>
where
    F: Fn(&MissionRecord) -> i32,
{
    let mut tally: BTreeMap<i32, (usize, usize)> = BTreeMap::new();
    for record in records {
        let entry = tally.entry(bucket(record)).or_default();
        entry.1 += 1;
        if record.success {
            entry.0 += 1;
        }
    }
    tally
        .into_iter()
        .map(|(key, (ok, total))| (key, percent(ok, total)))
        .collect()
}

pub fn success_rate_by_decade(records: &[MissionRecord]) -> Vec<(i32, f64)> {
    success_rate_by(records, |r| r.decade)
}

pub fn success_rate_by_year(records: &[MissionRecord]) -> Vec<(i32, f64)> {
    success_rate_by(records, |r| r.year)
}

/// Centered moving average. Each point averages `index - radius ..= index + radius`,
/// clipped to the series bounds, so edge points use narrower windows.
pub fn moving_average(series: &[f64], radius: usize) -> Vec<f64> {
    (0..series.len())
        .map(|i| {
            let start = i.saturating_sub(radius);
            let end = (i + radius + 1).min(series.len());
            let window = &series[start..end];
            window.iter().sum::<f64>() / window.len() as f64
        })
        .collect()
}

/// A top-1 label with its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leader {
    pub label: String,
    pub count: usize,
}

pub fn leader(records: &[MissionRecord], field: Field) -> Option<Leader> {
    top_n(&count_by(records, field), 1)
        .into_iter()
        .next()
        .map(|(label, count)| Leader { label, count })
}

/// Structured payload behind the insights text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub total: usize,
    pub time_period: String,
    pub countries: usize,
    pub agencies: usize,
    pub top_country: Leader,
    pub top_agency: Leader,
    pub top_rocket: Leader,
    pub success_rate: f64,
    /// `success_rate` at two decimals.
    pub success_rate_label: String,
    pub successful: usize,
    pub failed: usize,
    pub peak_year: Leader,
    pub top_month: Leader,
    pub top_weekday: Leader,
}

/// `None` for an empty dataset, where no leaders exist.
pub fn build_insights(records: &[MissionRecord]) -> Option<Insights> {
    let summary = summarize(records);
    Some(Insights {
        top_country: leader(records, Field::CountryFull)?,
        top_agency: leader(records, Field::Agency)?,
        top_rocket: leader(records, Field::Rocket)?,
        peak_year: leader(records, Field::Year)?,
        top_month: leader(records, Field::MonthName)?,
        top_weekday: leader(records, Field::DayOfWeek)?,
        total: summary.total,
        time_period: summary.year_range_label(),
        countries: summary.countries,
        agencies: summary.agencies,
        success_rate: summary.success_rate,
        success_rate_label: format_rate(summary.success_rate, 2),
        successful: summary.successful,
        failed: summary.failed,
    })
}
