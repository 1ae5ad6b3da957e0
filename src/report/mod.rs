pub mod charts;
pub mod table;

use anyhow::{Context, Result};
use serde::Serialize;
use std::{collections::BTreeMap, fs, path::Path};
use tracing::info;

use crate::analysis::stats::{build_insights, format_rate, summarize, Insights};
use crate::config::Config;
use crate::process::Dataset;

pub use charts::{Report, Series};

/// The four headline figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub total_missions: usize,
    pub time_period: String,
    pub countries: usize,
    /// One decimal with a `%` suffix, e.g. `"89.4%"`.
    pub success_rate: String,
}

/// Everything a renderer needs: summary, the twelve reports, insights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub summary: SummaryCard,
    pub reports: Vec<Report>,
    pub insights: Option<Insights>,
    pub raw_rows: usize,
    pub dropped_rows: BTreeMap<String, usize>,
}

impl Dashboard {
    pub fn report(&self, id: &str) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    /// Pretty-printed JSON dump for an external renderer.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("serializing dashboard")?;
        fs::write(path, json).with_context(|| format!("writing dashboard JSON to {:?}", path))?;
        info!(path = %path.display(), reports = self.reports.len(), "wrote dashboard");
        Ok(())
    }
}

#[tracing::instrument(level = "info", skip_all, fields(records = dataset.len()))]
pub fn build_dashboard(dataset: &Dataset, config: &Config) -> Dashboard {
    let records = dataset.records();
    let names = config.locale.calendar_names();
    let sizes = &config.reports;
    let summary = summarize(records);

    let reports = vec![
        charts::by_country(records, sizes.countries),
        charts::by_organization(records, sizes.organizations),
        charts::yearly_totals(records),
        charts::space_race(records, &config.major_powers),
        charts::by_month(records, &names),
        charts::by_weekday(records, &names),
        charts::decade_success_rate(records),
        charts::status_breakdown(records, sizes.statuses),
        charts::success_trend(records),
        charts::top_rockets(records, sizes.rockets),
        charts::top_rocket_families(records, sizes.rocket_families),
        charts::mission_types(records, sizes.mission_types),
    ];

    Dashboard {
        summary: SummaryCard {
            total_missions: summary.total,
            time_period: summary.year_range_label(),
            countries: summary.countries,
            success_rate: format!("{}%", format_rate(summary.success_rate, 1)),
        },
        reports,
        insights: build_insights(records),
        raw_rows: dataset.raw_rows,
        dropped_rows: dataset
            .dropped
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect(),
    }
}
