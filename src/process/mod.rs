// src/process/mod.rs
pub mod date_parser;
pub mod derive;
pub mod reader;

use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::config::Config;
use crate::model::{MissionRecord, RawRow};

pub use derive::{derive_record, SkipReason};
pub use reader::parse_csv;

/// The processed record set for one load. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<MissionRecord>,
    /// Number of data rows the reader produced.
    pub raw_rows: usize,
    /// Dropped rows keyed by `SkipReason::kind`.
    pub dropped: BTreeMap<&'static str, usize>,
}

impl Dataset {
    pub fn records(&self) -> &[MissionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn dropped_total(&self) -> usize {
        self.dropped.values().sum()
    }
}

/// Derive every row, keeping the ones that succeed and tallying the rest.
pub fn process_rows(rows: &[RawRow], config: &Config) -> Dataset {
    let names = config.locale.calendar_names();
    let mut records = Vec::with_capacity(rows.len());
    let mut dropped: BTreeMap<&'static str, usize> = BTreeMap::new();

    for (idx, row) in rows.iter().enumerate() {
        match derive_record(row, &config.fields, &names) {
            Ok(record) => records.push(record),
            Err(reason) => {
                debug!(row = idx + 2, %reason, "skipping row");
                *dropped.entry(reason.kind()).or_default() += 1;
            }
        }
    }

    Dataset {
        records,
        raw_rows: rows.len(),
        dropped,
    }
}

/// Parse CSV text and derive the dataset in one pass.
#[tracing::instrument(level = "info", skip_all, fields(bytes = text.len()))]
pub fn process_csv(text: &str, config: &Config) -> Dataset {
    let rows = parse_csv(text);
    let dataset = process_rows(&rows, config);
    info!(
        raw_rows = dataset.raw_rows,
        records = dataset.len(),
        dropped = dataset.dropped_total(),
        "processed launch records"
    );
    dataset
}
