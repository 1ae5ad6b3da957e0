// src/analysis/aggregate.rs

use std::collections::HashMap;

use crate::model::{Field, MissionRecord};

/// Label counts that remember the order labels were first seen in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counts {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Counts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), 1));
            }
        }
    }

    /// Count for `label`, zero if never seen.
    pub fn get(&self, label: &str) -> usize {
        self.index
            .get(label)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(label, n)| (label.as_str(), *n))
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }
}

/// Count records per value of `field`. Falsy values are counted as "Unknown".
pub fn count_by(records: &[MissionRecord], field: Field) -> Counts {
    let mut counts = Counts::new();
    for record in records {
        let value = field.value(record);
        if value.is_falsy() {
            counts.increment("Unknown");
        } else {
            counts.increment(&value.to_string());
        }
    }
    counts
}

/// The `n` highest counts, descending. Ties keep first-seen order.
pub fn top_n(counts: &Counts, n: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts
        .iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

/// Count records per composite key: the `fields` values joined with `|`.
pub fn group_by_multiple<'a, I>(records: I, fields: &[Field]) -> Counts
where
    I: IntoIterator<Item = &'a MissionRecord>,
{
    let mut counts = Counts::new();
    for record in records {
        let key = fields
            .iter()
            .map(|f| f.value(record).to_string())
            .collect::<Vec<_>>()
            .join("|");
        counts.increment(&key);
    }
    counts
}
