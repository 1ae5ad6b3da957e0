pub mod aggregate;
pub mod stats;

pub use aggregate::{count_by, group_by_multiple, top_n, Counts};
pub use stats::{
    build_insights, moving_average, success_rate_by_decade, success_rate_by_year, summarize,
    Insights, Leader, Summary,
};

#[cfg(test)]
pub(crate) mod tests {
    use crate::config::{FieldKeys, Locale};
    use crate::model::{MissionRecord, RawRow};
    use crate::process::derive_record;

    /// A derived record built from the default Kaggle headers.
    pub(crate) fn record(date: &str, status: &str, country: &str, agency: &str) -> MissionRecord {
        let location = format!("Launch Site, {}", country);
        let row = RawRow::new(vec![
            ("Date".to_string(), date.to_string()),
            ("Location".to_string(), location),
            ("Detail".to_string(), format!("{} Rocket | Payload", agency)),
            ("Mission_Status".to_string(), status.to_string()),
            ("Organisation".to_string(), agency.to_string()),
        ]);
        derive_record(&row, &FieldKeys::default(), &Locale::EnUs.calendar_names())
            .expect("test record must derive")
    }
}
