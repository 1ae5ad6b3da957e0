// src/report/table.rs

use prettytable::{format, Cell, Row, Table};

use super::{Dashboard, Report};

fn boxed(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(Row::new(
        headers
            .iter()
            .map(|h| Cell::new(h).style_spec("bFg"))
            .collect(),
    ));
    table
}

fn kv(table: &mut Table, key: &str, value: String) {
    table.add_row(Row::new(vec![Cell::new(key), Cell::new(&value).style_spec("r")]));
}

/// Headline figures plus the dropped-row tally.
pub fn summary_table(dashboard: &Dashboard) -> Table {
    let s = &dashboard.summary;
    let mut table = boxed(&["Statistic", "Value"]);
    kv(&mut table, "Total Missions", s.total_missions.to_string());
    kv(&mut table, "Time Period", s.time_period.clone());
    kv(&mut table, "Countries", s.countries.to_string());
    kv(&mut table, "Success Rate", s.success_rate.clone());
    kv(&mut table, "Rows Read", dashboard.raw_rows.to_string());
    for (reason, n) in &dashboard.dropped_rows {
        kv(&mut table, &format!("Dropped ({})", reason), n.to_string());
    }
    table
}

/// The insights payload as label/value rows. `None` when there is nothing to rank.
pub fn insights_table(dashboard: &Dashboard) -> Option<Table> {
    let i = dashboard.insights.as_ref()?;
    let mut table = boxed(&["Insight", "Value"]);
    kv(&mut table, "Organizations", i.agencies.to_string());
    kv(
        &mut table,
        "Leading Country",
        format!("{} ({} missions)", i.top_country.label, i.top_country.count),
    );
    kv(
        &mut table,
        "Most Active Organization",
        format!("{} ({} missions)", i.top_agency.label, i.top_agency.count),
    );
    kv(
        &mut table,
        "Most Used Rocket",
        format!("{} ({} launches)", i.top_rocket.label, i.top_rocket.count),
    );
    kv(&mut table, "Overall Success Rate", format!("{}%", i.success_rate_label));
    kv(&mut table, "Successful Missions", i.successful.to_string());
    kv(&mut table, "Failed Missions", i.failed.to_string());
    kv(
        &mut table,
        "Peak Launch Year",
        format!("{} ({} missions)", i.peak_year.label, i.peak_year.count),
    );
    kv(
        &mut table,
        "Most Popular Launch Month",
        format!("{} ({} launches)", i.top_month.label, i.top_month.count),
    );
    kv(
        &mut table,
        "Busiest Day of Week",
        format!("{} ({} launches)", i.top_weekday.label, i.top_weekday.count),
    );
    Some(table)
}

/// One report as a label column followed by one column per series.
pub fn report_table(report: &Report) -> Table {
    let mut headers = vec![report.title.as_str()];
    headers.extend(report.series.iter().map(|s| s.label.as_str()));
    let mut table = boxed(&headers);

    for (idx, label) in report.labels.iter().enumerate() {
        let mut cells = vec![Cell::new(label)];
        for series in &report.series {
            let value = series.values.get(idx).copied().unwrap_or_default();
            cells.push(Cell::new(&value.to_string()).style_spec("r"));
        }
        table.add_row(Row::new(cells));
    }
    table
}
