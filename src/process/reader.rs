// src/process/reader.rs

use crate::model::RawRow;

/// Split CSV `text` into rows keyed by the header line.
///
/// Lenient by design: never fails. Headers are split on plain commas,
/// data lines go through [`split_line`]. Short rows are padded with empty
/// strings and surplus fields are dropped. A leading byte-order mark is ignored.
pub fn parse_csv(text: &str) -> Vec<RawRow> {
    let mut lines = text.trim_start_matches('\u{feff}').trim().split('\n');
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    lines
        .map(|line| {
            let values = split_line(line);
            let fields = headers
                .iter()
                .enumerate()
                .map(|(idx, header)| {
                    let value = values.get(idx).map(|v| v.trim()).unwrap_or("");
                    (header.to_string(), value.to_string())
                })
                .collect();
            RawRow::new(fields)
        })
        .collect()
}

/// Quote-aware field split of a single line.
///
/// `"` toggles the in-quotes state and is dropped from the output; commas
/// inside quotes are kept. Doubled quotes are not an escape.
pub fn split_line(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    values.push(current);
    values
}
