use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-time layouts tried after the zone and weekday tokens have been stripped.
const DATETIME_FORMATS: &[&str] = &[
    "%B %d, %Y %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d %Y %H:%M:%S",
    "%B %d %Y %H:%M",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts. When parsing, `%B` takes both `Aug` and `August`.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%m/%d/%Y",
];

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Parse a free-text launch date into the calendar date it names.
///
/// Accepts RFC 3339, RFC 2822, ISO-like `YYYY-MM-DD` / `YYYY/MM/DD` with
/// optional time, the partials `YYYY` and `YYYY-MM`, the
/// `Fri Aug 07, 2020 05:12 UTC` form, `Aug 07 2020`, `August 7, 2020`,
/// `7 August 2020` and `08/07/2020` (US order). A leading weekday is ignored,
/// even when it disagrees with the date. The date is taken as written; no
/// zone shifting.
pub fn parse_launch_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }
    if let Some(date) = parse_partial(s) {
        return Some(date);
    }

    let s = strip_weekday(strip_zone(s));
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        })
}

/// `YYYY` → January 1st, `YYYY-MM` → the 1st of that month.
fn parse_partial(s: &str) -> Option<NaiveDate> {
    let digits = |t: &str| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit());
    match s.split_once('-') {
        None if s.len() == 4 && digits(s) => NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1),
        Some((year, month))
            if year.len() == 4 && month.len() == 2 && digits(year) && digits(month) =>
        {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        _ => None,
    }
}

fn strip_zone(s: &str) -> &str {
    for suffix in [" UTC", " GMT", "Z"] {
        if let Some(stripped) = s.strip_suffix(suffix) {
            return stripped.trim_end();
        }
    }
    s
}

/// Drop a leading `Fri` / `Friday` / `Fri,` token.
fn strip_weekday(s: &str) -> &str {
    let Some((first, rest)) = s.split_once(char::is_whitespace) else {
        return s;
    };
    let token = first.trim_end_matches(',').to_lowercase();
    let is_weekday = token.len() >= 3
        && WEEKDAYS
            .iter()
            .any(|day| *day == token || (token.len() == 3 && day.starts_with(&token)));
    if is_weekday {
        rest.trim_start()
    } else {
        s
    }
}
