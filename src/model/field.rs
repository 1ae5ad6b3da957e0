use std::fmt;

use super::types::MissionRecord;

/// Names a `MissionRecord` attribute for grouping and counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Rocket,
    RocketFamily,
    Year,
    Month,
    MonthName,
    DayOfWeek,
    Decade,
    Status,
    Success,
    Country,
    CountryFull,
    Agency,
    MissionType,
    MissionOrbit,
}

impl Field {
    pub fn as_str(&self) -> &str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Rocket => "rocket",
            Field::RocketFamily => "rocket_family",
            Field::Year => "year",
            Field::Month => "month",
            Field::MonthName => "month_name",
            Field::DayOfWeek => "day_of_week",
            Field::Decade => "decade",
            Field::Status => "status",
            Field::Success => "success",
            Field::Country => "country",
            Field::CountryFull => "country_full",
            Field::Agency => "agency",
            Field::MissionType => "mission_type",
            Field::MissionOrbit => "mission_orbit",
        }
    }

    /// Read this attribute off `record`.
    pub fn value<'a>(&self, record: &'a MissionRecord) -> FieldValue<'a> {
        match self {
            Field::Id => FieldValue::from(record.id.as_deref()),
            Field::Name => FieldValue::Text(&record.name),
            Field::Rocket => FieldValue::Text(&record.rocket),
            Field::RocketFamily => FieldValue::Text(&record.rocket_family),
            Field::Year => FieldValue::Int(record.year as i64),
            Field::Month => FieldValue::Int(record.month as i64),
            Field::MonthName => FieldValue::Text(&record.month_name),
            Field::DayOfWeek => FieldValue::Text(&record.day_of_week),
            Field::Decade => FieldValue::Int(record.decade as i64),
            Field::Status => FieldValue::Text(&record.status),
            Field::Success => FieldValue::Bool(record.success),
            Field::Country => FieldValue::Text(&record.country),
            Field::CountryFull => FieldValue::Text(&record.country_full),
            Field::Agency => FieldValue::Text(&record.agency),
            Field::MissionType => FieldValue::from(record.mission_type.as_deref()),
            Field::MissionOrbit => FieldValue::from(record.mission_orbit.as_deref()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed attribute value. Formats the way it appears as a group label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(i64),
    Bool(bool),
    Null,
}

impl FieldValue<'_> {
    /// Empty text, zero, `false` and null all count as "no value".
    pub fn is_falsy(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Int(n) => *n == 0,
            FieldValue::Bool(b) => !b,
            FieldValue::Null => true,
        }
    }
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Text)
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_display_as_snake_case() {
        assert_eq!(Field::CountryFull.to_string(), "country_full");
        assert_eq!(Field::DayOfWeek.as_str(), "day_of_week");
    }

    #[test]
    fn falsy_values() {
        assert!(FieldValue::Text("").is_falsy());
        assert!(FieldValue::Int(0).is_falsy());
        assert!(FieldValue::Bool(false).is_falsy());
        assert!(FieldValue::Null.is_falsy());
        assert!(!FieldValue::Text("USA").is_falsy());
        assert!(!FieldValue::Int(1969).is_falsy());
    }

    #[test]
    fn null_formats_as_empty() {
        assert_eq!(FieldValue::Null.to_string(), "");
        assert_eq!(FieldValue::Int(1980).to_string(), "1980");
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
    }
}
