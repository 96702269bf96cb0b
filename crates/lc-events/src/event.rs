//! A single catalogue event.

use lc_time::Date;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// How often an event recurs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Frequency {
    /// Recurs every year on the same month and day; the event's year is
    /// ignored when matching.
    Annual,
    /// No recurrence tag.
    #[default]
    Once,
    /// Any other tag, kept verbatim.
    Other(String),
}

impl Frequency {
    /// The tag as written in the catalogue.
    pub fn as_str(&self) -> &str {
        match self {
            Frequency::Annual => "annual",
            Frequency::Once => "",
            Frequency::Other(tag) => tag,
        }
    }
}

impl From<String> for Frequency {
    fn from(tag: String) -> Self {
        match tag.trim() {
            "annual" => Frequency::Annual,
            "" => Frequency::Once,
            _ => Frequency::Other(tag),
        }
    }
}

impl From<Frequency> for String {
    fn from(f: Frequency) -> Self {
        match f {
            Frequency::Other(tag) => tag,
            other => other.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the event catalogue.
///
/// `year`, `month` and `date` match any value when 0. Missing, `null` and
/// empty-string fields deserialize to their defaults, and numeric fields may
/// be written as strings (`"7"`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    /// Gregorian year, 0 for any.
    #[serde(deserialize_with = "lenient_number")]
    pub year: i32,
    /// Gregorian month 1–12, 0 for any.
    #[serde(deserialize_with = "lenient_number")]
    pub month: u8,
    /// Day of month, 0 for any.
    #[serde(deserialize_with = "lenient_number")]
    pub date: u8,
    /// Display text.
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    /// Recurrence tag.
    #[serde(deserialize_with = "lenient_frequency")]
    pub frequency: Frequency,
    /// Country the event belongs to.
    #[serde(deserialize_with = "lenient_text")]
    pub country: String,
    /// Subject area, shown as the event's prefix.
    #[serde(deserialize_with = "lenient_text")]
    pub field: String,
}

impl Event {
    /// Return `true` if the event falls on `date`.
    pub fn occurs_on(&self, date: Date) -> bool {
        let (y, m, d) = date.ymd();
        let year_matches =
            self.year == 0 || self.frequency == Frequency::Annual || self.year == i32::from(y);
        let month_matches = self.month == 0 || self.month == m;
        let date_matches = self.date == 0 || self.date == d;
        year_matches && month_matches && date_matches
    }

    /// One-line label: `date/month - [field] title`.
    pub fn label(&self) -> String {
        format!("{}/{} - [{}] {}", self.date, self.month, self.field, self.title)
    }
}

/// Integers, integral floats, numeric strings, `""` and `null`.
fn lenient_number<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + Default,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let value = match Option::<Raw>::deserialize(deserializer)? {
        None => return Ok(T::default()),
        Some(Raw::Int(n)) => n,
        Some(Raw::Float(x)) if x.fract() == 0.0 && x.abs() < 1e15 => x as i64,
        Some(Raw::Float(x)) => {
            return Err(D::Error::custom(format!("expected a whole number, got {x}")))
        }
        Some(Raw::Text(s)) if s.trim().is_empty() => return Ok(T::default()),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected a number, got {s:?}")))?,
    };
    T::try_from(value).map_err(|_| D::Error::custom(format!("number {value} out of range")))
}

/// Strings, with `null` read as empty.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_frequency<'de, D>(deserializer: D) -> std::result::Result<Frequency, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_text(deserializer).map(Frequency::from)
}
