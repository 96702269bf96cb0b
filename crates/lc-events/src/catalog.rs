//! The event catalogue: loading, per-day selection and grouping.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{Read, Write};
use std::str::FromStr;

use lc_core::ensure;
use lc_core::errors::{Error, Result};
use lc_time::Date;
use tracing::{debug, trace};

use crate::event::Event;

/// Event attribute used to group a day's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupBy {
    /// A single group with an empty key.
    #[default]
    None,
    /// By `country`.
    Country,
    /// By `field`.
    Field,
    /// By `frequency` tag.
    Frequency,
}

impl GroupBy {
    /// The grouping key of `event`.
    pub fn key(&self, event: &Event) -> String {
        match self {
            GroupBy::None => String::new(),
            GroupBy::Country => event.country.clone(),
            GroupBy::Field => event.field.clone(),
            GroupBy::Frequency => event.frequency.to_string(),
        }
    }

    /// The attribute name.
    pub fn name(&self) -> &'static str {
        match self {
            GroupBy::None => "none",
            GroupBy::Country => "country",
            GroupBy::Field => "field",
            GroupBy::Frequency => "frequency",
        }
    }
}

impl FromStr for GroupBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(GroupBy::None),
            "country" => Ok(GroupBy::Country),
            "field" => Ok(GroupBy::Field),
            "frequency" => Ok(GroupBy::Frequency),
            other => Err(Error::Parse(format!(
                "unknown grouping {other:?} (expected none, country, field or frequency)"
            ))),
        }
    }
}

impl std::fmt::Display for GroupBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Events sharing one grouping key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventGroup<'a> {
    /// Grouping key; empty for the ungrouped list.
    pub key: String,
    /// The group's events in catalogue order.
    pub events: Vec<&'a Event>,
}

/// The events of one day, grouped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSelection<'a> {
    /// Number of events across all groups.
    pub total: usize,
    /// Groups in ascending key order.
    pub groups: Vec<EventGroup<'a>>,
}

impl EventSelection<'_> {
    /// Return `true` if no event was selected.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// A static list of events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Catalogue over `events`.
    pub fn new(events: Vec<Event>) -> Self {
        EventCatalog { events }
    }

    /// Parse a JSON array of events.
    ///
    /// # Errors
    /// [`Error::Parse`] on malformed JSON or field values, and
    /// [`Error::Precondition`] for a month above 12 or a day above 31.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let events: Vec<Event> =
            serde_json::from_str(json).map_err(|e| Error::Parse(format!("event catalogue: {e}")))?;
        Self::checked(events)
    }

    /// Read a JSON array of events from `reader`.
    ///
    /// # Errors
    /// As [`from_json_str`](Self::from_json_str); I/O failures are
    /// [`Error::Parse`] too.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let events: Vec<Event> = serde_json::from_reader(reader)
            .map_err(|e| Error::Parse(format!("event catalogue: {e}")))?;
        Self::checked(events)
    }

    /// Read a CSV table of events with a header row.
    ///
    /// Columns are matched by header name and may appear in any order;
    /// missing columns and empty cells take their defaults. Cells are
    /// trimmed before parsing.
    ///
    /// # Errors
    /// [`Error::Parse`] on malformed rows or field values, and
    /// [`Error::Precondition`] as for [`from_json_str`](Self::from_json_str).
    pub fn from_csv_reader(reader: impl Read) -> Result<Self> {
        let mut rows = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let events = rows
            .deserialize()
            .collect::<std::result::Result<Vec<Event>, _>>()
            .map_err(|e| Error::Parse(format!("event catalogue: {e}")))?;
        Self::checked(events)
    }

    /// Write the catalogue as an indented JSON array.
    ///
    /// The output loads back through [`from_reader`](Self::from_reader).
    pub fn write_json(&self, writer: impl Write) -> Result<()> {
        serde_json::to_writer_pretty(writer, &self.events)
            .map_err(|e| Error::Parse(format!("event catalogue: {e}")))
    }

    fn checked(events: Vec<Event>) -> Result<Self> {
        for (i, e) in events.iter().enumerate() {
            ensure!(e.month <= 12, "event {i} ({:?}): month {} out of range", e.title, e.month);
            ensure!(e.date <= 31, "event {i} ({:?}): day {} out of range", e.title, e.date);
        }
        debug!(count = events.len(), "loaded event catalogue");
        Ok(Self::new(events))
    }

    /// All events in catalogue order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` for an empty catalogue.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events falling on `date`, in catalogue order.
    pub fn select(&self, date: Date) -> Vec<&Event> {
        self.events.iter().filter(|e| e.occurs_on(date)).collect()
    }

    /// Return `true` if any event falls on `date`.
    pub fn has_events(&self, date: Date) -> bool {
        self.events.iter().any(|e| e.occurs_on(date))
    }

    /// Events falling on `date`, grouped by `group_by`.
    ///
    /// With [`GroupBy::None`] the result is a single group with an empty key;
    /// otherwise one group per distinct key, keys ascending.
    pub fn grouped(&self, date: Date, group_by: GroupBy) -> EventSelection<'_> {
        let selected = self.select(date);
        let total = selected.len();
        let groups = if group_by == GroupBy::None {
            vec![EventGroup {
                key: String::new(),
                events: selected,
            }]
        } else {
            let mut by_key: BTreeMap<String, Vec<&Event>> = BTreeMap::new();
            for event in selected {
                by_key.entry(group_by.key(event)).or_default().push(event);
            }
            by_key
                .into_iter()
                .map(|(key, events)| EventGroup { key, events })
                .collect()
        };
        trace!(%date, %group_by, total, groups = groups.len(), "selected events");
        EventSelection { total, groups }
    }

    /// Days of each month without a day-specific event.
    ///
    /// February is taken to have 29 days. Months with full coverage are
    /// omitted.
    pub fn missing_days_by_month(&self) -> BTreeMap<u8, Vec<u8>> {
        const DAYS: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        let mut missing = BTreeMap::new();
        for (month, days) in (1u8..).zip(DAYS) {
            let covered: BTreeSet<u8> = self
                .events
                .iter()
                .filter(|e| e.month == month)
                .map(|e| e.date)
                .collect();
            let gaps: Vec<u8> = (1..=days).filter(|d| !covered.contains(d)).collect();
            if !gaps.is_empty() {
                missing.insert(month, gaps);
            }
        }
        missing
    }
}

impl FromIterator<Event> for EventCatalog {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
