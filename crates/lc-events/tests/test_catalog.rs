//! Event catalogue tests over a small JSON fixture.

use lc_events::{EventCatalog, Frequency, GroupBy};
use lc_time::Date;

const FIXTURE: &str = r#"[
  {"year": 0, "month": 1, "date": 1, "title": "New Year's Day", "frequency": "annual", "country": "", "field": "holiday"},
  {"year": 1949, "month": 10, "date": 1, "title": "National Day", "frequency": "annual", "country": "CN", "field": "politics"},
  {"year": 1945, "month": 9, "date": 2, "title": "National Day", "frequency": "annual", "country": "VN", "field": "politics"},
  {"year": 2024, "month": 10, "date": 1, "title": "Conference", "frequency": "", "country": "VN", "field": "science"},
  {"year": "2025", "month": "10", "date": "1", "title": "Conference", "frequency": null, "country": "VN", "field": "science"},
  {"month": 10, "title": "Month-long exhibition", "country": "CN", "field": "culture"}
]"#;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn titles(catalog: &EventCatalog, day: Date) -> Vec<&str> {
    catalog.select(day).iter().map(|e| e.title.as_str()).collect()
}

#[test]
fn loads_fixture() {
    let catalog = EventCatalog::from_json_str(FIXTURE).unwrap();
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.events()[4].year, 2025);
    assert_eq!(catalog.events()[4].frequency, Frequency::Once);
    assert_eq!(catalog.events()[5].date, 0);

    let from_reader = EventCatalog::from_reader(FIXTURE.as_bytes()).unwrap();
    assert_eq!(from_reader, catalog);
}

#[test]
fn selection_by_date() {
    let catalog = EventCatalog::from_json_str(FIXTURE).unwrap();
    assert_eq!(
        titles(&catalog, date(2024, 10, 1)),
        ["National Day", "Conference", "Month-long exhibition"]
    );
    assert_eq!(
        titles(&catalog, date(2025, 10, 1)),
        ["National Day", "Conference", "Month-long exhibition"]
    );
    assert_eq!(titles(&catalog, date(2030, 10, 1)), ["National Day", "Month-long exhibition"]);
    assert_eq!(titles(&catalog, date(2030, 10, 2)), ["Month-long exhibition"]);
    assert_eq!(titles(&catalog, date(1900, 1, 1)), ["New Year's Day"]);
}

#[test]
fn grouping_by_country() {
    let catalog = EventCatalog::from_json_str(FIXTURE).unwrap();
    let sel = catalog.grouped(date(2024, 10, 1), GroupBy::Country);
    assert_eq!(sel.total, 3);
    let shape: Vec<(&str, usize)> = sel
        .groups
        .iter()
        .map(|g| (g.key.as_str(), g.events.len()))
        .collect();
    assert_eq!(shape, [("CN", 2), ("VN", 1)]);

    // An empty key is a group of its own.
    let sel = catalog.grouped(date(2024, 1, 1), GroupBy::Country);
    assert_eq!(sel.groups.len(), 1);
    assert_eq!(sel.groups[0].key, "");
}

#[test]
fn grouping_by_frequency() {
    let catalog = EventCatalog::from_json_str(FIXTURE).unwrap();
    let sel = catalog.grouped(date(2024, 10, 1), GroupBy::Frequency);
    let keys: Vec<&str> = sel.groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, ["", "annual"]);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = EventCatalog::from_json_str(r#"[{"month": "October"}]"#).unwrap_err();
    assert!(err.to_string().starts_with("parse error: event catalogue:"), "{err}");
    assert!(EventCatalog::from_json_str("{}").is_err());
}

#[test]
fn coverage_report() {
    let catalog = EventCatalog::from_json_str(FIXTURE).unwrap();
    let missing = catalog.missing_days_by_month();
    assert_eq!(missing.len(), 12);
    assert_eq!(missing[&2].len(), 29);
    assert!(!missing[&10].contains(&1));
    assert_eq!(missing[&10].len(), 30);
    assert!(!missing[&9].contains(&2));
}

#[test]
fn csv_catalogue_matches_json() {
    let csv = "\
year,month,date,title,frequency,country,field
0,1,1,New Year's Day,annual,,holiday
1949,10,1,National Day,annual,CN,politics
1945,9,2,National Day,annual,VN,politics
2024,10,1,Conference,,VN,science
";
    let from_csv = EventCatalog::from_csv_reader(csv.as_bytes()).unwrap();
    let json = EventCatalog::from_json_str(FIXTURE).unwrap();
    assert_eq!(from_csv.events(), &json.events()[..4]);
    assert_eq!(
        titles(&from_csv, date(2024, 10, 1)),
        ["National Day", "Conference"]
    );
}
