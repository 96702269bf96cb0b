//! Option lists for month and year pickers.
//!
//! Months are grouped by calendar quarter and years by decade, the way the
//! calendar's selection controls present them.

use crate::month::Month;

/// One month entry of the month picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthOption {
    /// 0-based month index, the value handed to the grid builder.
    pub index0: u8,
    /// Month the option stands for.
    pub month: Month,
}

/// Three months sharing a calendar quarter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarterGroup {
    /// Quarter number (1–4).
    pub quarter: u8,
    /// The quarter's months in calendar order.
    pub months: Vec<MonthOption>,
}

/// Years sharing a decade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecadeGroup {
    /// First year of the decade (e.g. `1990`).
    pub decade: i32,
    /// Years of the decade that lie inside the requested span.
    pub years: Vec<i32>,
}

/// The twelve months grouped into four quarters.
pub fn months_by_quarter() -> Vec<QuarterGroup> {
    let mut groups: Vec<QuarterGroup> = Vec::with_capacity(4);
    for month in Month::ALL {
        let option = MonthOption {
            index0: month.index0(),
            month,
        };
        if let Some(group) = groups.last_mut().filter(|g| g.quarter == month.quarter()) {
            group.months.push(option);
            continue;
        }
        groups.push(QuarterGroup {
            quarter: month.quarter(),
            months: vec![option],
        });
    }
    groups
}

/// The years `first..=last` grouped by decade.
///
/// Returns an empty list when `first > last`.
pub fn years_by_decade(first: i32, last: i32) -> Vec<DecadeGroup> {
    let mut groups: Vec<DecadeGroup> = Vec::new();
    for year in first..=last {
        let decade = year - year.rem_euclid(10);
        if let Some(group) = groups.last_mut().filter(|g| g.decade == decade) {
            group.years.push(year);
            continue;
        }
        groups.push(DecadeGroup {
            decade,
            years: vec![year],
        });
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarters() {
        let groups = months_by_quarter();
        assert_eq!(groups.len(), 4);
        assert!(groups.iter().all(|g| g.months.len() == 3));
        assert_eq!(groups[1].quarter, 2);
        assert_eq!(groups[1].months[0].month, Month::April);
        assert_eq!(groups[3].months[2].index0, 11);
    }

    #[test]
    fn decades_of_supported_span() {
        let groups = years_by_decade(1900, 2100);
        assert_eq!(groups.len(), 21);
        assert_eq!(groups[0].decade, 1900);
        assert_eq!(groups[0].years, (1900..=1909).collect::<Vec<_>>());
        assert_eq!(groups[20].years, vec![2100]);
    }

    #[test]
    fn partial_decades() {
        let groups = years_by_decade(1995, 2003);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].years.len(), 5);
        assert_eq!(groups[1].decade, 2000);
        assert!(years_by_decade(2001, 2000).is_empty());
    }
}
