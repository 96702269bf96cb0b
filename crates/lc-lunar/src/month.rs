//! Lunisolar months and the in-order walk over one year's months.

use crate::year_info::LunarYearInfo;

/// A month of a lunisolar year.
///
/// A leap month carries the number of the ordinary month it follows, so a
/// year with leap month 2 runs `1, 2, L2, 3, ..., 12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LunarMonth {
    /// An ordinary month, 1–12.
    Common(u8),
    /// The intercalary month following ordinary month `n`.
    Leap(u8),
}

impl LunarMonth {
    /// Month number, 1–12; a leap month reports the month it follows.
    pub fn number(&self) -> u8 {
        match *self {
            LunarMonth::Common(n) | LunarMonth::Leap(n) => n,
        }
    }

    /// Return `true` for the intercalary month.
    pub fn is_leap(&self) -> bool {
        matches!(self, LunarMonth::Leap(_))
    }
}

impl std::fmt::Display for LunarMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LunarMonth::Common(n) => write!(f, "{n}"),
            LunarMonth::Leap(n) => write!(f, "L{n}"),
        }
    }
}

/// A month together with its length in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthSpan {
    /// Which month.
    pub month: LunarMonth,
    /// 29 or 30.
    pub days: u8,
}

/// Position of a [`MonthWalk`] relative to the leap month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkPhase {
    /// Ordinary months up to and including the leap month's predecessor.
    BeforeLeap,
    /// The leap month is next.
    InLeap,
    /// Ordinary months after the leap month (or all of them, if none).
    AfterLeap,
}

/// Iterator over the months of one lunisolar year in calendar order.
///
/// ```
/// use lc_lunar::{LunarMonth, LunarYearInfo};
///
/// let months: Vec<_> = LunarYearInfo::new(2023).unwrap().months().map(|s| s.month).collect();
/// assert_eq!(months.len(), 13);
/// assert_eq!(months[2], LunarMonth::Leap(2));
/// assert_eq!(months[3], LunarMonth::Common(3));
/// ```
#[derive(Debug, Clone)]
pub struct MonthWalk {
    info: LunarYearInfo,
    next: u8,
    phase: WalkPhase,
}

impl MonthWalk {
    pub(crate) fn new(info: LunarYearInfo) -> Self {
        let phase = if info.leap_month() == 0 {
            WalkPhase::AfterLeap
        } else {
            WalkPhase::BeforeLeap
        };
        MonthWalk {
            info,
            next: 1,
            phase,
        }
    }

    /// Current phase of the walk.
    pub fn phase(&self) -> WalkPhase {
        self.phase
    }
}

impl Iterator for MonthWalk {
    type Item = MonthSpan;

    fn next(&mut self) -> Option<MonthSpan> {
        let leap = self.info.leap_month();
        match self.phase {
            WalkPhase::InLeap => {
                self.phase = WalkPhase::AfterLeap;
                Some(MonthSpan {
                    month: LunarMonth::Leap(leap),
                    days: self.info.leap_month_days(),
                })
            }
            _ if self.next > 12 => None,
            phase => {
                let n = self.next;
                self.next += 1;
                if phase == WalkPhase::BeforeLeap && n == leap {
                    self.phase = WalkPhase::InLeap;
                }
                Some(MonthSpan {
                    month: LunarMonth::Common(n),
                    days: self.info.ordinary_days(n),
                })
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let ordinary = usize::from(13u8.saturating_sub(self.next));
        let leap = match self.phase {
            WalkPhase::AfterLeap => 0,
            _ => 1,
        };
        (ordinary + leap, Some(ordinary + leap))
    }
}

impl ExactSizeIterator for MonthWalk {}

impl std::iter::FusedIterator for MonthWalk {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(LunarMonth::Common(6).to_string(), "6");
        assert_eq!(LunarMonth::Leap(6).to_string(), "L6");
        assert_eq!(LunarMonth::Leap(6).number(), 6);
        assert!(LunarMonth::Leap(6).is_leap());
        assert!(!LunarMonth::Common(6).is_leap());
    }

    #[test]
    fn walk_without_leap_month() {
        let walk = LunarYearInfo::new(2024).unwrap().months();
        assert_eq!(walk.phase(), WalkPhase::AfterLeap);
        assert_eq!(walk.len(), 12);
        let months: Vec<_> = walk.map(|s| s.month).collect();
        assert_eq!(months, (1..=12).map(LunarMonth::Common).collect::<Vec<_>>());
    }

    #[test]
    fn walk_places_leap_month_after_its_predecessor() {
        let info = LunarYearInfo::new(2020).unwrap();
        let mut walk = info.months();
        assert_eq!(walk.len(), 13);
        let spans: Vec<_> = walk.by_ref().take(4).collect();
        assert_eq!(walk.phase(), WalkPhase::InLeap);
        assert_eq!(spans[3].month, LunarMonth::Common(4));
        let leap = walk.next().unwrap();
        assert_eq!(leap.month, LunarMonth::Leap(4));
        assert_eq!(leap.days, info.leap_month_days());
        assert_eq!(walk.phase(), WalkPhase::AfterLeap);
        assert_eq!(walk.len(), 8);
        assert_eq!(walk.next().unwrap().month, LunarMonth::Common(5));
    }

    #[test]
    fn walk_lengths_sum_to_year_days() {
        for info in LunarYearInfo::all() {
            let walk = info.months();
            assert_eq!(walk.len(), info.month_count());
            let total: u16 = walk.map(|s| u16::from(s.days)).sum();
            assert_eq!(total, info.year_days(), "{}", info.year());
        }
    }

    #[test]
    fn walk_is_fused() {
        let mut walk = LunarYearInfo::new(2023).unwrap().months();
        assert_eq!(walk.by_ref().count(), 13);
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next(), None);
    }
}
