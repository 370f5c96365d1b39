use super::TimeSlotId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Short day name, e.g. "Mon". Compared by exact string; order of a
/// school's `days` list is the schedule's canonical day order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Day(pub String);

impl Day {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Day {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A time slot in a school's weekly grid.
///
/// When `is_break` is true but the current day is not in `days`, the slot
/// behaves as an ordinary teaching slot on that day and carries the same
/// period number as the adjacent teaching slot at that time (see
/// `School::teaching_periods`, which is where that rule is actually applied
/// day-by-day).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: TimeSlotId,
    /// Period number, 1-based. `None` for a slot that is always a break.
    pub period: Option<u32>,
    /// "HH:MM-HH:MM"
    pub time_range: String,
    pub is_break: bool,
    pub label: Option<String>,
    /// If `Some`, the subset of days this break applies to. On any day not
    /// in this set the slot is a teaching slot instead.
    pub days: Option<HashSet<Day>>,
}

impl TimeSlot {
    /// Whether this slot is a teaching slot on the given day.
    pub fn is_teaching_on(&self, day: &Day) -> bool {
        if self.period.is_none() {
            return false;
        }
        if !self.is_break {
            return true;
        }
        match &self.days {
            Some(days) => !days.contains(day),
            None => false,
        }
    }
}

/// Minutes-since-midnight interval. `start >= end` (or an unparseable
/// source range) is never constructed by `parse_range`; callers get `None`
/// instead and must treat the slot as unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteRange {
    pub start: u32,
    pub end: u32,
}

impl MinuteRange {
    pub fn overlaps(&self, other: &MinuteRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Parse "HH:MM-HH:MM" into a minute-of-day interval. Returns `None` for
/// anything unparseable or with `start >= end`; callers treat the slot as
/// non-overlapping with everything, i.e. permanently unusable.
pub fn parse_range(s: &str) -> Option<MinuteRange> {
    let (start_s, end_s) = s.split_once('-')?;
    let start = parse_hhmm(start_s.trim())?;
    let end = parse_hhmm(end_s.trim())?;
    if start >= end {
        return None;
    }
    Some(MinuteRange { start, end })
}

fn parse_hhmm(s: &str) -> Option<u32> {
    let (h, m) = s.split_once(':')?;
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

/// Public overlap predicate over two already-parsed ranges: strict on both
/// sides, so touching ranges (one's end equals the other's start) don't
/// overlap.
pub fn overlaps(a: &MinuteRange, b: &MinuteRange) -> bool {
    a.overlaps(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_range() {
        let r = parse_range("08:00-08:40").unwrap();
        assert_eq!(r.start, 480);
        assert_eq!(r.end, 520);
    }

    #[test]
    fn rejects_start_after_end() {
        assert!(parse_range("09:00-08:00").is_none());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_range("not-a-range").is_none());
        assert!(parse_range("25:00-26:00").is_none());
    }

    #[test]
    fn overlap_is_strict_both_sides() {
        let a = MinuteRange { start: 0, end: 40 };
        let b = MinuteRange { start: 40, end: 80 };
        assert!(!overlaps(&a, &b), "touching ranges must not overlap");

        let c = MinuteRange { start: 20, end: 60 };
        assert!(overlaps(&a, &c));
    }
}
