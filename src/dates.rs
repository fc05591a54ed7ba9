//! Date-range selection for `homeworks get`.
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime};

use crate::homeworks::HomeworkDay;

/// Relative period selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    Today,
    Tomorrow,
    ThisWeek,
    NextWeek,
}

/// Inclusive range of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Range that accepts every date.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
        }
    }

    /// Range for `filter` relative to `today`. Weeks start on Monday.
    #[must_use]
    pub fn for_filter(filter: DateFilter, today: NaiveDate) -> Self {
        match filter {
            DateFilter::Today => Self::single(today),
            DateFilter::Tomorrow => Self::single(today + Days::new(1)),
            DateFilter::ThisWeek => {
                let offset = u64::from(today.weekday().num_days_from_monday());
                let start = today - Days::new(offset);
                Self {
                    start,
                    end: start + Days::new(6),
                }
            }
            DateFilter::NextWeek => {
                let this_week = Self::for_filter(DateFilter::ThisWeek, today);
                Self {
                    start: this_week.start + Days::new(7),
                    end: this_week.end + Days::new(7),
                }
            }
        }
    }

    /// Range for an optional filter; `None` is unbounded.
    #[must_use]
    pub fn from_option(filter: Option<DateFilter>, today: NaiveDate) -> Self {
        filter.map_or_else(Self::unbounded, |f| Self::for_filter(f, today))
    }

    fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Keep the days falling inside `range`, preserving order.
#[must_use]
pub fn filter_days(days: Vec<HomeworkDay>, range: &DateRange) -> Vec<HomeworkDay> {
    days.into_iter()
        .filter(|day| range.contains(day.date))
        .collect()
}

/// Parse `YYYY-MM-DD`, also accepting a full ISO-8601 timestamp (date part kept).
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}
