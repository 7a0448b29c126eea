//! Day-bucketed lead time series

use chrono::{Datelike, Duration, NaiveDate, TimeZone};
use serde::Serialize;
use veranda_core::LeadRecord;

/// One calendar day's counts in the 7-day series
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayBucket {
    /// Weekday label ("Mon", "Tue", ...)
    pub label: String,

    /// The calendar day
    pub date: NaiveDate,

    /// Brochure leads submitted that day
    pub brochure: usize,

    /// Site-visit leads submitted that day
    pub visits: usize,
}

/// Per-day counts for the 7 calendar days ending `today`, oldest first
///
/// Timestamps are bucketed on the calendar day they fall on in `tz`; a
/// dashboard counts in the viewer's local zone, tests pass `Utc` for
/// determinism. Always exactly 7 points, zero-filled.
#[must_use]
pub fn last_7_days_series<Tz, B, V>(
    brochure: &[B],
    visits: &[V],
    tz: &Tz,
    today: NaiveDate,
) -> Vec<DayBucket>
where
    Tz: TimeZone,
    B: LeadRecord,
    V: LeadRecord,
{
    (0..7)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DayBucket {
                label: weekday_label(date),
                date,
                brochure: count_on_day(brochure, tz, date),
                visits: count_on_day(visits, tz, date),
            }
        })
        .collect()
}

/// [`last_7_days_series`] for the viewer's local zone and current date
#[must_use]
pub fn last_7_days_series_local<B, V>(brochure: &[B], visits: &[V]) -> Vec<DayBucket>
where
    B: LeadRecord,
    V: LeadRecord,
{
    let today = chrono::Local::now().date_naive();
    last_7_days_series(brochure, visits, &chrono::Local, today)
}

fn count_on_day<Tz: TimeZone, T: LeadRecord>(leads: &[T], tz: &Tz, date: NaiveDate) -> usize {
    leads
        .iter()
        .filter(|lead| lead.timestamp().with_timezone(tz).date_naive() == date)
        .count()
}

fn weekday_label(date: NaiveDate) -> String {
    // chrono's %a gives the same three-letter names; spelled out here to
    // keep the labels locale-independent
    match date.weekday() {
        chrono::Weekday::Mon => "Mon",
        chrono::Weekday::Tue => "Tue",
        chrono::Weekday::Wed => "Wed",
        chrono::Weekday::Thu => "Thu",
        chrono::Weekday::Fri => "Fri",
        chrono::Weekday::Sat => "Sat",
        chrono::Weekday::Sun => "Sun",
    }
    .to_string()
}
