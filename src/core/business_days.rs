//! Business-day lookback windows
//!
//! Weekends are the only non-business days; there is no holiday calendar,
//! so [`is_holiday`] answers the same question as [`is_weekend`].

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};

/// Whether the date falls on a Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether the date is a holiday. Holidays are weekends.
pub fn is_holiday(date: NaiveDate) -> bool {
    is_weekend(date)
}

/// Walk back `number_of_days` business days from today's UTC date.
///
/// See [`calculate_start_date_from`].
pub fn calculate_start_date(number_of_days: u32) -> Option<NaiveDate> {
    calculate_start_date_from(Utc::now().date_naive(), number_of_days)
}

/// Walk back `number_of_days` business days from `today`.
///
/// Each step skips back over weekend days, then over holidays, then steps
/// back one more day. With `number_of_days == 0` nothing moves and `today`
/// comes back unchanged, even when it is a weekend.
///
/// Returns `None` when the walk would leave chrono's date range.
pub fn calculate_start_date_from(today: NaiveDate, number_of_days: u32) -> Option<NaiveDate> {
    if number_of_days == 0 {
        return Some(today);
    }

    // After the first step the date is Sunday through Thursday, and from
    // there every five steps land exactly one week earlier.
    let remaining = number_of_days - 1;
    let mut start_date = step_back(today)?
        .checked_sub_days(Days::new(u64::from(remaining / 5) * 7))?;

    for _ in 0..remaining % 5 {
        start_date = step_back(start_date)?;
    }

    Some(start_date)
}

fn step_back(mut date: NaiveDate) -> Option<NaiveDate> {
    while is_weekend(date) {
        date = date.pred_opt()?;
    }

    while is_holiday(date) {
        date = date.pred_opt()?;
    }

    date.pred_opt()
}

/// An inclusive window of instants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// From midnight of the business-day start date through midnight at
    /// the start of `today`. Orders entered later today fall outside.
    pub fn business_days(today: NaiveDate, number_of_days: u32) -> Option<Self> {
        let start_date = calculate_start_date_from(today, number_of_days)?;
        Some(Self {
            start: start_of_day(start_date),
            end: start_of_day(today),
        })
    }

    /// Inclusive on both ends
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}
