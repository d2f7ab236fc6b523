use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use contracts::domain::common::MonthKey;

/// Reference instant plus the shop's UTC offset.
///
/// Record timestamps are instants; the dashboard reasons in local calendar days
/// ("today", "this month"), so every date comparison goes through here.
#[derive(Debug, Clone, Copy)]
pub struct BusinessClock {
    offset: FixedOffset,
    now: DateTime<Utc>,
}

impl BusinessClock {
    pub fn new(offset: FixedOffset, now: DateTime<Utc>) -> Self {
        Self { offset, now }
    }

    /// Out-of-range offsets fall back to UTC
    pub fn with_offset_minutes(minutes: i32, now: DateTime<Utc>) -> Self {
        let offset = FixedOffset::east_opt(minutes.saturating_mul(60)).unwrap_or_else(|| Utc.fix());
        Self::new(offset, now)
    }

    pub fn local_date(&self, ts: &DateTime<Utc>) -> NaiveDate {
        ts.with_timezone(&self.offset).date_naive()
    }

    pub fn today(&self) -> NaiveDate {
        self.local_date(&self.now)
    }

    pub fn is_today(&self, ts: &DateTime<Utc>) -> bool {
        self.local_date(ts) == self.today()
    }

    pub fn month_of(&self, ts: &DateTime<Utc>) -> MonthKey {
        MonthKey::from_date(self.local_date(ts))
    }

    pub fn current_month(&self) -> MonthKey {
        MonthKey::from_date(self.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_local_date_crosses_midnight() {
        // 20:00 UTC is already the next day at +05:30
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 20, 0, 0).unwrap();
        let clock = BusinessClock::with_offset_minutes(330, now);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());

        let utc = BusinessClock::with_offset_minutes(0, now);
        assert_eq!(utc.today(), NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
    }

    #[test]
    fn test_month_of_end_of_month() {
        let now = Utc.with_ymd_and_hms(2026, 10, 31, 19, 0, 0).unwrap();
        let clock = BusinessClock::with_offset_minutes(330, now);
        assert_eq!(clock.current_month(), MonthKey::new(2026, 11));
    }

    #[test]
    fn test_invalid_offset_falls_back_to_utc() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 23, 0, 0).unwrap();
        let clock = BusinessClock::with_offset_minutes(100_000, now);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
    }
}
