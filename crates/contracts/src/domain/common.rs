use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// Response envelope
// ============================================================================

/// Envelope every collection endpoint of the shop API wraps its payload in:
/// `{ "success": true, "data": [ ... ] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub data: Vec<T>,
}

impl<T> ListEnvelope<T> {
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

// ============================================================================
// Calendar month key
// ============================================================================

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Calendar month used as a bucket key (locale independent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// "Oct"
    pub fn short_label(&self) -> &'static str {
        let idx = (self.month.clamp(1, 12) - 1) as usize;
        MONTH_ABBR[idx]
    }

    /// "Oct 2026"
    pub fn label(&self) -> String {
        format!("{} {}", self.short_label(), self.year)
    }

    /// Shift by a (possibly negative) number of months
    pub fn shifted(&self, months: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + months;
        Self {
            year: total.div_euclid(12),
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.shifted(1)
            .first_day()
            .pred_opt()
            .unwrap_or_default()
    }
}

// ============================================================================
// Date range filter
// ============================================================================

/// Inclusive `from..=to` filter sent to the collection endpoints as `?from=&to=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// From the 1st of the month `months` back up to the last day of the current month.
    /// `months = 0` is the current month only.
    pub fn last_months(today: NaiveDate, months: u32) -> Self {
        let current = MonthKey::from_date(today);
        Self {
            from: current.shifted(-(months as i32)).first_day(),
            to: current.last_day(),
        }
    }

    pub fn this_month(today: NaiveDate) -> Self {
        Self::last_months(today, 0)
    }

    pub fn this_year(today: NaiveDate) -> Self {
        Self {
            from: MonthKey::new(today.year(), 1).first_day(),
            to: MonthKey::new(today.year(), 12).last_day(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Query parameters in the order the shop API expects them
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("from", self.from.format("%Y-%m-%d").to_string()),
            ("to", self.to.format("%Y-%m-%d").to_string()),
        ]
    }
}

/// Named ranges offered by the reports screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePreset {
    ThisMonth,
    #[serde(rename = "last_3_months")]
    Last3Months,
    #[serde(rename = "last_6_months")]
    Last6Months,
    ThisYear,
}

impl RangePreset {
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        match self {
            RangePreset::ThisMonth => DateRange::this_month(today),
            RangePreset::Last3Months => DateRange::last_months(today, 2),
            RangePreset::Last6Months => DateRange::last_months(today, 5),
            RangePreset::ThisYear => DateRange::this_year(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_label() {
        assert_eq!(MonthKey::new(2026, 10).label(), "Oct 2026");
        assert_eq!(MonthKey::new(2025, 1).short_label(), "Jan");
    }

    #[test]
    fn test_month_shift_crosses_year() {
        assert_eq!(MonthKey::new(2026, 1).shifted(-1), MonthKey::new(2025, 12));
        assert_eq!(MonthKey::new(2026, 2).shifted(-5), MonthKey::new(2025, 9));
        assert_eq!(MonthKey::new(2026, 12).shifted(1), MonthKey::new(2027, 1));
    }

    #[test]
    fn test_last_day_of_february() {
        assert_eq!(MonthKey::new(2024, 2).last_day(), date(2024, 2, 29));
        assert_eq!(MonthKey::new(2026, 2).last_day(), date(2026, 2, 28));
    }

    #[test]
    fn test_presets() {
        let today = date(2026, 10, 18);

        let month = RangePreset::ThisMonth.resolve(today);
        assert_eq!(month, DateRange::new(date(2026, 10, 1), date(2026, 10, 31)));

        let quarter = RangePreset::Last3Months.resolve(today);
        assert_eq!(quarter.from, date(2026, 8, 1));
        assert_eq!(quarter.to, date(2026, 10, 31));

        let half = RangePreset::Last6Months.resolve(today);
        assert_eq!(half.from, date(2026, 5, 1));

        let year = RangePreset::ThisYear.resolve(today);
        assert_eq!(year, DateRange::new(date(2026, 1, 1), date(2026, 12, 31)));
    }

    #[test]
    fn test_preset_wire_names() {
        let cases = [
            ("\"this_month\"", RangePreset::ThisMonth),
            ("\"last_3_months\"", RangePreset::Last3Months),
            ("\"last_6_months\"", RangePreset::Last6Months),
            ("\"this_year\"", RangePreset::ThisYear),
        ];
        for (json, preset) in cases {
            assert_eq!(serde_json::from_str::<RangePreset>(json).unwrap(), preset);
            assert_eq!(serde_json::to_string(&preset).unwrap(), json);
        }
        assert!(serde_json::from_str::<RangePreset>("\"last3_months\"").is_err());
    }

    #[test]
    fn test_query_pairs() {
        let range = DateRange::new(date(2026, 1, 5), date(2026, 2, 1));
        let pairs = range.query_pairs();
        assert_eq!(pairs[0], ("from", "2026-01-05".to_string()));
        assert_eq!(pairs[1], ("to", "2026-02-01".to_string()));
        assert!(range.contains(date(2026, 1, 31)));
        assert!(!range.contains(date(2026, 2, 2)));
    }

    #[test]
    fn test_envelope_parses() {
        let env: ListEnvelope<i32> = serde_json::from_str(r#"{"data":[1,2,3]}"#).unwrap();
        assert_eq!(env.success, None);
        assert_eq!(env.into_data(), vec![1, 2, 3]);
    }
}
