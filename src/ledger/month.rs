use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month, the iteration unit of the carry-over chain.
///
/// `month` is 1-based (1 = January), matching chrono's convention. Ordering
/// is chronological.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's date.
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// The next calendar month, rolling the year over after December.
    pub fn succ(self) -> Self {
        if self.month >= 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Steps back `months` calendar months.
    pub fn minus_months(self, months: u32) -> Self {
        let mut year = self.year;
        let mut month = self.month as i32 - months as i32;
        while month < 1 {
            month += 12;
            year -= 1;
        }
        Self {
            year,
            month: month as u32,
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap())
    }

    /// The last calendar day of the month.
    pub fn last_day(self) -> NaiveDate {
        self.succ().first_day() - Duration::days(1)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// `MM/YYYY` label used on inter-month transfer records.
    pub fn label(self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn succ_rolls_year_over_after_december() {
        assert_eq!(Month::new(2024, 12).succ(), Month::new(2025, 1));
        assert_eq!(Month::new(2024, 6).succ(), Month::new(2024, 7));
    }

    #[test]
    fn minus_months_crosses_year_boundaries() {
        assert_eq!(Month::new(2024, 2).minus_months(3), Month::new(2023, 11));
        assert_eq!(Month::new(2024, 5).minus_months(0), Month::new(2024, 5));
        assert_eq!(Month::new(2024, 1).minus_months(24), Month::new(2022, 1));
    }

    #[test]
    fn last_day_handles_leap_february() {
        assert_eq!(
            Month::new(2024, 2).last_day(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            Month::new(2023, 2).last_day(),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }

    #[test]
    fn label_is_zero_padded() {
        assert_eq!(Month::new(2024, 3).label(), "03/2024");
        assert_eq!(Month::new(2024, 11).label(), "11/2024");
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(Month::new(2023, 12) < Month::new(2024, 1));
        assert!(Month::new(2024, 2) < Month::new(2024, 10));
    }
}
