//! Special dates that switch the ambient loop to its festive variant.

use chrono::Datelike;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialDate {
    NewYear,
    Valentine,
    Halloween,
    Christmas,
    NewYearsEve,
}

impl SpecialDate {
    /// The special date falling on `date`, if any.
    pub fn for_date(date: &impl Datelike) -> Option<Self> {
        match (date.month(), date.day()) {
            (1, 1) => Some(Self::NewYear),
            (2, 14) => Some(Self::Valentine),
            (10, 31) => Some(Self::Halloween),
            (12, 24..=26) => Some(Self::Christmas),
            (12, 31) => Some(Self::NewYearsEve),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::NewYear => "New Year",
            Self::Valentine => "Valentine's Day",
            Self::Halloween => "Halloween",
            Self::Christmas => "Christmas",
            Self::NewYearsEve => "New Year's Eve",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn christmas_spans_three_days() {
        assert_eq!(SpecialDate::for_date(&date(2026, 12, 23)), None);
        for day in 24..=26 {
            assert_eq!(
                SpecialDate::for_date(&date(2026, 12, day)),
                Some(SpecialDate::Christmas)
            );
        }
    }

    #[test]
    fn ordinary_days_are_not_special() {
        assert_eq!(SpecialDate::for_date(&date(2026, 3, 3)), None);
        assert_eq!(
            SpecialDate::for_date(&date(2026, 10, 31)),
            Some(SpecialDate::Halloween)
        );
    }
}
