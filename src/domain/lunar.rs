//! Solar to lunar-calendar conversion.
//!
//! Delegated to the `lunardate` crate, which carries its own bundled data
//! table. Dates outside the table's supported range (roughly 1900-2100)
//! simply yield `None`; the engine treats those as "no lunar date known".

use chrono::{Datelike, NaiveDate};
use lunardate::LunarDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDay {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub leap_month: bool,
}

impl LunarDay {
    /// Month/day match, ignoring year and leap flag. This is how lunar
    /// birthdays are compared.
    pub fn same_month_day(&self, other: &LunarDay) -> bool {
        self.month == other.month && self.day == other.day
    }
}

// `lunardate`'s bundled table covers these years. Outside them it does not
// error but extrapolates nonsense (underflowed day counts), so the bounds are
// enforced here.
const MIN_LUNAR_YEAR: i32 = 1900;
const MAX_LUNAR_YEAR: i32 = 2100;

pub fn to_lunar(date: NaiveDate) -> Option<LunarDay> {
    if !(MIN_LUNAR_YEAR..=MAX_LUNAR_YEAR).contains(&date.year()) {
        return None;
    }
    let lunar = LunarDate::from_solar_date(date.year(), date.month(), date.day()).ok()?;
    let (month, day) = (lunar.month() as u32, lunar.day() as u32);
    // Reject anything that cannot be a lunar calendar day, in case the table
    // edge still produces a wild value inside the year bounds.
    if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
        return None;
    }
    Some(LunarDay {
        year: lunar.year() as i32,
        month,
        day,
        leap_month: lunar.is_leap_month(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seollal_2025() {
        // 2025-01-29 was Seollal: lunar new year's day.
        let lunar = to_lunar(NaiveDate::from_ymd_opt(2025, 1, 29).unwrap()).unwrap();
        assert_eq!((lunar.month, lunar.day), (1, 1), "2025-01-29 should be lunar 1/1");
        assert!(!lunar.leap_month);
    }

    #[test]
    fn test_chuseok_2025() {
        // Chuseok 2025 fell on October 6th (lunar 8/15).
        let lunar = to_lunar(NaiveDate::from_ymd_opt(2025, 10, 6).unwrap()).unwrap();
        assert_eq!((lunar.month, lunar.day), (8, 15));
    }

    #[test]
    fn test_out_of_range_is_none() {
        // The crate extrapolates garbage past its table instead of erroring;
        // the year guard has to catch these.
        assert!(to_lunar(NaiveDate::from_ymd_opt(1492, 10, 12).unwrap()).is_none());
        assert!(to_lunar(NaiveDate::from_ymd_opt(1899, 12, 31).unwrap()).is_none());
        assert!(to_lunar(NaiveDate::from_ymd_opt(2101, 1, 1).unwrap()).is_none());
    }

    #[test]
    fn test_table_start_is_in_range() {
        // 1920-01-01 is the earliest birth date accepted and sits inside the
        // table: lunar 1919-11-11.
        let lunar = to_lunar(NaiveDate::from_ymd_opt(1920, 1, 1).unwrap()).unwrap();
        assert_eq!((lunar.year, lunar.month, lunar.day), (1919, 11, 11));
    }
}
