//! Public-holiday calendar.
//!
//! The engine never hardcodes a calendar: callers inject anything that
//! implements [`HolidayCalendar`]. [`KoreanHolidays`] is the bundled
//! implementation, built from the fixed-date statutory holidays plus the
//! lunar-anchored ones (Seollal, Buddha's birthday, Chuseok) resolved through
//! the lunar conversion table. Substitute-holiday rules are not modeled.

use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::lunar::to_lunar;

pub trait HolidayCalendar {
    /// Display name of the holiday falling on `date`, if any.
    fn holiday_name(&self, date: NaiveDate) -> Option<String>;

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_name(date).is_some()
    }
}

/// Fixed-date Korean statutory holidays as (month, day, name).
const SOLAR_HOLIDAYS: &[(u32, u32, &str)] = &[
    (1, 1, "신정"),
    (3, 1, "삼일절"),
    (5, 5, "어린이날"),
    (6, 6, "현충일"),
    (8, 15, "광복절"),
    (10, 3, "개천절"),
    (10, 9, "한글날"),
    (12, 25, "기독탄신일"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct KoreanHolidays;

impl KoreanHolidays {
    pub fn new() -> Self {
        KoreanHolidays
    }

    fn lunar_holiday_name(date: NaiveDate) -> Option<&'static str> {
        let lunar = to_lunar(date)?;
        if !lunar.leap_month {
            match (lunar.month, lunar.day) {
                (1, 1) => return Some("설날"),
                (4, 8) => return Some("부처님오신날"),
                (8, 15) => return Some("추석"),
                _ => {}
            }
        }

        // The day before and after Seollal / Chuseok are holidays too.
        for neighbor in [date - Duration::days(1), date + Duration::days(1)] {
            if let Some(adjacent) = to_lunar(neighbor) {
                if !adjacent.leap_month {
                    match (adjacent.month, adjacent.day) {
                        (1, 1) => return Some("설날 연휴"),
                        (8, 15) => return Some("추석 연휴"),
                        _ => {}
                    }
                }
            }
        }

        None
    }
}

impl HolidayCalendar for KoreanHolidays {
    fn holiday_name(&self, date: NaiveDate) -> Option<String> {
        if let Some((_, _, name)) = SOLAR_HOLIDAYS
            .iter()
            .find(|(m, d, _)| *m == date.month() && *d == date.day())
        {
            return Some((*name).to_string());
        }
        Self::lunar_holiday_name(date).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_solar_holidays() {
        let cal = KoreanHolidays::new();
        let samiljeol = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(cal.holiday_name(samiljeol).as_deref(), Some("삼일절"));
        assert!(cal.is_holiday(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()));
        assert!(!cal.is_holiday(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()));
    }

    #[test]
    fn test_seollal_block_2025() {
        let cal = KoreanHolidays::new();
        assert_eq!(
            cal.holiday_name(NaiveDate::from_ymd_opt(2025, 1, 29).unwrap()).as_deref(),
            Some("설날")
        );
        assert_eq!(
            cal.holiday_name(NaiveDate::from_ymd_opt(2025, 1, 28).unwrap()).as_deref(),
            Some("설날 연휴")
        );
        assert_eq!(
            cal.holiday_name(NaiveDate::from_ymd_opt(2025, 1, 30).unwrap()).as_deref(),
            Some("설날 연휴")
        );
    }

    #[test]
    fn test_chuseok_2025() {
        let cal = KoreanHolidays::new();
        assert_eq!(
            cal.holiday_name(NaiveDate::from_ymd_opt(2025, 10, 6).unwrap()).as_deref(),
            Some("추석")
        );
        assert!(cal.is_holiday(NaiveDate::from_ymd_opt(2025, 10, 7).unwrap()));
    }
}
