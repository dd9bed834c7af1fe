//! Calendar math: pure date-to-attribute derivations.
//!
//! Everything takes the date (and hour) as a parameter instead of reading the
//! clock, so the whole module is deterministic and testable.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::domain::holiday::HolidayCalendar;
use crate::domain::lunar::to_lunar;
use crate::domain::types::{Animal, DayType, Season, SpecialDay, TimeSlot, ZodiacSign};
use crate::error::{Error, Result};

/// Earliest birth date the caller may hand over.
pub const MIN_BIRTH_DATE: (i32, u32, u32) = (1920, 1, 1);

pub fn check_birth_date(birth: NaiveDate) -> Result<()> {
    let (y, m, d) = MIN_BIRTH_DATE;
    let min = NaiveDate::from_ymd_opt(y, m, d).expect("1920-01-01 is a valid date");
    if birth < min {
        return Err(Error::BirthDateRange(birth));
    }
    Ok(())
}

/// Zodiac sign from month and day. Ranges carry the sign's *end* day as the
/// upper bound; everything past Sagittarius wraps into Capricorn
/// (Dec 23 - Jan 19).
pub fn zodiac_sign_for(day: u32, month: u32) -> ZodiacSign {
    let md = month * 100 + day;
    match md {
        120..=218 => ZodiacSign::Aquarius,
        219..=320 => ZodiacSign::Pisces,
        321..=419 => ZodiacSign::Aries,
        420..=520 => ZodiacSign::Taurus,
        521..=621 => ZodiacSign::Gemini,
        622..=722 => ZodiacSign::Cancer,
        723..=822 => ZodiacSign::Leo,
        823..=922 => ZodiacSign::Virgo,
        923..=1022 => ZodiacSign::Libra,
        1023..=1122 => ZodiacSign::Scorpio,
        1123..=1224 => ZodiacSign::Sagittarius,
        _ => ZodiacSign::Capricorn,
    }
}

/// The "start of spring" (ipchun) cutoff for a given year. A hand-maintained
/// approximation of the astronomical solar term, kept verbatim: two exception
/// years, a leap-year heuristic for 1920-1984, and Feb 4 otherwise.
pub fn ipchun_date(year: i32) -> NaiveDate {
    let day = match year {
        2021 | 2025 => 3,
        y if (1920..=1984).contains(&y) && y % 4 == 0 => 5,
        _ => 4,
    };
    NaiveDate::from_ymd_opt(year, 2, day).expect("early February is always valid")
}

/// Animal year for a date. Dates before the year's ipchun cutoff belong to
/// the previous animal year.
pub fn animal_year_for(date: NaiveDate) -> Animal {
    let year = date.year();
    let effective = if date < ipchun_date(year) { year - 1 } else { year };
    Animal::from_cycle_year(effective)
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Day-type classification, first match wins:
/// holiday, then pre-holiday (weekdays only), then weekend, Monday, Friday.
pub fn day_type(date: NaiveDate, holidays: &dyn HolidayCalendar) -> (DayType, Option<String>) {
    if let Some(name) = holidays.holiday_name(date) {
        return (DayType::Holiday, Some(name));
    }

    let tomorrow = date + Duration::days(1);
    if !is_weekend(date) && (holidays.is_holiday(tomorrow) || is_weekend(tomorrow)) {
        return (DayType::PreHoliday, None);
    }

    if is_weekend(date) {
        return (DayType::Weekend, None);
    }

    match date.weekday() {
        Weekday::Mon => (DayType::Monday, None),
        Weekday::Fri => (DayType::Friday, None),
        _ => (DayType::Weekday, None),
    }
}

/// Season window for a date. The ranges cover the whole year; the trailing
/// Spring arm is unreachable in practice but keeps the function total.
pub fn season_for(date: NaiveDate) -> Season {
    let (month, day) = (date.month(), date.day());
    if month == 1 && day <= 7 {
        Season::NewYear
    } else if month == 12 && day >= 20 {
        Season::YearEnd
    } else if (3..=5).contains(&month) {
        Season::Spring
    } else if (month == 6 && day >= 15) || (month == 7 && day <= 20) {
        Season::RainySeason
    } else if month == 6 {
        Season::EarlySummer
    } else if month == 7 || month == 8 {
        Season::MidSummer
    } else if (9..=11).contains(&month) {
        Season::Autumn
    } else {
        Season::Spring
    }
}

/// Time slot from the hour of day. Boundaries belong to the later slot.
pub fn time_slot_for(hour: u32) -> TimeSlot {
    match hour {
        6..=8 => TimeSlot::Commute,
        9..=11 => TimeSlot::Morning,
        12..=13 => TimeSlot::Lunch,
        14..=17 => TimeSlot::Afternoon,
        _ => TimeSlot::AfterWork,
    }
}

/// Special-day flags for `today`, evaluated independently. Order is stable so
/// the banner messages come out in a fixed order.
pub fn special_days(
    birth: NaiveDate,
    today: NaiveDate,
    holidays: &dyn HolidayCalendar,
) -> Vec<SpecialDay> {
    let mut flags = Vec::new();

    if birth.month() == today.month() && birth.day() == today.day() {
        flags.push(SpecialDay::SolarBirthday);
    }

    if let (Some(birth_lunar), Some(today_lunar)) = (to_lunar(birth), to_lunar(today)) {
        if birth_lunar.same_month_day(&today_lunar) {
            flags.push(SpecialDay::LunarBirthday);
        }
    }

    let is_holiday_today = holidays.is_holiday(today);
    if is_holiday_today {
        flags.push(SpecialDay::Holiday);
    }

    let tomorrow = today + Duration::days(1);
    if (holidays.is_holiday(tomorrow) || is_weekend(tomorrow))
        && !is_weekend(today)
        && !is_holiday_today
    {
        flags.push(SpecialDay::PreHoliday);
    }

    if today.day() <= 3 {
        flags.push(SpecialDay::MonthStart);
    }
    if today.day() >= 28 {
        flags.push(SpecialDay::MonthEnd);
    }
    if matches!(today.month(), 3 | 6 | 9 | 12) && today.day() >= 25 {
        flags.push(SpecialDay::QuarterEnd);
    }
    if today.month() == 1 && today.day() <= 7 {
        flags.push(SpecialDay::YearStart);
    }
    if today.month() == 12 && today.day() >= 20 {
        flags.push(SpecialDay::YearEnd);
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoHolidays;
    impl HolidayCalendar for NoHolidays {
        fn holiday_name(&self, _date: NaiveDate) -> Option<String> {
            None
        }
    }

    struct FixedHolidays(Vec<(NaiveDate, &'static str)>);
    impl HolidayCalendar for FixedHolidays {
        fn holiday_name(&self, date: NaiveDate) -> Option<String> {
            self.0
                .iter()
                .find(|(d, _)| *d == date)
                .map(|(_, name)| (*name).to_string())
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_zodiac_boundaries() {
        // Aquarius ends Feb 18, Pisces starts Feb 19.
        assert_eq!(zodiac_sign_for(18, 2), ZodiacSign::Aquarius);
        assert_eq!(zodiac_sign_for(19, 2), ZodiacSign::Pisces);
        // Capricorn wraps the year boundary.
        assert_eq!(zodiac_sign_for(25, 12), ZodiacSign::Capricorn);
        assert_eq!(zodiac_sign_for(1, 1), ZodiacSign::Capricorn);
        assert_eq!(zodiac_sign_for(19, 1), ZodiacSign::Capricorn);
        assert_eq!(zodiac_sign_for(20, 1), ZodiacSign::Aquarius);
    }

    #[test]
    fn test_ipchun_rule_table() {
        assert_eq!(ipchun_date(2025), d(2025, 2, 3));
        assert_eq!(ipchun_date(2021), d(2021, 2, 3));
        assert_eq!(ipchun_date(1984), d(1984, 2, 5));
        assert_eq!(ipchun_date(1990), d(1990, 2, 4));
        assert_eq!(ipchun_date(2024), d(2024, 2, 4));
    }

    #[test]
    fn test_animal_year_cutover() {
        // Before the 2025-02-03 cutoff the 2024 animal (Dragon) still applies.
        assert_eq!(animal_year_for(d(2025, 2, 2)), Animal::Dragon);
        assert_eq!(animal_year_for(d(2025, 2, 3)), Animal::Snake);
        // 1990-01-01 is before ipchun, so it is still a Snake year (1989).
        assert_eq!(animal_year_for(d(1990, 1, 1)), Animal::Snake);
        assert_eq!(animal_year_for(d(1990, 6, 1)), Animal::Horse);
    }

    #[test]
    fn test_day_type_priority() {
        let cal = FixedHolidays(vec![(d(2025, 6, 4), "임시공휴일"), (d(2025, 6, 6), "현충일")]);

        // A Wednesday holiday beats everything else.
        let (dt, name) = day_type(d(2025, 6, 4), &cal);
        assert_eq!(dt, DayType::Holiday);
        assert_eq!(name.as_deref(), Some("임시공휴일"));

        // Thursday before a Friday holiday is a pre-holiday.
        let (dt, name) = day_type(d(2025, 6, 5), &cal);
        assert_eq!(dt, DayType::PreHoliday);
        assert!(name.is_none());

        // Tuesday with nothing around it is a plain weekday.
        assert_eq!(day_type(d(2025, 6, 10), &NoHolidays).0, DayType::Weekday);
        // Mondays get their own type, weekends theirs.
        assert_eq!(day_type(d(2025, 6, 9), &NoHolidays).0, DayType::Monday);
        assert_eq!(day_type(d(2025, 6, 7), &NoHolidays).0, DayType::Weekend);
        // A plain Friday precedes the weekend, so it classifies as pre-holiday.
        assert_eq!(day_type(d(2025, 6, 13), &NoHolidays).0, DayType::PreHoliday);
    }

    #[test]
    fn test_season_windows() {
        assert_eq!(season_for(d(2025, 1, 3)), Season::NewYear);
        assert_eq!(season_for(d(2025, 1, 8)), Season::Spring); // falls through to default
        assert_eq!(season_for(d(2025, 4, 10)), Season::Spring);
        assert_eq!(season_for(d(2025, 6, 10)), Season::EarlySummer);
        assert_eq!(season_for(d(2025, 6, 15)), Season::RainySeason);
        assert_eq!(season_for(d(2025, 7, 20)), Season::RainySeason);
        assert_eq!(season_for(d(2025, 7, 21)), Season::MidSummer);
        assert_eq!(season_for(d(2025, 8, 5)), Season::MidSummer);
        assert_eq!(season_for(d(2025, 10, 1)), Season::Autumn);
        assert_eq!(season_for(d(2025, 11, 30)), Season::Autumn);
        // December 1-19 matches no window and falls through to the default.
        assert_eq!(season_for(d(2025, 12, 1)), Season::Spring);
        assert_eq!(season_for(d(2025, 12, 19)), Season::Spring);
        assert_eq!(season_for(d(2025, 12, 20)), Season::YearEnd);
    }

    #[test]
    fn test_time_slots_half_open() {
        assert_eq!(time_slot_for(5), TimeSlot::AfterWork);
        assert_eq!(time_slot_for(6), TimeSlot::Commute);
        assert_eq!(time_slot_for(8), TimeSlot::Commute);
        assert_eq!(time_slot_for(9), TimeSlot::Morning);
        assert_eq!(time_slot_for(12), TimeSlot::Lunch);
        assert_eq!(time_slot_for(13), TimeSlot::Lunch);
        assert_eq!(time_slot_for(14), TimeSlot::Afternoon);
        assert_eq!(time_slot_for(17), TimeSlot::Afternoon);
        assert_eq!(time_slot_for(18), TimeSlot::AfterWork);
        assert_eq!(time_slot_for(23), TimeSlot::AfterWork);
    }

    #[test]
    fn test_special_days_month_and_year_bounds() {
        let birth = d(1990, 5, 10);

        let flags = special_days(birth, d(2025, 1, 2), &NoHolidays);
        assert!(flags.contains(&SpecialDay::MonthStart));
        assert!(flags.contains(&SpecialDay::YearStart));
        assert!(!flags.contains(&SpecialDay::MonthEnd));

        let flags = special_days(birth, d(2025, 12, 29), &NoHolidays);
        assert!(flags.contains(&SpecialDay::MonthEnd));
        assert!(flags.contains(&SpecialDay::QuarterEnd));
        assert!(flags.contains(&SpecialDay::YearEnd));
    }

    #[test]
    fn test_solar_birthday_flag() {
        let birth = d(1990, 6, 10);
        let flags = special_days(birth, d(2025, 6, 10), &NoHolidays);
        assert!(flags.contains(&SpecialDay::SolarBirthday));
    }

    #[test]
    fn test_holiday_suppresses_pre_holiday_flag() {
        // Wednesday and Thursday both holidays: Wednesday must flag Holiday
        // only, not PreHoliday as well.
        let cal = FixedHolidays(vec![(d(2025, 6, 4), "휴일"), (d(2025, 6, 5), "휴일")]);
        let flags = special_days(d(1990, 1, 1), d(2025, 6, 4), &cal);
        assert!(flags.contains(&SpecialDay::Holiday));
        assert!(!flags.contains(&SpecialDay::PreHoliday));
    }

    #[test]
    fn test_birth_date_range_check() {
        assert!(check_birth_date(d(1920, 1, 1)).is_ok());
        assert!(check_birth_date(d(1919, 12, 31)).is_err());
    }
}
