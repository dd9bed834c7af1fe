#[cfg(test)]
mod tests {
    use crate::domain::calendar::{animal_year_for, zodiac_sign_for};
    use crate::domain::compose::compose;
    use crate::domain::holiday::{HolidayCalendar, KoreanHolidays};
    use crate::domain::templates;
    use crate::domain::types::{Animal, DayType, Mbti, WeatherCondition, ZodiacSign};
    use crate::share::share_text;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn test_full_scenario_with_bundled_calendar() {
        let birth = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let zodiac = zodiac_sign_for(birth.day(), birth.month());
        let animal = animal_year_for(birth);

        // Jan 1 sits in the Capricorn wrap; 1990-01-01 is before ipchun,
        // so the 1989 animal (Snake) applies.
        assert_eq!(zodiac, ZodiacSign::Capricorn);
        assert_eq!(animal, Animal::Snake);

        let cal = KoreanHolidays::new();

        // 2025-03-01 was a Saturday and Samiljeol: holiday wins over weekend.
        let holiday = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let fortune = compose(
            Mbti::Intj,
            zodiac,
            animal,
            birth,
            WeatherCondition::Clear,
            holiday,
            holiday.and_hms_opt(10, 0, 0).unwrap(),
            &cal,
        );
        assert_eq!(fortune.day_type, DayType::Holiday);
        assert_eq!(fortune.holiday_name.as_deref(), Some("삼일절"));
        assert!(!fortune.main_line.is_empty());
        assert!(templates::mbti_fortune(Mbti::Intj)
            .iter()
            .any(|p| fortune.main_line.starts_with(p)));

        // A plain Monday with nothing adjacent.
        let monday = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
        assert!(!cal.is_holiday(monday));
        let fortune = compose(
            Mbti::Intj,
            zodiac,
            animal,
            birth,
            WeatherCondition::Clear,
            monday,
            monday.and_hms_opt(8, 30, 0).unwrap(),
            &cal,
        );
        assert_eq!(fortune.day_type, DayType::Monday);

        let text = share_text(&fortune, monday, "오늘의 눈치 레이더", "https://nunchi-radar.streamlit.app");
        assert!(text.starts_with("[오늘의 눈치 레이더] 06/09 (월) 월요일\n"));
        assert!(text.ends_with("https://nunchi-radar.streamlit.app"));
    }

    #[test]
    fn test_fortune_stable_within_day_across_weather_independent_fields() {
        // Weather only feeds the lunch tip; everything else must be stable
        // for a fixed (date, person, slot) regardless of the condition.
        let birth = NaiveDate::from_ymd_opt(1992, 11, 3).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
        let now = today.and_hms_opt(15, 0, 0).unwrap();
        let cal = KoreanHolidays::new();
        let zodiac = zodiac_sign_for(birth.day(), birth.month());
        let animal = animal_year_for(birth);

        let clear = compose(Mbti::Esfj, zodiac, animal, birth, WeatherCondition::Clear, today, now, &cal);
        let rain = compose(Mbti::Esfj, zodiac, animal, birth, WeatherCondition::Rain, today, now, &cal);

        assert_eq!(clear.main_line, rain.main_line);
        assert_eq!(clear.morning_tip, rain.morning_tip);
        assert_eq!(clear.warning, rain.warning);
        assert_ne!(
            templates::weather_lunch(WeatherCondition::Clear),
            templates::weather_lunch(WeatherCondition::Rain)
        );
    }
}
