//! Plain-text share summary with the fixed label format.

use chrono::{Datelike, NaiveDate};

use crate::domain::compose::FortuneResult;

const WEEKDAYS_KR: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

pub fn weekday_kr(date: NaiveDate) -> &'static str {
    WEEKDAYS_KR[date.weekday().num_days_from_monday() as usize]
}

/// Copy-paste summary for sharing. The main line is cut at 30 characters,
/// same as the report card.
pub fn share_text(
    fortune: &FortuneResult,
    today: NaiveDate,
    app_name: &str,
    share_url: &str,
) -> String {
    let main_short: String = fortune.main_line.chars().take(30).collect();
    format!(
        "[{app_name}] {date} ({weekday}) {day_type}\n\n\
         🔮 한줄: {main_short}\n\
         🌅 오전: {morning}\n\
         🌆 오후: {afternoon}\n\
         🎲 변수: {random}\n\
         🍀 행운템: {item}\n\n\
         👉 나도 해보기: {share_url}",
        date = today.format("%m/%d"),
        weekday = weekday_kr(today),
        day_type = fortune.day_type,
        morning = fortune.morning_tip,
        afternoon = fortune.afternoon_tip,
        random = fortune.random_variable,
        item = fortune.lucky_item,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compose::compose;
    use crate::domain::holiday::HolidayCalendar;
    use crate::domain::types::{Animal, Mbti, WeatherCondition, ZodiacSign};
    use chrono::NaiveDate;

    struct NoHolidays;
    impl HolidayCalendar for NoHolidays {
        fn holiday_name(&self, _date: NaiveDate) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_weekday_abbreviations() {
        // 2025-06-09 was a Monday.
        assert_eq!(weekday_kr(NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()), "월");
        assert_eq!(weekday_kr(NaiveDate::from_ymd_opt(2025, 6, 13).unwrap()), "금");
        assert_eq!(weekday_kr(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()), "일");
    }

    #[test]
    fn test_share_text_shape() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let now = today.and_hms_opt(12, 30, 0).unwrap();
        let fortune = compose(
            Mbti::Intj,
            ZodiacSign::Capricorn,
            Animal::Snake,
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            WeatherCondition::Clear,
            today,
            now,
            &NoHolidays,
        );

        let text = share_text(&fortune, today, "오늘의 눈치 레이더", "https://nunchi-radar.streamlit.app");

        assert!(text.starts_with("[오늘의 눈치 레이더] 06/10 (화) 평일\n"));
        assert!(text.contains("🔮 한줄: "));
        assert!(text.contains(&format!("🍀 행운템: {}", fortune.lucky_item)));
        assert!(text.ends_with("👉 나도 해보기: https://nunchi-radar.streamlit.app"));
    }

    #[test]
    fn test_main_line_truncated_to_30_chars() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let now = today.and_hms_opt(9, 0, 0).unwrap();
        let mut fortune = compose(
            Mbti::Entj,
            ZodiacSign::Aries,
            Animal::Horse,
            NaiveDate::from_ymd_opt(1990, 4, 1).unwrap(),
            WeatherCondition::Rain,
            today,
            now,
            &NoHolidays,
        );
        fortune.main_line = "가".repeat(50);

        let text = share_text(&fortune, today, "앱", "https://example.com");
        let line = text
            .lines()
            .find(|l| l.starts_with("🔮 한줄: "))
            .expect("main line present");
        let shown = line.trim_start_matches("🔮 한줄: ");
        assert_eq!(shown.chars().count(), 30);
    }
}
