//! Enumerated dimensions of the fortune engine.
//!
//! Every dimension the template bank is keyed by lives here. Display strings
//! are the Korean labels the templates and the share text use; `FromStr` is
//! implemented where the value arrives as free text from the caller.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the 16 MBTI codes. Used purely as a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mbti {
    Istj,
    Isfj,
    Infj,
    Intj,
    Istp,
    Isfp,
    Infp,
    Intp,
    Estp,
    Esfp,
    Enfp,
    Entp,
    Estj,
    Esfj,
    Enfj,
    Entj,
}

impl Mbti {
    pub const ALL: [Mbti; 16] = [
        Mbti::Istj,
        Mbti::Isfj,
        Mbti::Infj,
        Mbti::Intj,
        Mbti::Istp,
        Mbti::Isfp,
        Mbti::Infp,
        Mbti::Intp,
        Mbti::Estp,
        Mbti::Esfp,
        Mbti::Enfp,
        Mbti::Entp,
        Mbti::Estj,
        Mbti::Esfj,
        Mbti::Enfj,
        Mbti::Entj,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Mbti::Istj => "ISTJ",
            Mbti::Isfj => "ISFJ",
            Mbti::Infj => "INFJ",
            Mbti::Intj => "INTJ",
            Mbti::Istp => "ISTP",
            Mbti::Isfp => "ISFP",
            Mbti::Infp => "INFP",
            Mbti::Intp => "INTP",
            Mbti::Estp => "ESTP",
            Mbti::Esfp => "ESFP",
            Mbti::Enfp => "ENFP",
            Mbti::Entp => "ENTP",
            Mbti::Estj => "ESTJ",
            Mbti::Esfj => "ESFJ",
            Mbti::Enfj => "ENFJ",
            Mbti::Entj => "ENTJ",
        }
    }
}

impl fmt::Display for Mbti {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Mbti {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Mbti::ALL
            .iter()
            .copied()
            .find(|m| m.code() == upper)
            .ok_or_else(|| Error::UnknownMbti(s.to_string()))
    }
}

/// Western zodiac sign, derived from the solar birth month/day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZodiacSign::Aquarius => "물병자리",
            ZodiacSign::Pisces => "물고기자리",
            ZodiacSign::Aries => "양자리",
            ZodiacSign::Taurus => "황소자리",
            ZodiacSign::Gemini => "쌍둥이자리",
            ZodiacSign::Cancer => "게자리",
            ZodiacSign::Leo => "사자자리",
            ZodiacSign::Virgo => "처녀자리",
            ZodiacSign::Libra => "천칭자리",
            ZodiacSign::Scorpio => "전갈자리",
            ZodiacSign::Sagittarius => "사수자리",
            ZodiacSign::Capricorn => "염소자리",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ZodiacSign::Aquarius => "🏺",
            ZodiacSign::Pisces => "🐟",
            ZodiacSign::Aries => "🐏",
            ZodiacSign::Taurus => "🐂",
            ZodiacSign::Gemini => "👯",
            ZodiacSign::Cancer => "🦀",
            ZodiacSign::Leo => "🦁",
            ZodiacSign::Virgo => "🧚",
            ZodiacSign::Libra => "⚖️",
            ZodiacSign::Scorpio => "🦂",
            ZodiacSign::Sagittarius => "🏹",
            ZodiacSign::Capricorn => "🐐",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lunar-calendar animal year (12-year cycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Animal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Animal {
    pub const ALL: [Animal; 12] = [
        Animal::Rat,
        Animal::Ox,
        Animal::Tiger,
        Animal::Rabbit,
        Animal::Dragon,
        Animal::Snake,
        Animal::Horse,
        Animal::Goat,
        Animal::Monkey,
        Animal::Rooster,
        Animal::Dog,
        Animal::Pig,
    ];

    /// Cycle anchored so that `year % 12 == 0` is a Monkey year (e.g. 2016).
    pub const CYCLE: [Animal; 12] = [
        Animal::Monkey,
        Animal::Rooster,
        Animal::Dog,
        Animal::Pig,
        Animal::Rat,
        Animal::Ox,
        Animal::Tiger,
        Animal::Rabbit,
        Animal::Dragon,
        Animal::Snake,
        Animal::Horse,
        Animal::Goat,
    ];

    pub fn from_cycle_year(year: i32) -> Animal {
        Animal::CYCLE[year.rem_euclid(12) as usize]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Animal::Rat => "쥐",
            Animal::Ox => "소",
            Animal::Tiger => "호랑이",
            Animal::Rabbit => "토끼",
            Animal::Dragon => "용",
            Animal::Snake => "뱀",
            Animal::Horse => "말",
            Animal::Goat => "양",
            Animal::Monkey => "원숭이",
            Animal::Rooster => "닭",
            Animal::Dog => "개",
            Animal::Pig => "돼지",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Animal::Rat => "🐭",
            Animal::Ox => "🐮",
            Animal::Tiger => "🐯",
            Animal::Rabbit => "🐰",
            Animal::Dragon => "🐲",
            Animal::Snake => "🐍",
            Animal::Horse => "🐴",
            Animal::Goat => "🐑",
            Animal::Monkey => "🐵",
            Animal::Rooster => "🐔",
            Animal::Dog => "🐶",
            Animal::Pig => "🐷",
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutually exclusive classification of a calendar date, evaluated in
/// priority order: Holiday > PreHoliday > Weekend > Monday > Friday > Weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DayType {
    Monday,
    Friday,
    Weekday,
    Weekend,
    Holiday,
    PreHoliday,
}

impl DayType {
    pub const ALL: [DayType; 6] = [
        DayType::Monday,
        DayType::Friday,
        DayType::Weekday,
        DayType::Weekend,
        DayType::Holiday,
        DayType::PreHoliday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Monday => "월요일",
            DayType::Friday => "금요일",
            DayType::Weekday => "평일",
            DayType::Weekend => "주말",
            DayType::Holiday => "공휴일",
            DayType::PreHoliday => "연휴전날",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Season/mood window derived from month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    NewYear,
    Spring,
    EarlySummer,
    RainySeason,
    MidSummer,
    Autumn,
    YearEnd,
}

impl Season {
    pub const ALL: [Season; 7] = [
        Season::NewYear,
        Season::Spring,
        Season::EarlySummer,
        Season::RainySeason,
        Season::MidSummer,
        Season::Autumn,
        Season::YearEnd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::NewYear => "신년",
            Season::Spring => "봄",
            Season::EarlySummer => "초여름",
            Season::RainySeason => "장마",
            Season::MidSummer => "한여름",
            Season::Autumn => "가을",
            Season::YearEnd => "연말",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Office-day time slot, half-open hour ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeSlot {
    Commute,
    Morning,
    Lunch,
    Afternoon,
    AfterWork,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 5] = [
        TimeSlot::Commute,
        TimeSlot::Morning,
        TimeSlot::Lunch,
        TimeSlot::Afternoon,
        TimeSlot::AfterWork,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Commute => "출근길",
            TimeSlot::Morning => "오전",
            TimeSlot::Lunch => "점심",
            TimeSlot::Afternoon => "오후",
            TimeSlot::AfterWork => "퇴근후",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weather condition as handed over by the weather collaborator. Anything
/// the collaborator cannot classify arrives as Cloudy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Rain,
    Snow,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Clear,
        WeatherCondition::Cloudy,
        WeatherCondition::Rain,
        WeatherCondition::Snow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "맑음",
            WeatherCondition::Cloudy => "흐림",
            WeatherCondition::Rain => "비",
            WeatherCondition::Snow => "눈",
        }
    }

    /// Lenient variant of `FromStr` for collaborator output: unrecognized
    /// strings map to Cloudy, the documented soft fallback.
    pub fn from_report(s: &str) -> WeatherCondition {
        s.parse().unwrap_or(WeatherCondition::Cloudy)
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherCondition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeatherCondition::ALL
            .iter()
            .copied()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| Error::UnknownWeather(s.to_string()))
    }
}

/// Non-exclusive special-day flags, evaluated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpecialDay {
    SolarBirthday,
    LunarBirthday,
    Holiday,
    PreHoliday,
    MonthStart,
    MonthEnd,
    QuarterEnd,
    YearStart,
    YearEnd,
}

impl SpecialDay {
    pub const ALL: [SpecialDay; 9] = [
        SpecialDay::SolarBirthday,
        SpecialDay::LunarBirthday,
        SpecialDay::Holiday,
        SpecialDay::PreHoliday,
        SpecialDay::MonthStart,
        SpecialDay::MonthEnd,
        SpecialDay::QuarterEnd,
        SpecialDay::YearStart,
        SpecialDay::YearEnd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialDay::SolarBirthday => "양력생일",
            SpecialDay::LunarBirthday => "음력생일",
            SpecialDay::Holiday => "공휴일",
            SpecialDay::PreHoliday => "연휴전날",
            SpecialDay::MonthStart => "월초",
            SpecialDay::MonthEnd => "월말",
            SpecialDay::QuarterEnd => "분기말",
            SpecialDay::YearStart => "연초",
            SpecialDay::YearEnd => "연말",
        }
    }
}

impl fmt::Display for SpecialDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative animal-by-sign compatibility tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompatTier {
    Good,
    Neutral,
    Caution,
}

impl CompatTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompatTier::Good => "좋음",
            CompatTier::Neutral => "보통",
            CompatTier::Caution => "주의",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CompatTier::Good => "🟢",
            CompatTier::Neutral => "🟡",
            CompatTier::Caution => "🔴",
        }
    }
}

impl fmt::Display for CompatTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mbti_roundtrip() {
        for mbti in Mbti::ALL {
            assert_eq!(mbti.code().parse::<Mbti>().unwrap(), mbti);
        }
        assert_eq!("intj".parse::<Mbti>().unwrap(), Mbti::Intj);
        assert!("XXXX".parse::<Mbti>().is_err());
    }

    #[test]
    fn test_animal_cycle_anchor() {
        // 2016 was a Monkey year, 2020 a Rat year.
        assert_eq!(Animal::from_cycle_year(2016), Animal::Monkey);
        assert_eq!(Animal::from_cycle_year(2020), Animal::Rat);
        assert_eq!(Animal::from_cycle_year(1990), Animal::Horse);
    }

    #[test]
    fn test_weather_from_report_falls_back_to_cloudy() {
        assert_eq!(WeatherCondition::from_report("맑음"), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_report("수신불가"), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_report(""), WeatherCondition::Cloudy);
    }
}
