//! Weather collaborator boundary.
//!
//! The actual forecast fetch lives outside this crate; whatever supplies it
//! hands over a [`WeatherReport`]. On any fetch failure the collaborator is
//! expected to substitute [`WeatherReport::fallback`], so the engine never
//! sees an error, only a condition.

use serde::Serialize;

use crate::domain::types::WeatherCondition;

#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub icon: String,
    pub temperature: String,
    pub condition: WeatherCondition,
}

impl WeatherReport {
    /// Report built from a KMA precipitation code (PTY) and temperature.
    /// 0 = none, 1/5 = rain forms, 2/6 = snow forms, everything else cloudy.
    pub fn from_precipitation_code(code: u8, temperature_c: &str) -> WeatherReport {
        let (icon, condition) = match code {
            0 => ("☀️", WeatherCondition::Clear),
            1 | 5 => ("☔", WeatherCondition::Rain),
            2 | 6 => ("🌨️", WeatherCondition::Snow),
            _ => ("☁️", WeatherCondition::Cloudy),
        };
        WeatherReport {
            icon: icon.to_string(),
            temperature: format!("{temperature_c}℃"),
            condition,
        }
    }

    /// Substitute report for a failed or timed-out fetch.
    pub fn fallback() -> WeatherReport {
        WeatherReport {
            icon: "📡".to_string(),
            temperature: "수신불가".to_string(),
            condition: WeatherCondition::Cloudy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precipitation_code_mapping() {
        assert_eq!(
            WeatherReport::from_precipitation_code(0, "21").condition,
            WeatherCondition::Clear
        );
        assert_eq!(
            WeatherReport::from_precipitation_code(1, "14").condition,
            WeatherCondition::Rain
        );
        assert_eq!(
            WeatherReport::from_precipitation_code(5, "14").condition,
            WeatherCondition::Rain
        );
        assert_eq!(
            WeatherReport::from_precipitation_code(2, "-1").condition,
            WeatherCondition::Snow
        );
        assert_eq!(
            WeatherReport::from_precipitation_code(3, "18").condition,
            WeatherCondition::Cloudy
        );
    }

    #[test]
    fn test_fallback_is_cloudy() {
        let report = WeatherReport::fallback();
        assert_eq!(report.condition, WeatherCondition::Cloudy);
        assert_eq!(report.temperature, "수신불가");
        assert_eq!(report.icon, "📡");
    }
}
