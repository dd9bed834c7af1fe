//! Error types for nunchi-radar.
//!
//! Template-bank gaps are load-time failures, never runtime fallbacks.
//! Unknown MBTI / weather strings are rejected at the parse boundary so the
//! composition engine only ever sees valid enum values.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A fully-enumerated key is missing a phrase list, or the compatibility
    /// matrix is incomplete. Raised by `templates::validate()` at startup.
    #[error("template bank error: {0}")]
    TemplateBank(String),

    /// Not one of the 16 MBTI codes.
    #[error("unknown MBTI code: {0}")]
    UnknownMbti(String),

    /// Not one of the recognized weather condition strings.
    #[error("unknown weather condition: {0}")]
    UnknownWeather(String),

    /// Birth date before the supported range (1920-01-01).
    #[error("birth date out of supported range: {0}")]
    BirthDateRange(chrono::NaiveDate),
}

pub type Result<T> = std::result::Result<T, Error>;
