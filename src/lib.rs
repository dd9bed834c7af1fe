pub mod config;
pub mod domain;
pub mod error;
pub mod share;

pub use domain::compose::{compose, Compatibility, FortuneResult};
pub use domain::holiday::{HolidayCalendar, KoreanHolidays};
pub use error::{Error, Result};

#[cfg(test)]
mod tests_end_to_end;
