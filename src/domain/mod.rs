pub mod calendar;
pub mod compose;
pub mod holiday;
pub mod lunar;
pub mod templates;
pub mod types;
pub mod weather;
