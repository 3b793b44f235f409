//! Weekly calendar projection.

pub mod week;

pub use week::{project_week, week_dates, DayBucket, WeekView};
