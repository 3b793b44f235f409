pub mod calendar;
pub mod config;
pub mod profile;
pub mod report;
pub mod session;
pub mod task;

use chrono::NaiveDate;
use pastor_planner_core::{Config, Planner};

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Fresh session from the stored configuration.
pub fn open_planner() -> Result<Planner, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    Ok(Planner::from_config(&config, today())?)
}
