//! Projection of the task collection onto a Sunday-anchored week.
//!
//! Tasks are placed by the date part of `start_time` only. Recurring tasks
//! are not expanded: they appear on their stored date and nowhere else.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::profile::{weekday_index, UserProfile, WEEKDAY_NAMES};
use crate::task::Task;

/// One column of the weekly calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    /// 0 = Sunday
    pub weekday: u8,
    pub weekday_name: String,
    /// Display flag; the rest day has no effect on placement.
    pub is_rest_day: bool,
    pub is_today: bool,
    /// Sorted ascending by start time.
    pub tasks: Vec<Task>,
}

/// Seven consecutive days starting on Sunday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekView {
    pub days: Vec<DayBucket>,
}

impl WeekView {
    pub fn start(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }

    pub fn task_count(&self) -> usize {
        self.days.iter().map(|d| d.tasks.len()).sum()
    }
}

/// The 7 dates of the week containing `reference`, Sunday first.
pub fn week_dates(reference: NaiveDate) -> [NaiveDate; 7] {
    let offset = u64::from(weekday_index(reference));
    let sunday = reference
        .checked_sub_days(Days::new(offset))
        .unwrap_or(reference);

    let mut dates = [sunday; 7];
    for (i, slot) in dates.iter_mut().enumerate() {
        *slot = sunday.checked_add_days(Days::new(i as u64)).unwrap_or(sunday);
    }
    dates
}

/// Partition `tasks` into the week containing `reference`.
///
/// `today` only sets the `is_today` flag.
pub fn project_week(
    tasks: &[Task],
    reference: NaiveDate,
    profile: &UserProfile,
    today: NaiveDate,
) -> WeekView {
    let days = week_dates(reference)
        .into_iter()
        .enumerate()
        .map(|(index, date)| {
            let mut day_tasks: Vec<Task> = tasks
                .iter()
                .filter(|task| task.date() == date)
                .cloned()
                .collect();
            day_tasks.sort_by_key(|task| task.start_time);

            DayBucket {
                date,
                weekday: index as u8,
                weekday_name: WEEKDAY_NAMES[index].to_string(),
                is_rest_day: index as u8 == profile.rest_day(),
                is_today: date == today,
                tasks: day_tasks,
            }
        })
        .collect();

    WeekView { days }
}
