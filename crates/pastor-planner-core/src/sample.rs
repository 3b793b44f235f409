//! Sample tasks used to seed a new session.

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::task::{Category, SubType, Task, TaskDraft};

fn hm(hour: u32, minute: u32) -> Result<NaiveTime, ValidationError> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        ValidationError::invalid("time", format!("{hour:02}:{minute:02} is not a time of day"))
    })
}

/// Sermon preparation, morning devotional and family dinner on `day`.
///
/// # Errors
///
/// Returns the first draft that fails to commit.
pub fn sample_tasks(day: NaiveDate) -> Result<Vec<Task>, ValidationError> {
    let drafts = [
        TaskDraft::new("Sermon prep: Romans", Category::Ministry, day)
            .with_sub_type(SubType::SermonPrep)
            .with_times(hm(9, 0)?, hm(11, 0)?)
            .recurring(true)
            .with_bible_reference("Romans 8:1-17")
            .with_notes("Focus on life in the Spirit."),
        TaskDraft::new("Morning devotional", Category::PersonalGrowth, day)
            .with_sub_type(SubType::Devotional)
            .with_times(hm(6, 0)?, hm(7, 0)?)
            .recurring(true),
        TaskDraft::new("Family dinner", Category::Family, day)
            .with_sub_type(SubType::Leisure)
            .with_times(hm(19, 0)?, hm(21, 0)?),
    ];

    commit_all(drafts)
}

fn commit_all(drafts: impl IntoIterator<Item = TaskDraft>) -> Result<Vec<Task>, ValidationError> {
    drafts.into_iter().map(TaskDraft::into_task).collect()
}
