//! Task types: categories, activity kinds, committed tasks and drafts.
//!
//! Every activity belongs to one of three life-balance categories. Each
//! activity kind (`SubType`) is nested under exactly one category, except
//! `Generic` which fits anywhere.
//!
//! ```text
//!   MINISTRY          SERMON_PREP  MEETING  SERVICE  VISITATION
//!   PERSONAL_GROWTH   DEVOTIONAL   INTERCESSION  STUDY  EXERCISE
//!   FAMILY            DATE_NIGHT   LEISURE  CHORE
//!   (any)             GENERIC
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ValidationError;

/// Top-level life-balance bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Pastoral work (orange)
    Ministry,
    /// Time with spouse and children (blue)
    Family,
    /// Devotional life, study and health (green)
    PersonalGrowth,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 3] = [Category::Ministry, Category::Family, Category::PersonalGrowth];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Ministry => "Ministry",
            Category::Family => "Family",
            Category::PersonalGrowth => "Personal Growth",
        }
    }

    /// Display color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Ministry => "#f97316",
            Category::Family => "#3b82f6",
            Category::PersonalGrowth => "#22c55e",
        }
    }

    /// Sub-type preselected when a form switches to this category.
    pub fn default_sub_type(&self) -> SubType {
        match self {
            Category::Ministry => SubType::SermonPrep,
            Category::Family => SubType::DateNight,
            Category::PersonalGrowth => SubType::Devotional,
        }
    }

    /// Sub-types nested under this category (excluding `Generic`).
    pub fn sub_types(&self) -> Vec<SubType> {
        SubType::ALL
            .iter()
            .copied()
            .filter(|st| st.category() == Some(*self))
            .collect()
    }

    /// Wire name, e.g. `PERSONAL_GROWTH`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ministry => "MINISTRY",
            Category::Family => "FAMILY",
            Category::PersonalGrowth => "PERSONAL_GROWTH",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "MINISTRY" => Ok(Category::Ministry),
            "FAMILY" => Ok(Category::Family),
            "PERSONAL_GROWTH" | "GROWTH" => Ok(Category::PersonalGrowth),
            _ => Err(ValidationError::invalid(
                "category",
                format!("unknown category '{s}' (expected ministry, family or personal-growth)"),
            )),
        }
    }
}

/// Finer-grained activity kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubType {
    SermonPrep,
    Meeting,
    /// Worship service
    Service,
    Visitation,
    Devotional,
    Intercession,
    Study,
    Exercise,
    /// Time with spouse or children
    DateNight,
    Leisure,
    Chore,
    /// Fallback kind with no category of its own
    Generic,
}

impl SubType {
    pub const ALL: [SubType; 12] = [
        SubType::SermonPrep,
        SubType::Meeting,
        SubType::Service,
        SubType::Visitation,
        SubType::Devotional,
        SubType::Intercession,
        SubType::Study,
        SubType::Exercise,
        SubType::DateNight,
        SubType::Leisure,
        SubType::Chore,
        SubType::Generic,
    ];

    /// The category this kind is nested under, `None` for `Generic`.
    pub fn category(&self) -> Option<Category> {
        match self {
            SubType::SermonPrep | SubType::Meeting | SubType::Service | SubType::Visitation => {
                Some(Category::Ministry)
            }
            SubType::Devotional | SubType::Intercession | SubType::Study | SubType::Exercise => {
                Some(Category::PersonalGrowth)
            }
            SubType::DateNight | SubType::Leisure | SubType::Chore => Some(Category::Family),
            SubType::Generic => None,
        }
    }

    /// Whether this kind may be used with `category`.
    pub fn fits(&self, category: Category) -> bool {
        self.category().map_or(true, |c| c == category)
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            SubType::SermonPrep => "Sermon Preparation",
            SubType::Meeting => "Meeting",
            SubType::Service => "Worship Service",
            SubType::Visitation => "Visitation",
            SubType::Devotional => "Devotional",
            SubType::Intercession => "Intercession",
            SubType::Study => "Study",
            SubType::Exercise => "Exercise",
            SubType::DateNight => "Time with Spouse/Children",
            SubType::Leisure => "Leisure",
            SubType::Chore => "Household Chore",
            SubType::Generic => "General",
        }
    }

    /// Wire name, e.g. `SERMON_PREP`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubType::SermonPrep => "SERMON_PREP",
            SubType::Meeting => "MEETING",
            SubType::Service => "SERVICE",
            SubType::Visitation => "VISITATION",
            SubType::Devotional => "DEVOTIONAL",
            SubType::Intercession => "INTERCESSION",
            SubType::Study => "STUDY",
            SubType::Exercise => "EXERCISE",
            SubType::DateNight => "DATE_NIGHT",
            SubType::Leisure => "LEISURE",
            SubType::Chore => "CHORE",
            SubType::Generic => "GENERIC",
        }
    }
}

impl fmt::Display for SubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        SubType::ALL
            .iter()
            .copied()
            .find(|st| st.as_str() == wanted)
            .ok_or_else(|| ValidationError::invalid("sub_type", format!("unknown activity kind '{s}'")))
    }
}

/// Upper-case and map `-`/space to `_` so `personal-growth` parses.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

/// A committed, immutable scheduled activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub sub_type: SubType,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Stored only; never expanded into occurrences.
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bible_reference: Option<String>,
}

impl Task {
    /// Signed duration in whole minutes. Negative when the end precedes the start.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Signed duration in seconds.
    pub fn duration_seconds(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }

    /// Calendar date of the start.
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }
}

/// A candidate task as entered in a creation form.
///
/// Start and end are times of day on a single `date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub category: Category,
    pub sub_type: SubType,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub bible_reference: Option<String>,
}

impl TaskDraft {
    /// New draft with the category's default sub-type, 09:00-10:00.
    pub fn new(title: impl Into<String>, category: Category, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            category,
            sub_type: category.default_sub_type(),
            date,
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
            is_recurring: false,
            notes: None,
            bible_reference: None,
        }
    }

    pub fn with_sub_type(mut self, sub_type: SubType) -> Self {
        self.sub_type = sub_type;
        self
    }

    pub fn with_times(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn recurring(mut self, is_recurring: bool) -> Self {
        self.is_recurring = is_recurring;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_bible_reference(mut self, reference: impl Into<String>) -> Self {
        self.bible_reference = Some(reference.into());
        self
    }

    /// Switch category and preselect its default sub-type, like the form does.
    pub fn switch_category(&mut self, category: Category) {
        self.category = category;
        self.sub_type = category.default_sub_type();
    }

    /// Minutes between start and end on the draft's date.
    ///
    /// Negative when `end` is earlier in the day than `start`; a draft never
    /// spans midnight.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Seconds between start and end on the draft's date.
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.date.and_time(self.start)
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.date.and_time(self.end)
    }

    /// Turn the draft into a committed task with a fresh id.
    ///
    /// Empty notes are dropped and the Bible reference is kept only for
    /// sermon preparation. Scheduling rules are not checked here.
    pub fn into_task(self) -> Result<Task, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let start_time = self.start_time();
        let end_time = self.end_time();
        let bible_reference = match self.sub_type {
            SubType::SermonPrep => non_empty(self.bible_reference),
            _ => None,
        };

        Ok(Task {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            category: self.category,
            sub_type: self.sub_type,
            start_time,
            end_time,
            is_recurring: self.is_recurring,
            notes: non_empty(self.notes),
            bible_reference,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn every_sub_type_except_generic_has_one_category() {
        for st in SubType::ALL {
            match st {
                SubType::Generic => assert_eq!(st.category(), None),
                _ => assert!(st.category().is_some(), "{st} has no category"),
            }
        }
        let total: usize = Category::ALL.iter().map(|c| c.sub_types().len()).sum();
        assert_eq!(total, SubType::ALL.len() - 1);
    }

    #[test]
    fn generic_fits_every_category() {
        for c in Category::ALL {
            assert!(SubType::Generic.fits(c));
        }
        assert!(!SubType::Devotional.fits(Category::Ministry));
        assert!(SubType::Devotional.fits(Category::PersonalGrowth));
    }

    #[test]
    fn category_parses_loose_spellings() {
        assert_eq!("ministry".parse::<Category>().unwrap(), Category::Ministry);
        assert_eq!("personal-growth".parse::<Category>().unwrap(), Category::PersonalGrowth);
        assert_eq!("PERSONAL_GROWTH".parse::<Category>().unwrap(), Category::PersonalGrowth);
        assert!("work".parse::<Category>().is_err());
    }

    #[test]
    fn sub_type_parses_kebab_case() {
        assert_eq!("sermon-prep".parse::<SubType>().unwrap(), SubType::SermonPrep);
        assert_eq!("date_night".parse::<SubType>().unwrap(), SubType::DateNight);
        assert!("nap".parse::<SubType>().is_err());
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&Category::PersonalGrowth).unwrap();
        assert_eq!(json, "\"PERSONAL_GROWTH\"");
        let st: SubType = serde_json::from_str("\"SERMON_PREP\"").unwrap();
        assert_eq!(st, SubType::SermonPrep);
    }

    #[test]
    fn switching_category_preselects_default_sub_type() {
        let mut draft = TaskDraft::new("Walk", Category::Ministry, date(2024, 3, 4));
        assert_eq!(draft.sub_type, SubType::SermonPrep);
        draft.switch_category(Category::Family);
        assert_eq!(draft.sub_type, SubType::DateNight);
        draft.switch_category(Category::PersonalGrowth);
        assert_eq!(draft.sub_type, SubType::Devotional);
    }

    #[test]
    fn draft_duration_is_negative_when_end_before_start() {
        let draft = TaskDraft::new("Late", Category::PersonalGrowth, date(2024, 3, 4))
            .with_times(hm(23, 30), hm(0, 15));
        assert_eq!(draft.duration_minutes(), -1395);
    }

    #[test]
    fn into_task_keeps_bible_reference_only_for_sermon_prep() {
        let sermon = TaskDraft::new("Romans", Category::Ministry, date(2024, 3, 4))
            .with_bible_reference("Romans 8:1-17")
            .into_task()
            .unwrap();
        assert_eq!(sermon.bible_reference.as_deref(), Some("Romans 8:1-17"));

        let meeting = TaskDraft::new("Board", Category::Ministry, date(2024, 3, 4))
            .with_sub_type(SubType::Meeting)
            .with_bible_reference("John 3:16")
            .into_task()
            .unwrap();
        assert_eq!(meeting.bible_reference, None);
    }

    #[test]
    fn into_task_drops_empty_notes_and_assigns_id() {
        let task = TaskDraft::new("Dinner", Category::Family, date(2024, 3, 4))
            .with_notes("   ")
            .into_task()
            .unwrap();
        assert_eq!(task.notes, None);
        assert!(Uuid::parse_str(&task.id).is_ok());
        assert_eq!(task.start_time, date(2024, 3, 4).and_hms_opt(9, 0, 0).unwrap());
        assert_eq!(task.duration_minutes(), 60);
    }

    #[test]
    fn into_task_rejects_blank_title() {
        let err = TaskDraft::new("  ", Category::Family, date(2024, 3, 4))
            .into_task()
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyTitle);
    }

    #[test]
    fn task_serialization() {
        let task = TaskDraft::new("Sermon", Category::Ministry, date(2024, 3, 4))
            .recurring(true)
            .with_bible_reference("Psalm 23")
            .into_task()
            .unwrap();
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["category"], "MINISTRY");
        assert_eq!(json["sub_type"], "SERMON_PREP");
        assert_eq!(json["start_time"], "2024-03-04T09:00:00");
        assert!(json.get("notes").is_none());
        let decoded: Task = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, task);
    }
}
