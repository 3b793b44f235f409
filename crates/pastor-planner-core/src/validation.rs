//! Scheduling rules checked while a task is being created.
//!
//! Two rules are evaluated independently of each other:
//!
//! - **Rest-day conflict** (advisory): a ministry activity dated on the
//!   profile's rest day. The task can still be submitted.
//! - **Devotional minimum** (blocking): a personal-growth devotional shorter
//!   than the minimum. Submission is rejected while this is active.
//!
//! Both checks are pure and cheap; callers re-run them on every form change.

use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;
use crate::task::{Category, SubType, TaskDraft};

/// Default minimum length of a devotional, in minutes.
pub const MIN_DEVOTIONAL_MINUTES: i64 = 15;

/// Outcome of checking a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskWarnings {
    /// Non-blocking advisory naming the rest day.
    pub rest_day_warning: Option<String>,
    /// Blocking error; submission must be rejected while set.
    pub duration_error: Option<String>,
}

impl TaskWarnings {
    /// Whether submission must be rejected.
    pub fn is_blocked(&self) -> bool {
        self.duration_error.is_some()
    }

    pub fn is_clear(&self) -> bool {
        self.rest_day_warning.is_none() && self.duration_error.is_none()
    }

    /// All messages, advisory first.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.rest_day_warning
            .as_deref()
            .into_iter()
            .chain(self.duration_error.as_deref())
    }
}

/// Tunable rule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    pub min_devotional_minutes: i64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_devotional_minutes: MIN_DEVOTIONAL_MINUTES,
        }
    }
}

impl ValidationRules {
    /// Check `draft` against `profile`.
    pub fn validate(&self, draft: &TaskDraft, profile: &UserProfile) -> TaskWarnings {
        TaskWarnings {
            rest_day_warning: self.rest_day_conflict(draft, profile),
            duration_error: self.devotional_too_short(draft),
        }
    }

    fn rest_day_conflict(&self, draft: &TaskDraft, profile: &UserProfile) -> Option<String> {
        if draft.category != Category::Ministry || !profile.is_rest_day(draft.date) {
            return None;
        }
        Some(format!(
            "Attention, Pastor: {} is your designated rest day. \
             Scheduling ministry activities may compromise your rest.",
            profile.rest_day_name()
        ))
    }

    // Duration comes from the times of day on the draft's single date, so an
    // end before the start is negative and always blocks.
    fn devotional_too_short(&self, draft: &TaskDraft) -> Option<String> {
        if draft.category != Category::PersonalGrowth || draft.sub_type != SubType::Devotional {
            return None;
        }
        if draft.duration_seconds() >= self.min_devotional_minutes.saturating_mul(60) {
            return None;
        }
        Some(format!(
            "Devotional time is too short: minimum {} minutes (spiritual priority rule).",
            self.min_devotional_minutes
        ))
    }
}

/// Check `draft` against `profile` with the default rules.
pub fn validate(draft: &TaskDraft, profile: &UserProfile) -> TaskWarnings {
    ValidationRules::default().validate(draft, profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn profile_resting_on(day: u8) -> UserProfile {
        UserProfile::new("Alex", day).unwrap()
    }

    #[test]
    fn sermon_prep_on_rest_day_warns_but_does_not_block() {
        let draft = TaskDraft::new("Sermon", Category::Ministry, monday())
            .with_sub_type(SubType::SermonPrep)
            .with_times(hm(9, 0), hm(11, 0));
        let warnings = validate(&draft, &profile_resting_on(1));

        let message = warnings.rest_day_warning.as_deref().unwrap();
        assert!(message.contains("Monday"));
        assert!(!warnings.is_blocked());
    }

    #[test]
    fn family_activity_on_rest_day_is_fine() {
        let draft = TaskDraft::new("Picnic", Category::Family, monday());
        assert!(validate(&draft, &profile_resting_on(1)).is_clear());
    }

    #[test]
    fn ministry_on_other_day_is_fine() {
        let draft = TaskDraft::new("Visit", Category::Ministry, monday())
            .with_sub_type(SubType::Visitation);
        assert!(validate(&draft, &profile_resting_on(0)).is_clear());
    }

    #[test]
    fn ten_minute_devotional_is_blocked() {
        let draft = TaskDraft::new("Quiet time", Category::PersonalGrowth, monday())
            .with_sub_type(SubType::Devotional)
            .with_times(hm(6, 0), hm(6, 10));
        let warnings = validate(&draft, &profile_resting_on(0));

        assert!(warnings.is_blocked());
        assert!(warnings.duration_error.unwrap().contains("minimum 15 minutes"));
    }

    #[test]
    fn fifteen_minute_devotional_passes() {
        let draft = TaskDraft::new("Quiet time", Category::PersonalGrowth, monday())
            .with_times(hm(6, 0), hm(6, 15));
        assert!(!validate(&draft, &profile_resting_on(0)).is_blocked());
    }

    #[test]
    fn devotional_seconds_short_of_the_minimum_is_blocked() {
        let draft = TaskDraft::new("Quiet time", Category::PersonalGrowth, monday()).with_times(
            hm(6, 0),
            NaiveTime::from_hms_opt(6, 14, 59).unwrap(),
        );
        assert!(validate(&draft, &profile_resting_on(0)).is_blocked());
    }

    #[test]
    fn short_study_is_not_checked() {
        let draft = TaskDraft::new("Greek", Category::PersonalGrowth, monday())
            .with_sub_type(SubType::Study)
            .with_times(hm(6, 0), hm(6, 5));
        assert!(validate(&draft, &profile_resting_on(0)).is_clear());
    }

    #[test]
    fn devotional_sub_type_under_other_category_is_not_checked() {
        let draft = TaskDraft::new("Family prayer", Category::Family, monday())
            .with_sub_type(SubType::Devotional)
            .with_times(hm(6, 0), hm(6, 5));
        assert!(!validate(&draft, &profile_resting_on(0)).is_blocked());
    }

    #[test]
    fn devotional_across_midnight_is_blocked() {
        let draft = TaskDraft::new("Vigil", Category::PersonalGrowth, monday())
            .with_times(hm(23, 30), hm(0, 30));
        assert!(validate(&draft, &profile_resting_on(0)).is_blocked());
    }

    #[test]
    fn rules_are_evaluated_independently() {
        let devotional = TaskDraft::new("Prayer", Category::PersonalGrowth, monday())
            .with_times(hm(6, 0), hm(6, 5));
        let warnings = validate(&devotional, &profile_resting_on(1));
        assert!(warnings.rest_day_warning.is_none());
        assert!(warnings.is_blocked());

        let sermon = TaskDraft::new("Sermon", Category::Ministry, monday())
            .with_times(hm(6, 0), hm(6, 5));
        let warnings = validate(&sermon, &profile_resting_on(1));
        assert!(warnings.rest_day_warning.is_some());
        assert!(!warnings.is_blocked());
        assert_eq!(warnings.messages().count(), 1);
    }

    #[test]
    fn custom_minimum_is_respected() {
        let rules = ValidationRules {
            min_devotional_minutes: 30,
        };
        let draft = TaskDraft::new("Prayer", Category::PersonalGrowth, monday())
            .with_times(hm(6, 0), hm(6, 20));
        let warnings = rules.validate(&draft, &profile_resting_on(0));
        assert!(warnings.duration_error.unwrap().contains("minimum 30 minutes"));
    }
}
