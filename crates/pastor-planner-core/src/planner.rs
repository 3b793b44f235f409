//! Planner session: explicit state tying the profile, the task store and
//! the rules together.
//!
//! A session owns its store (any [`TaskStore`]) and the profile. Views are
//! computed from that state on demand; the balance report is memoized and
//! recomputed whenever the store's revision changes.

use chrono::NaiveDate;
use std::cell::RefCell;

use crate::calendar::{project_week, WeekView};
use crate::error::{CoreError, Result, ValidationError};
use crate::profile::UserProfile;
use crate::sample::sample_tasks;
use crate::stats::BalanceReport;
use crate::storage::{Config, PlanDocument};
use crate::store::{InMemoryTaskStore, TaskStore};
use crate::task::{Task, TaskDraft};
use crate::validation::{TaskWarnings, ValidationRules};

/// A committed task together with the advisories raised for it.
#[derive(Debug, Clone)]
pub struct Submission {
    pub task: Task,
    pub warnings: TaskWarnings,
}

/// Single-user planning session.
#[derive(Debug)]
pub struct Planner<S: TaskStore = InMemoryTaskStore> {
    store: S,
    profile: UserProfile,
    rules: ValidationRules,
    balance_cache: RefCell<Option<(u64, BalanceReport)>>,
}

impl Planner<InMemoryTaskStore> {
    /// Session configured from `config`, seeded with sample tasks on `today`
    /// when enabled.
    ///
    /// # Errors
    ///
    /// Fails on an invalid profile in `config` or a sample task that does
    /// not commit.
    pub fn from_config(config: &Config, today: NaiveDate) -> Result<Self> {
        let profile = config.user_profile()?;
        let store = if config.session.seed_sample_tasks {
            InMemoryTaskStore::with_tasks(sample_tasks(today)?)
        } else {
            InMemoryTaskStore::new()
        };
        tracing::debug!(
            tasks = store.len(),
            rest_day = profile.rest_day(),
            "starting planner session"
        );
        Ok(Planner::new(store, profile).with_rules(config.validation_rules()))
    }
}

impl<S: TaskStore> Planner<S> {
    pub fn new(store: S, profile: UserProfile) -> Self {
        Self {
            store,
            profile,
            rules: ValidationRules::default(),
            balance_cache: RefCell::new(None),
        }
    }

    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.list_all()
    }

    pub fn set_profile_name(&mut self, name: impl Into<String>) {
        self.profile.set_name(name);
    }

    pub fn set_rest_day(&mut self, rest_day: u8) -> Result<(), ValidationError> {
        self.profile.set_rest_day(rest_day)
    }

    /// Run the scheduling rules on a draft without committing it.
    pub fn check(&self, draft: &TaskDraft) -> TaskWarnings {
        self.rules.validate(draft, &self.profile)
    }

    /// Validate and commit a draft.
    ///
    /// # Errors
    ///
    /// `SubmissionBlocked` when a blocking rule fires, `Validation` when the
    /// draft is incomplete. The store is untouched on error.
    pub fn submit(&mut self, draft: TaskDraft) -> Result<Submission> {
        let warnings = self.check(&draft);
        if let Some(reason) = &warnings.duration_error {
            tracing::warn!(title = %draft.title, "submission blocked: {reason}");
            return Err(CoreError::SubmissionBlocked {
                reason: reason.clone(),
            });
        }

        let task = draft.into_task()?;
        if let Some(advisory) = &warnings.rest_day_warning {
            tracing::info!(task_id = %task.id, "rest day advisory: {advisory}");
        }

        self.store.append(task.clone());
        tracing::info!(
            task_id = %task.id,
            category = %task.category,
            sub_type = %task.sub_type,
            "task created"
        );
        Ok(Submission { task, warnings })
    }

    /// Calendar for the week containing `reference`.
    pub fn week(&self, reference: NaiveDate, today: NaiveDate) -> WeekView {
        project_week(self.store.list_all(), reference, &self.profile, today)
    }

    /// Balance report over all tasks, memoized per store revision.
    pub fn balance(&self) -> BalanceReport {
        let revision = self.store.revision();
        let mut cache = self.balance_cache.borrow_mut();
        if let Some((cached_at, report)) = cache.as_ref() {
            if *cached_at == revision {
                return report.clone();
            }
        }

        let report = BalanceReport::from_tasks(self.store.list_all());
        *cache = Some((revision, report.clone()));
        report
    }

    /// Snapshot of the session as a plan document.
    pub fn snapshot(&self) -> PlanDocument {
        PlanDocument::new(self.store.list_all().to_vec(), self.profile.clone())
    }
}
