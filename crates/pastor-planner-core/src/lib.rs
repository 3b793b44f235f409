//! # Pastor Planner Core Library
//!
//! This library provides the core logic for a personal weekly planner that
//! balances time across ministry, family and personal growth. The CLI is a
//! thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Task model**: closed sets of categories and activity kinds, drafts
//!   and committed tasks
//! - **Validation**: scheduling rules run while a task is being created
//!   (rest-day advisory, devotional minimum)
//! - **Store**: append-only, in-memory task repository
//! - **Calendar**: projection of tasks onto a Sunday-anchored week
//! - **Stats**: per-category time balance report
//! - **Storage**: TOML configuration and the plan document layout
//!
//! ## Key Components
//!
//! - [`Planner`]: session state wiring everything together
//! - [`validate`]: pure rule check for a [`TaskDraft`]
//! - [`BalanceReport`]: category totals and percentages
//! - [`Config`]: application configuration management

pub mod calendar;
pub mod error;
pub mod planner;
pub mod profile;
pub mod sample;
pub mod stats;
pub mod storage;
pub mod store;
pub mod task;
pub mod validation;

pub use calendar::{project_week, week_dates, DayBucket, WeekView};
pub use error::{ConfigError, CoreError, ValidationError};
pub use planner::{Planner, Submission};
pub use profile::{parse_weekday, weekday_index, weekday_name, UserProfile, WEEKDAY_NAMES};
pub use stats::{format_hours, format_percentage, BalanceReport, CategoryBalance};
pub use storage::{Config, PlanDocument};
pub use store::{InMemoryTaskStore, TaskStore};
pub use task::{Category, SubType, Task, TaskDraft};
pub use validation::{validate, TaskWarnings, ValidationRules, MIN_DEVOTIONAL_MINUTES};
