//! Task commands: drafting, checking, creating and listing.

use clap::Args;
use chrono::{NaiveDate, NaiveTime};
use pastor_planner_core::{
    Category, CoreError, Planner, SubType, Task, TaskDraft, TaskWarnings, WEEKDAY_NAMES,
};

use super::{open_planner, today};

/// Fields of the task creation form.
#[derive(Args, Debug, Clone)]
pub struct DraftArgs {
    /// Task title
    pub title: String,
    /// Category: ministry, family or personal-growth
    #[arg(long, short)]
    pub category: Category,
    /// Activity kind (default: the category's usual kind)
    #[arg(long = "sub-type", short = 's')]
    pub sub_type: Option<SubType>,
    /// Date as YYYY-MM-DD (default: today)
    #[arg(long, short)]
    pub date: Option<NaiveDate>,
    /// Start time as HH:MM
    #[arg(long, default_value = "09:00", value_parser = parse_time)]
    pub start: NaiveTime,
    /// End time as HH:MM
    #[arg(long, default_value = "10:00", value_parser = parse_time)]
    pub end: NaiveTime,
    /// Mark as a weekly recurring event
    #[arg(long)]
    pub recurring: bool,
    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,
    /// Bible reference (kept for sermon preparation only)
    #[arg(long = "bible-reference", alias = "ref")]
    pub bible_reference: Option<String>,
}

impl DraftArgs {
    pub fn into_draft(self, today: NaiveDate) -> TaskDraft {
        TaskDraft {
            title: self.title,
            category: self.category,
            sub_type: self
                .sub_type
                .unwrap_or_else(|| self.category.default_sub_type()),
            date: self.date.unwrap_or(today),
            start: self.start,
            end: self.end,
            is_recurring: self.recurring,
            notes: self.notes,
            bible_reference: self.bible_reference,
        }
    }
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| format!("invalid time '{s}' (expected HH:MM)"))
}

/// One-shot rule check against the configured profile.
pub fn run_check(args: DraftArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let planner = open_planner()?;
    check(&planner, args, json)
}

pub fn check(planner: &Planner, args: DraftArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let draft = args.into_draft(today());
    if !draft.sub_type.fits(draft.category) {
        tracing::debug!(
            category = %draft.category,
            sub_type = %draft.sub_type,
            "activity kind belongs to another category"
        );
    }
    let warnings = planner.check(&draft);

    if json {
        println!("{}", serde_json::to_string_pretty(&warnings)?);
    } else if warnings.is_clear() {
        println!("ok: no warnings");
    } else {
        print_warnings(&warnings);
    }

    match warnings.duration_error {
        Some(reason) => Err(CoreError::SubmissionBlocked { reason }.into()),
        None => Ok(()),
    }
}

/// Validate and commit a draft into the session.
pub fn add(planner: &mut Planner, args: DraftArgs) -> Result<(), Box<dyn std::error::Error>> {
    let submission = planner.submit(args.into_draft(today()))?;
    println!("Task created: {}", submission.task.id);
    print_warnings(&submission.warnings);
    Ok(())
}

/// All tasks of the session, in insertion order.
pub fn list(planner: &Planner, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(planner.tasks())?);
        return Ok(());
    }
    if planner.tasks().is_empty() {
        println!("No tasks.");
    }
    for task in planner.tasks() {
        println!(
            "{}  {}  {}",
            task.start_time.format("%Y-%m-%d"),
            task_line(task),
            task.id
        );
    }
    Ok(())
}

pub fn print_warnings(warnings: &TaskWarnings) {
    if let Some(advisory) = &warnings.rest_day_warning {
        println!("warning: {advisory}");
    }
    if let Some(error) = &warnings.duration_error {
        println!("blocked: {error}");
    }
}

/// `HH:MM-HH:MM  Title  [Category / Kind]`, plus recurrence and reference.
pub fn task_line(task: &Task) -> String {
    let mut line = format!(
        "{}-{}  {}  [{} / {}]",
        task.start_time.format("%H:%M"),
        task.end_time.format("%H:%M"),
        task.title,
        task.category.label(),
        task.sub_type.label()
    );
    if task.is_recurring {
        line.push_str("  (weekly)");
    }
    if let Some(reference) = &task.bible_reference {
        line.push_str(&format!("  {reference}"));
    }
    line
}

/// Categories with their activity kinds.
pub fn print_kinds() -> Result<(), Box<dyn std::error::Error>> {
    for category in Category::ALL {
        println!(
            "{} ({}, {})",
            category.label(),
            category.as_str().to_ascii_lowercase().replace('_', "-"),
            category.color()
        );
        for sub_type in category.sub_types() {
            let default = if sub_type == category.default_sub_type() {
                " [default]"
            } else {
                ""
            };
            println!(
                "  {:<14} {}{}",
                sub_type.as_str().to_ascii_lowercase().replace('_', "-"),
                sub_type.label(),
                default
            );
        }
    }
    println!(
        "Any category: {} ({})",
        SubType::Generic.label(),
        SubType::Generic.as_str().to_ascii_lowercase()
    );
    println!();
    println!("Weekdays: {}", WEEKDAY_NAMES.join(", "));
    Ok(())
}
