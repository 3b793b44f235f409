//! Time-balance report across categories.
//!
//! Each task contributes `end_time - start_time` to its category, counted in
//! seconds so partial minutes are kept. Tasks with a zero or negative
//! duration are malformed and silently left out of every total.

use serde::{Deserialize, Serialize};

use crate::task::{Category, Task};

/// Totals for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBalance {
    pub category: Category,
    pub label: String,
    pub color: String,
    /// Whole minutes of `seconds`, rounded down
    pub minutes: i64,
    /// Total included seconds
    pub seconds: i64,
    /// Share of the grand total, 0.0 to 100.0
    pub percentage: f64,
}

/// Balance report over a task collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// One entry per category, in `Category::ALL` order
    pub categories: Vec<CategoryBalance>,
    /// Whole minutes of `grand_total_seconds`, rounded down
    pub grand_total: i64,
    /// Sum of all included seconds
    pub grand_total_seconds: i64,
    /// Tasks left out for a non-positive duration
    pub excluded: usize,
}

impl BalanceReport {
    /// Build the report from `tasks`.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut totals = [0i64; 3];
        let mut excluded = 0;

        for task in tasks {
            let duration = task.duration_seconds();
            if duration <= 0 {
                excluded += 1;
                continue;
            }
            totals[slot(task.category)] += duration;
        }

        let grand_total_seconds: i64 = totals.iter().sum();
        let categories = Category::ALL
            .iter()
            .map(|&category| {
                let seconds = totals[slot(category)];
                CategoryBalance {
                    category,
                    label: category.label().to_string(),
                    color: category.color().to_string(),
                    minutes: seconds / 60,
                    seconds,
                    percentage: percentage(seconds, grand_total_seconds),
                }
            })
            .collect();

        Self {
            categories,
            grand_total: grand_total_seconds / 60,
            grand_total_seconds,
            excluded,
        }
    }

    /// Entry for `category`.
    pub fn get(&self, category: Category) -> Option<&CategoryBalance> {
        self.categories.iter().find(|c| c.category == category)
    }

    pub fn minutes(&self, category: Category) -> i64 {
        self.get(category).map_or(0, |c| c.minutes)
    }

    pub fn percentage(&self, category: Category) -> f64 {
        self.get(category).map_or(0.0, |c| c.percentage)
    }

    pub fn is_empty(&self) -> bool {
        self.grand_total_seconds == 0
    }
}

fn slot(category: Category) -> usize {
    match category {
        Category::Ministry => 0,
        Category::Family => 1,
        Category::PersonalGrowth => 2,
    }
}

fn percentage(seconds: i64, grand_total: i64) -> f64 {
    if grand_total == 0 {
        return 0.0;
    }
    seconds as f64 / grand_total as f64 * 100.0
}

/// Minutes as `"{h}h {m}m"`.
pub fn format_hours(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Percentage with one decimal, e.g. `"50.0%"`.
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}%")
}
