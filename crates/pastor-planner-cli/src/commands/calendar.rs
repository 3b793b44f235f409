//! Weekly calendar view.

use clap::Args;
use chrono::NaiveDate;
use pastor_planner_core::{Planner, WeekView};

use super::task::task_line;
use super::{open_planner, today};

#[derive(Args, Debug, Clone)]
pub struct WeekArgs {
    /// Any date inside the week to show (default: today)
    #[arg(long, short)]
    pub date: Option<NaiveDate>,
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: WeekArgs) -> Result<(), Box<dyn std::error::Error>> {
    let planner = open_planner()?;
    show(&planner, args)
}

pub fn show(planner: &Planner, args: WeekArgs) -> Result<(), Box<dyn std::error::Error>> {
    let today = today();
    let view = planner.week(args.date.unwrap_or(today), today);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_week(&view);
    }
    Ok(())
}

fn print_week(view: &WeekView) {
    if let (Some(start), Some(end)) = (view.start(), view.end()) {
        println!("Week of {start} to {end}");
    }

    for day in &view.days {
        let mut header = format!("{} {}", day.weekday_name, day.date);
        if day.is_rest_day {
            header.push_str(" [rest day]");
        }
        if day.is_today {
            header.push_str(" [today]");
        }
        println!();
        println!("{header}");

        if day.tasks.is_empty() {
            println!("  free");
        }
        for task in &day.tasks {
            println!("  {}", task_line(task));
        }
    }
}
