//! Profile commands for the running session.
//!
//! Changes apply to the current session only. Use `config set profile.*`
//! to change the profile new sessions start with.

use clap::Subcommand;
use pastor_planner_core::{parse_weekday, Planner};

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Show the session profile
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change the display name
    SetName {
        /// New name
        name: String,
    },

    /// Change the rest day
    SetRestDay {
        /// Weekday index (0 = Sunday) or name, e.g. "monday"
        day: String,
    },
}

pub fn run(planner: &mut Planner, action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Show { json } => show(planner, json),
        ProfileAction::SetName { name } => {
            planner.set_profile_name(name);
            println!("Name set to: {}", planner.profile().name);
            Ok(())
        }
        ProfileAction::SetRestDay { day } => {
            let index = parse_weekday(&day)?;
            planner.set_rest_day(index)?;
            println!("Rest day set to: {}", planner.profile().rest_day_name());
            Ok(())
        }
    }
}

fn show(planner: &Planner, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let profile = planner.profile();
    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    println!("Name: {}", profile.name);
    println!(
        "Rest day: {} ({})",
        profile.rest_day_name(),
        profile.rest_day()
    );
    println!(
        "Minimum devotional: {} min",
        planner.rules().min_devotional_minutes
    );
    Ok(())
}
