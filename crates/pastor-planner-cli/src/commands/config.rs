//! Settings that new sessions start from.
//!
//! Keys are dot paths into `config.toml`: `profile.name`, `profile.rest_day`,
//! `rules.min_devotional_minutes` and `session.seed_sample_tasks`.

use clap::Subcommand;
use pastor_planner_core::storage::data_dir;
use pastor_planner_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting
    Get {
        /// Dot path, e.g. "profile.rest_day"
        key: String,
    },
    /// Change one setting for future sessions
    Set {
        /// Dot path, e.g. "rules.min_devotional_minutes"
        key: String,
        /// New value; parsed as the setting's current type
        value: String,
    },
    /// Print every setting as `key = value`
    List {
        /// Print the whole config as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the location of the config file
    Path,
    /// Restore the default profile, rules and seeding
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?
                .get(&key)
                .ok_or_else(|| format!("no such setting: {key}"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            tracing::info!(%key, "setting updated");
            println!("{key} = {}", config.get(&key).unwrap_or(value));
        }
        ConfigAction::List { json } => {
            let config = Config::load()?;
            let value = serde_json::to_value(&config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                let mut lines = Vec::new();
                flatten("", &value, &mut lines);
                for line in lines {
                    println!("{line}");
                }
            }
        }
        ConfigAction::Path => println!("{}", Config::path_in(&data_dir()?).display()),
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("settings restored to defaults");
        }
    }
    Ok(())
}

fn flatten(prefix: &str, value: &serde_json::Value, lines: &mut Vec<String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, lines);
            }
        }
        other => lines.push(format!("{prefix} = {other}")),
    }
}
