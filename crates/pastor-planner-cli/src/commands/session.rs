//! Interactive planning session.
//!
//! Reads one command per line from stdin and applies it to an in-memory
//! planner. Nothing is written to disk; the tasks are gone when the session
//! ends. Errors are reported and the session carries on.

use clap::{Parser, Subcommand};
use std::io::{BufRead, IsTerminal, Write};

use pastor_planner_core::Planner;

use super::calendar::WeekArgs;
use super::profile::ProfileAction;
use super::report::ReportArgs;
use super::task::DraftArgs;
use super::open_planner;

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true, name = "session")]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Create a task
    Add(DraftArgs),
    /// Check a draft without creating it
    Check {
        #[command(flatten)]
        draft: DraftArgs,
        /// Print warnings as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all tasks
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the weekly calendar
    Week(WeekArgs),
    /// Show the time-balance report
    Report(ReportArgs),
    /// Show or change the session profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// List categories and activity kinds
    Kinds,
    /// Print the session as a plan document (JSON)
    Export,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Stop,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut planner = open_planner()?;
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        println!(
            "Pastor Planner session for {} ({} task(s) loaded). Type 'help' for commands.",
            planner.profile().name,
            planner.tasks().len()
        );
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match execute(&mut planner, &line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Stop) => break,
            Err(e) => println!("error: {e}"),
        }
    }

    tracing::debug!(tasks = planner.tasks().len(), "session ended");
    Ok(())
}

fn execute(planner: &mut Planner, line: &str) -> Result<Flow, Box<dyn std::error::Error>> {
    let args = split_args(line)?;
    if args.is_empty() || args[0].starts_with('#') {
        return Ok(Flow::Continue);
    }

    let parsed = match SessionLine::try_parse_from(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            // Help and usage errors are shown, not treated as failures.
            print!("{}", e.render());
            return Ok(Flow::Continue);
        }
    };

    match parsed.command {
        SessionCommand::Add(draft) => super::task::add(planner, draft)?,
        SessionCommand::Check { draft, json } => {
            if let Err(e) = super::task::check(planner, draft, json) {
                tracing::debug!("check reported: {e}");
            }
        }
        SessionCommand::List { json } => super::task::list(planner, json)?,
        SessionCommand::Week(args) => super::calendar::show(planner, args)?,
        SessionCommand::Report(args) => super::report::show(planner, args)?,
        SessionCommand::Profile { action } => super::profile::run(planner, action)?,
        SessionCommand::Kinds => super::task::print_kinds()?,
        SessionCommand::Export => println!("{}", planner.snapshot().to_json_pretty()?),
        SessionCommand::Quit => return Ok(Flow::Stop),
    }
    Ok(Flow::Continue)
}

/// Split a command line into words, honoring single and double quotes and
/// backslash escapes.
fn split_args(line: &str) -> Result<Vec<String>, String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') | (None, '\\') => {
                let escaped = chars.next().ok_or("trailing backslash")?;
                current.push(escaped);
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    args.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("unterminated quote".into());
    }
    if in_word {
        args.push(current);
    }
    Ok(args)
}
