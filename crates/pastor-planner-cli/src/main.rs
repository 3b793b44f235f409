use clap::{Parser, Subcommand};
use pastor_planner_core::CoreError;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pastor-planner", version, about = "Pastor Planner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive planning session (tasks last until it ends)
    Session,
    /// Check a task draft against the scheduling rules
    Check {
        #[command(flatten)]
        draft: commands::task::DraftArgs,
        /// Print warnings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the weekly calendar for a fresh session
    Week(commands::calendar::WeekArgs),
    /// Show the time-balance report for a fresh session
    Report(commands::report::ReportArgs),
    /// List categories and activity kinds
    Kinds,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Exit code for a draft rejected by a blocking rule.
const EXIT_BLOCKED: i32 = 2;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Session => commands::session::run(),
        Commands::Check { draft, json } => commands::task::run_check(draft, json),
        Commands::Week(args) => commands::calendar::run(args),
        Commands::Report(args) => commands::report::run(args),
        Commands::Kinds => commands::task::print_kinds(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        let code = match e.downcast_ref::<CoreError>() {
            Some(CoreError::SubmissionBlocked { .. }) => EXIT_BLOCKED,
            _ => 1,
        };
        std::process::exit(code);
    }
}
