use clap::Args;
use pastor_planner_core::{format_hours, format_percentage, BalanceReport, Planner};

use super::open_planner;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let planner = open_planner()?;
    show(&planner, args)
}

pub fn show(planner: &Planner, args: ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let report = planner.balance();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &BalanceReport) {
    println!("Weekly balance report");
    println!("{}", "=".repeat(40));

    if report.is_empty() {
        println!("No data to display.");
        return;
    }

    for entry in &report.categories {
        println!(
            "  {:<16} {:>8}  {:>6} of total time",
            entry.label,
            format_hours(entry.minutes),
            format_percentage(entry.percentage)
        );
    }
    println!("  {:<16} {:>8}", "Total", format_hours(report.grand_total));
    if report.excluded > 0 {
        println!("  ({} task(s) with no positive duration left out)", report.excluded);
    }
}
