mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::payment::{QuoteArgs, ScheduleArgs};
use commands::report::ReportArgs;

/// Mortgage payment calculator
#[derive(Parser)]
#[command(
    name = "mortcalc",
    version,
    about = "Mortgage payment quotes, amortization schedules and reports",
    long_about = "A CLI for mortgage payment calculations with decimal precision. \
                  Supports interest-only and level-payment amortizing loans, \
                  month-by-month amortization schedules, and one- or two-scenario reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log engine diagnostics (degenerate inputs etc.) to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly payment, total interest and total paid for a loan
    Quote(QuoteArgs),
    /// Month-by-month amortization schedule (amortizing model)
    Schedule(ScheduleArgs),
    /// Build a mortgage report for one or two scenarios
    Report(ReportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Quote(args) => commands::payment::run_quote(args),
        Commands::Schedule(args) => commands::payment::run_schedule(args),
        Commands::Report(args) => commands::report::run_report(args),
        Commands::Version => {
            println!("mortcalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
