use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use expense_tracker::cli::{handle_expense_command, ExpenseCommands};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::logging::init_logging;
use expense_tracker::services::Ledger;
use expense_tracker::storage::ExpenseRepository;
use expense_tracker::tui::layout::MIN_WIDTH;
use expense_tracker::tui::{run_tui, ExitStatus};
use expense_tracker::ExpenseError;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Records dated, categorised expenses in a plain-text file. \
                  Run without a command for the interactive menu."
)]
struct Cli {
    /// Expense file to use instead of the configured one
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Log filter directive (e.g. "debug")
    #[arg(long, global = true, env = "EXPENSE_TRACKER_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "exiting with error");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let level = cli.log_level.as_deref().unwrap_or(&settings.log_level);
    if let Err(e) = init_logging(&paths.log_file(), level) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    if let Some(Commands::Config) = cli.command {
        print_config(&paths, &settings, cli.file);
        return Ok(ExitCode::SUCCESS);
    }

    let data_file = settings.resolve_data_file(&paths, cli.file);
    let mut ledger = Ledger::open(ExpenseRepository::new(data_file))?;

    let code = match cli.command {
        None | Some(Commands::Tui) => match run_tui(&mut ledger, &settings)? {
            ExitStatus::Normal => ExitCode::SUCCESS,
            ExitStatus::TerminalTooSmall { width } => {
                let err = ExpenseError::TerminalTooSmall {
                    width,
                    min_width: MIN_WIDTH,
                };
                eprintln!("Error: {}", err);
                ExitCode::FAILURE
            }
        },
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut ledger, &settings, cmd)?;
            ExitCode::SUCCESS
        }
        Some(Commands::Config) => ExitCode::SUCCESS,
    };

    // Retry a save that failed inside the TUI
    ledger.flush()?;
    info!("exiting");

    Ok(code)
}

fn print_config(paths: &ExpensePaths, settings: &Settings, file: Option<PathBuf>) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Expense file:   {}", settings.resolve_data_file(paths, file).display());
    println!("Log file:       {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Log level:       {}", settings.log_level);
}
