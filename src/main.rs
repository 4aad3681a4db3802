mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use mergecal_core::{DisplayMode, ViewMode};
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(name = "mergecal")]
#[command(about = "Merge remote iCal feeds into one view and export the combined calendar")]
struct Cli {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Subscribe to a remote iCal feed
    Add {
        /// Display name for the calendar
        name: String,

        /// URL of the .ics feed
        url: String,
    },
    /// List subscribed calendars
    List,
    /// Show or hide a calendar in the merged view
    Toggle {
        /// Calendar id, name, or unique name prefix
        calendar: String,
    },
    /// Change how a calendar's event titles appear in the merged view
    Mode {
        /// Calendar id, name, or unique name prefix
        calendar: String,

        /// One of: original, busy, custom
        mode: DisplayMode,

        /// Replacement title used by custom mode
        #[arg(long)]
        text: Option<String>,
    },
    /// Unsubscribe from a calendar and drop its events
    Remove {
        /// Calendar id, name, or unique name prefix
        calendar: String,
    },
    /// Show the merged events
    Events {
        /// View window (day, week, month, agenda); remembered for next time
        #[arg(long)]
        view: Option<ViewMode>,
    },
    /// Write the merged view to an .ics file
    Export {
        /// Output path (defaults to merged-calendar.ics)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    TermLogger::init(
        cli.log_level,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    match cli.command {
        Commands::Add { name, url } => commands::add::run(&name, &url).await,
        Commands::List => commands::list::run(),
        Commands::Toggle { calendar } => commands::toggle::run(&calendar),
        Commands::Mode {
            calendar,
            mode,
            text,
        } => commands::mode::run(&calendar, mode, text.as_deref()),
        Commands::Remove { calendar } => commands::remove::run(&calendar),
        Commands::Events { view } => commands::events::run(view),
        Commands::Export { output } => commands::export::run(output.as_deref()),
    }
}
