use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use eventdesk::cli::{
    handle_dashboard, handle_event_command, handle_import, handle_report_command,
    handle_vendor_command, EventCommands, ReportCommands, VendorCommands,
};
use eventdesk::clock::SystemClock;
use eventdesk::config::{paths::EventDeskPaths, settings::Settings};
use eventdesk::storage::{CollectionLoader, SnapshotStore};

#[derive(Parser)]
#[command(
    name = "eventdesk",
    version,
    about = "Budget, guest, and vendor analytics for event planners",
    long_about = "EventDesk reads snapshots of an event planner's events, budget items, \
                  guests, and vendors and reports on spending, RSVPs, attendance, and \
                  planning progress from the command line."
)]
struct Cli {
    /// Use this directory instead of the default data location
    #[arg(long, global = true, env = "EVENTDESK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, default settings, and empty snapshots
    Init,

    /// Show current configuration and paths
    Config,

    /// Import a combined JSON export {events, budget_items, guests, vendors}
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Event commands
    #[command(subcommand)]
    Event(EventCommands),

    /// Vendor directory commands
    #[command(subcommand)]
    Vendor(VendorCommands),

    /// Generate reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Headline numbers across events, guests, and vendors
    Dashboard,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    eventdesk::init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => EventDeskPaths::with_base_dir(dir),
        None => EventDeskPaths::new()?,
    };
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let settings = Settings::load_or_create(&paths)?;
    let store = SnapshotStore::new(paths.clone());

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing EventDesk at: {}", paths.base_dir().display());
            store.initialize()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Drop JSON snapshots into {}", paths.data_dir().display());
            println!("or run 'eventdesk import <file>' with a combined export.");
        }
        Some(Commands::Config) => {
            println!("EventDesk Configuration");
            println!("=======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Initialized:       {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Date format:           {}", settings.date_format);
            println!("  Trend window (months): {}", settings.trend_window_months);
            println!("  Recent events listed:  {}", settings.recent_events_limit);
            println!(
                "  Default export format: {}",
                settings.default_export_format
            );
        }
        Some(Commands::Import { file }) => {
            handle_import(&store, &file)?;
        }
        Some(Commands::Event(cmd)) => {
            let collections = store.load_all()?;
            handle_event_command(&collections, &settings, cmd)?;
        }
        Some(Commands::Vendor(cmd)) => {
            let collections = store.load_all()?;
            handle_vendor_command(&collections, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let collections = store.load_all()?;
            handle_report_command(&collections, &settings, &SystemClock, cmd)?;
        }
        Some(Commands::Dashboard) => {
            let collections = store.load_all()?;
            handle_dashboard(&collections, &settings)?;
        }
        None => {
            println!("EventDesk - analytics for event planners");
            println!();
            println!("Run 'eventdesk --help' for usage information.");
        }
    }

    Ok(())
}
