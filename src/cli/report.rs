//! CLI commands for reports
//!
//! Every report can be printed for the terminal or written as JSON, YAML, or
//! CSV, either to stdout or to a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

use crate::clock::Clock;
use crate::config::settings::Settings;
use crate::error::{EventDeskError, EventDeskResult};
use crate::export::{write_json, write_yaml, ExportFormat};
use crate::models::EventId;
use crate::reports::{
    DashboardReport, EventAnalyticsReport, EventSummaryReport, OverallAnalyticsReport, VendorReport,
};
use crate::storage::Collections;

/// How a report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text for the terminal
    Text,
    Json,
    Yaml,
    Csv,
}

impl From<ExportFormat> for OutputFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => Self::Json,
            ExportFormat::Yaml => Self::Yaml,
            ExportFormat::Csv => Self::Csv,
        }
    }
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Analytics for a single event
    Event {
        /// Event ID (e.g., 12 or evt-12)
        id: EventId,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Analytics across every event
    Overall {
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Vendor directory breakdown
    Vendors {
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Budget and guest totals for each event
    Summary {
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// A report that can be rendered in every output format
trait Renderable: Serialize {
    const TITLE: &'static str;

    fn render_text(&self, currency: &str) -> String;

    fn render_csv<W: Write>(&self, writer: W) -> EventDeskResult<()>;
}

impl Renderable for EventAnalyticsReport {
    const TITLE: &'static str = "Event Report";

    fn render_text(&self, currency: &str) -> String {
        self.format_terminal(currency)
    }

    fn render_csv<W: Write>(&self, writer: W) -> EventDeskResult<()> {
        self.export_csv(writer)
    }
}

impl Renderable for OverallAnalyticsReport {
    const TITLE: &'static str = "Overall Report";

    fn render_text(&self, currency: &str) -> String {
        self.format_terminal(currency)
    }

    fn render_csv<W: Write>(&self, writer: W) -> EventDeskResult<()> {
        self.export_csv(writer)
    }
}

impl Renderable for VendorReport {
    const TITLE: &'static str = "Vendor Report";

    fn render_text(&self, _currency: &str) -> String {
        self.format_terminal()
    }

    fn render_csv<W: Write>(&self, writer: W) -> EventDeskResult<()> {
        self.export_csv(writer)
    }
}

impl Renderable for EventSummaryReport {
    const TITLE: &'static str = "Event Summary";

    fn render_text(&self, currency: &str) -> String {
        self.format_terminal(currency)
    }

    fn render_csv<W: Write>(&self, writer: W) -> EventDeskResult<()> {
        self.export_csv(writer)
    }
}

impl Renderable for DashboardReport {
    const TITLE: &'static str = "Dashboard";

    fn render_text(&self, currency: &str) -> String {
        self.format_terminal(currency)
    }

    fn render_csv<W: Write>(&self, writer: W) -> EventDeskResult<()> {
        self.export_csv(writer)
    }
}

/// Handle report commands
pub fn handle_report_command(
    collections: &Collections,
    settings: &Settings,
    clock: &dyn Clock,
    cmd: ReportCommands,
) -> EventDeskResult<()> {
    let options = settings.report_options();

    match cmd {
        ReportCommands::Event { id, format, output } => {
            let report = EventAnalyticsReport::generate(collections, id, &options, clock)?;
            emit(&report, settings, format, output)
        }
        ReportCommands::Overall { format, output } => {
            let report = OverallAnalyticsReport::generate(collections, &options, clock);
            emit(&report, settings, format, output)
        }
        ReportCommands::Vendors { format, output } => {
            let report = VendorReport::compute(&collections.vendors);
            emit(&report, settings, format, output)
        }
        ReportCommands::Summary { format, output } => {
            let report = EventSummaryReport::generate(collections);
            emit(&report, settings, format, output)
        }
    }
}

/// Handle the dashboard command
pub fn handle_dashboard(collections: &Collections, settings: &Settings) -> EventDeskResult<()> {
    let report = DashboardReport::compute(collections, settings.recent_events_limit);
    emit(&report, settings, Some(OutputFormat::Text), None)
}

/// Render a report to stdout or to `output`
///
/// Without an explicit format, files get the configured export format and the
/// terminal gets text.
fn emit<R: Renderable>(
    report: &R,
    settings: &Settings,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
) -> EventDeskResult<()> {
    let format = match (format, &output) {
        (Some(format), _) => format,
        (None, Some(_)) => settings.default_export_format.into(),
        (None, None) => OutputFormat::Text,
    };

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                EventDeskError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match format {
        OutputFormat::Text => writeln!(writer, "{}", report.render_text(&settings.currency_symbol))
            .map_err(|e| EventDeskError::Export(e.to_string()))?,
        OutputFormat::Json => write_json(report, &mut writer, true)?,
        OutputFormat::Yaml => write_yaml(report, R::TITLE, &mut writer)?,
        OutputFormat::Csv => report.render_csv(&mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| EventDeskError::Export(e.to_string()))?;

    if let Some(path) = output {
        info!(path = %path.display(), ?format, "report written");
        println!("{} exported to: {}", R::TITLE, path.display());
    }

    Ok(())
}
