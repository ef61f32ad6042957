//! CLI commands for events

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_event_details, format_event_list};
use crate::error::{EventDeskError, EventDeskResult};
use crate::models::EventId;
use crate::reports::EventSummaryRow;
use crate::storage::Collections;

/// Event subcommands
#[derive(Subcommand, Debug)]
pub enum EventCommands {
    /// List all events
    List,

    /// Show event details with its budget items
    Show {
        /// Event ID (e.g., 12 or evt-12)
        id: EventId,
    },
}

/// Handle event commands
pub fn handle_event_command(
    collections: &Collections,
    settings: &Settings,
    cmd: EventCommands,
) -> EventDeskResult<()> {
    match cmd {
        EventCommands::List => {
            println!(
                "{}",
                format_event_list(
                    &collections.events,
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
        }
        EventCommands::Show { id } => {
            let event = collections
                .event(id)
                .ok_or_else(|| EventDeskError::event_not_found(id.to_string()))?;

            let summary = EventSummaryRow::compute(
                event,
                &collections.budget_items,
                &collections.guests,
            );
            let items = collections.budget_items_for(id);

            println!(
                "{}",
                format_event_details(
                    event,
                    &items,
                    &summary,
                    &collections.vendors,
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
        }
    }

    Ok(())
}
