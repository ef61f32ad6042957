//! Per-event summary rows and the dashboard built from them

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{EventDeskError, EventDeskResult};
use crate::models::{BudgetItem, Event, EventId, EventStatus, Guest, Money};
use crate::storage::Collections;

use super::aggregate::{utilization, BudgetStats, GuestStats, VendorStats};
use super::filter::scope_to_event;

/// One event with its budget and guest totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSummaryRow {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
    pub status: EventStatus,
    pub total_estimated: Money,
    pub total_actual: Money,
    pub utilization: f64,
    pub total_guests: usize,
    pub total_attendees: u64,
    pub confirmed_guests: usize,
    pub confirmed_attendees: u64,
    pub pending_guests: usize,
    pub declined_guests: usize,
}

impl EventSummaryRow {
    pub fn compute(event: &Event, budget_items: &[BudgetItem], guests: &[Guest]) -> Self {
        let budget = BudgetStats::from_items(scope_to_event(budget_items, event.id));
        let guests = GuestStats::from_guests(scope_to_event(guests, event.id));

        Self {
            id: event.id,
            name: event.name.clone(),
            date: event.date,
            status: event.status.clone(),
            total_estimated: budget.total_estimated,
            total_actual: budget.total_actual,
            utilization: budget.budget_utilization,
            total_guests: guests.total_guests,
            total_attendees: guests.total_attendees,
            confirmed_guests: guests.confirmed_guests,
            confirmed_attendees: guests.confirmed_attendees,
            pending_guests: guests.pending_guests,
            declined_guests: guests.declined_guests,
        }
    }
}

const SUMMARY_CSV_HEADER: [&str; 13] = [
    "id",
    "name",
    "date",
    "status",
    "total_estimated",
    "total_actual",
    "utilization",
    "total_guests",
    "total_attendees",
    "confirmed_guests",
    "confirmed_attendees",
    "pending_guests",
    "declined_guests",
];

/// Summary rows for every event, in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventSummaryReport {
    pub events: Vec<EventSummaryRow>,
}

impl EventSummaryReport {
    pub fn compute(events: &[Event], budget_items: &[BudgetItem], guests: &[Guest]) -> Self {
        Self {
            events: events
                .iter()
                .map(|event| EventSummaryRow::compute(event, budget_items, guests))
                .collect(),
        }
    }

    pub fn generate(collections: &Collections) -> Self {
        Self::compute(
            &collections.events,
            &collections.budget_items,
            &collections.guests,
        )
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Event Summary\n");
        output.push_str(&"=".repeat(80));
        output.push('\n');

        if self.events.is_empty() {
            output.push_str("No events recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<8} {:<24} {:>14} {:>14} {:>7} {:>7} {:>9}\n",
            "ID", "Event", "Estimated", "Spent", "Used", "Guests", "Confirmed"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for row in &self.events {
            output.push_str(&format!(
                "{:<8} {:<24} {:>14} {:>14} {:>6.1}% {:>7} {:>9}\n",
                row.id,
                crate::display::truncate(&row.name, 24),
                row.total_estimated.format_with_symbol(currency),
                row.total_actual.format_with_symbol(currency),
                row.utilization,
                row.total_guests,
                row.confirmed_guests
            ));
        }

        output
    }

    /// Export one CSV row per event
    ///
    /// The header is written even when there are no events.
    pub fn export_csv<W: Write>(&self, writer: W) -> EventDeskResult<()> {
        let mut csv = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv.write_record(SUMMARY_CSV_HEADER)?;
        for row in &self.events {
            csv.serialize(row)?;
        }
        csv.flush()
            .map_err(|e| EventDeskError::Export(e.to_string()))?;
        Ok(())
    }
}

/// Headline numbers for the whole planner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub total_events: usize,
    pub total_estimated: Money,
    pub total_spent: Money,
    pub overall_utilization: f64,
    pub total_guests: usize,
    pub confirmed_guests: usize,
    pub preferred_vendors: usize,
    pub total_vendors: usize,
    /// The first `limit` event summaries
    pub events: Vec<EventSummaryRow>,
}

impl DashboardReport {
    pub fn compute(collections: &Collections, limit: usize) -> Self {
        let budget = BudgetStats::from_items(&collections.budget_items);
        let guests = GuestStats::from_guests(&collections.guests);
        let vendors = VendorStats::from_vendors(&collections.vendors);

        let events = collections
            .events
            .iter()
            .take(limit)
            .map(|event| {
                EventSummaryRow::compute(event, &collections.budget_items, &collections.guests)
            })
            .collect();

        Self {
            total_events: collections.events.len(),
            total_estimated: budget.total_estimated,
            total_spent: budget.total_actual,
            overall_utilization: utilization(budget.total_actual, budget.total_estimated),
            total_guests: guests.total_guests,
            confirmed_guests: guests.confirmed_guests,
            preferred_vendors: vendors.preferred_vendors,
            total_vendors: vendors.total_vendors,
            events,
        }
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!("{:<30} {:>16}\n", "Events", self.total_events));
        output.push_str(&format!(
            "{:<30} {:>16}\n",
            "Estimated",
            self.total_estimated.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<30} {:>16}\n",
            "Spent",
            self.total_spent.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<30} {:>15.1}%\n",
            "Utilization", self.overall_utilization
        ));
        output.push_str(&format!(
            "{:<30} {:>16}\n",
            "Guests",
            format!(
                "{} ({} confirmed)",
                self.total_guests,
                self.confirmed_guests
            )
        ));
        output.push_str(&format!(
            "{:<30} {:>16}\n",
            "Vendors",
            format!(
                "{} ({} preferred)",
                self.total_vendors,
                self.preferred_vendors
            )
        ));

        if !self.events.is_empty() {
            output.push('\n');
            output.push_str(
                &EventSummaryReport {
                    events: self.events.clone(),
                }
                .format_terminal(currency),
            );
        }

        output
    }

    /// Export the dashboard's event rows to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> EventDeskResult<()> {
        EventSummaryReport {
            events: self.events.clone(),
        }
        .export_csv(writer)
    }
}
