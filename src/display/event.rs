//! Event display formatting
//!
//! Formats events for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{BudgetItem, Event, Vendor};
use crate::reports::EventSummaryRow;

use super::report::{
    double_separator, format_bar, format_date, format_percentage, separator, truncate,
};

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Guests")]
    expected_guests: u32,
}

/// Format a list of events as a table
pub fn format_event_list(events: &[Event], currency: &str, date_format: &str) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }

    let rows = events.iter().map(|event| EventRow {
        id: event.id.to_string(),
        name: truncate(&event.name, 32),
        category: event.category.label().to_string(),
        date: format_date(event.date, date_format),
        status: event.status.label().to_string(),
        budget: event.budget.format_with_symbol(currency),
        expected_guests: event.expected_guests,
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format a single event with its budget items and guest totals
pub fn format_event_details(
    event: &Event,
    items: &[&BudgetItem],
    summary: &EventSummaryRow,
    vendors: &[Vendor],
    currency: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} ({})\n", event.name, event.id));
    output.push_str(&double_separator(60));
    output.push('\n');
    output.push_str(&format!("Category:  {}\n", event.category.label()));
    output.push_str(&format!("Status:    {}\n", event.status.label()));
    let date = format_date(event.date, date_format);
    match event.time {
        Some(time) => output.push_str(&format!("Date:      {} {}\n", date, time.format("%H:%M"))),
        None => output.push_str(&format!("Date:      {}\n", date)),
    }
    if !event.venue.is_empty() {
        output.push_str(&format!("Venue:     {}\n", event.venue));
    }
    if !event.address.is_empty() {
        output.push_str(&format!("Address:   {}\n", event.address));
    }
    if !event.contact_person.is_empty() {
        output.push_str(&format!(
            "Contact:   {} {} {}\n",
            event.contact_person, event.contact_phone, event.contact_email
        ));
    }
    if !event.description.is_empty() {
        output.push_str(&format!("\n{}\n", event.description));
    }
    if !event.special_requirements.is_empty() {
        output.push_str(&format!("Requirements: {}\n", event.special_requirements));
    }

    output.push('\n');
    output.push_str(&format!(
        "Budget:    {} allocated, {} estimated, {} spent\n",
        event.budget.format_with_symbol(currency),
        summary.total_estimated.format_with_symbol(currency),
        summary.total_actual.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "           {} {}\n",
        format_bar(summary.utilization, 100.0, 30),
        format_percentage(summary.utilization)
    ));
    output.push_str(&format!(
        "Guests:    {} invited ({} attendees), {} confirmed, {} pending, {} declined\n",
        summary.total_guests,
        summary.total_attendees,
        summary.confirmed_guests,
        summary.pending_guests,
        summary.declined_guests
    ));

    if !items.is_empty() {
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:<18} {:>12} {:>12} {:<8}\n",
            "Item", "Vendor", "Estimated", "Actual", "Status"
        ));
        output.push_str(&separator(82));
        output.push('\n');
        for item in items {
            output.push_str(&format!(
                "{:<28} {:<18} {:>12} {:>12} {:<8}\n",
                truncate(&item.item_name, 28),
                truncate(item.vendor_display(vendors).unwrap_or("-"), 18),
                item.estimated_cost.format_with_symbol(currency),
                item.actual_cost.format_with_symbol(currency),
                item.status.label()
            ));
        }
    }

    output
}
