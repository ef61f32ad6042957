//! Per-event analytics report
//!
//! Budget and guest figures for a single event, broken down by category and
//! by creation month, plus how far along the event's planning is.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::clock::Clock;
use crate::display::{format_percentage, format_variance, truncate};
use crate::error::{EventDeskError, EventDeskResult};
use crate::models::{
    BudgetCategory, BudgetItem, Event, EventId, EventStatus, Guest, GuestCategory, Money,
    MonthKey,
};
use crate::storage::Collections;

use super::aggregate::{percentage, utilization, BudgetStats, GuestStats};
use super::group::{group_by, group_by_month, seeded_group_by};
use super::ReportOptions;

/// Spending in one budget category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetCategoryRow {
    pub category: BudgetCategory,
    pub label: String,
    pub estimated: Money,
    pub actual: Money,
    pub count: usize,
    pub variance: Money,
    pub utilization: f64,
}

/// Budget items created in one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySpend {
    pub month: MonthKey,
    pub actual: Money,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSection {
    #[serde(flatten)]
    pub stats: BudgetStats,
    pub by_category: Vec<BudgetCategoryRow>,
    pub timeline: Vec<MonthlySpend>,
}

/// Guests in one guest category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestCategoryRow {
    pub category: GuestCategory,
    pub label: String,
    pub count: usize,
    pub attendees: u64,
    pub confirmed: usize,
    /// Confirmed over the guests in this category
    pub confirmation_rate: f64,
}

/// Guests added in one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyGuests {
    pub month: MonthKey,
    pub count: usize,
    pub attendees: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestSection {
    #[serde(flatten)]
    pub stats: GuestStats,
    pub by_category: Vec<GuestCategoryRow>,
    pub timeline: Vec<MonthlyGuests>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSection {
    /// Whole days from today to the event date; negative once it has passed
    pub days_until_event: i64,
    pub is_past_event: bool,
    /// Percentage of the planning stages reached
    pub planning_progress: u32,
}

/// Planning progress for a status
///
/// Planning, confirmed, active and completed reach 25, 50, 75 and 100.
/// Cancelled and unrecognized statuses are off the sequence and report 0.
pub fn planning_progress(status: &EventStatus) -> u32 {
    status
        .stage()
        .map(|stage| stage * 100 / EventStatus::STAGE_COUNT)
        .unwrap_or(0)
}

/// Analytics for a single event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventAnalyticsReport {
    pub event: Event,
    pub budget: BudgetSection,
    pub guests: GuestSection,
    pub progress: ProgressSection,
}

impl EventAnalyticsReport {
    /// Assemble the report from an event and the records scoped to it
    pub fn compute<'a, B, G>(
        event: &Event,
        budget_items: B,
        guests: G,
        options: &ReportOptions,
        today: NaiveDate,
    ) -> Self
    where
        B: IntoIterator<Item = &'a BudgetItem>,
        G: IntoIterator<Item = &'a Guest>,
    {
        let budget_items: Vec<&BudgetItem> = budget_items.into_iter().collect();
        let guests: Vec<&Guest> = guests.into_iter().collect();
        let current = MonthKey::from_date(today);

        let days_until_event = event.days_until(today);

        Self {
            event: event.clone(),
            budget: budget_section(&budget_items, options, current),
            guests: guest_section(&guests, options, current),
            progress: ProgressSection {
                days_until_event,
                is_past_event: days_until_event < 0,
                planning_progress: planning_progress(&event.status),
            },
        }
    }

    /// Look up an event in the snapshot and build its report
    pub fn generate(
        collections: &Collections,
        event_id: EventId,
        options: &ReportOptions,
        clock: &dyn Clock,
    ) -> EventDeskResult<Self> {
        let event = collections
            .event(event_id)
            .ok_or_else(|| EventDeskError::event_not_found(event_id.to_string()))?;

        Ok(Self::compute(
            event,
            collections.budget_items_for(event_id),
            collections.guests_for(event_id),
            options,
            clock.today(),
        ))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        let event = &self.event;

        output.push_str(&format!("Event Analytics: {}\n", event.name));
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "{} | {} | {}\n",
            event.category.label(),
            event.status.label(),
            event.date
        ));
        if !event.venue.is_empty() {
            output.push_str(&format!("Venue: {}\n", event.venue));
        }
        output.push_str(&format!(
            "Allocated Budget: {}   Expected Guests: {}\n",
            event.budget.format_with_symbol(currency),
            event.expected_guests
        ));

        let progress = &self.progress;
        let timing = if progress.is_past_event {
            format!("{} days ago", -progress.days_until_event)
        } else {
            format!("in {} days", progress.days_until_event)
        };
        output.push_str(&format!(
            "Planning Progress: {}%   Event Date: {}\n\n",
            progress.planning_progress, timing
        ));

        // Budget
        let budget = &self.budget.stats;
        output.push_str("BUDGET\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "Estimated: {}   Actual: {}   Variance: {}\n",
            budget.total_estimated.format_with_symbol(currency),
            budget.total_actual.format_with_symbol(currency),
            format_variance(budget.variance, currency)
        ));
        output.push_str(&format!(
            "Items: {} (paid {}, pending {}, overdue {})   Utilization: {:.1}%\n\n",
            budget.total_items,
            budget.paid_items,
            budget.pending_items,
            budget.overdue_items,
            budget.budget_utilization
        ));

        if !self.budget.by_category.is_empty() {
            output.push_str(&format!(
                "{:<24} {:>6} {:>14} {:>14} {:>14} {:>6}\n",
                "Category", "Items", "Estimated", "Actual", "Variance", "Used"
            ));
            for row in &self.budget.by_category {
                output.push_str(&format!(
                    "{:<24} {:>6} {:>14} {:>14} {:>14} {:>6}\n",
                    truncate(&row.label, 24),
                    row.count,
                    row.estimated.format_with_symbol(currency),
                    row.actual.format_with_symbol(currency),
                    format_variance(row.variance, currency),
                    format_percentage(row.utilization)
                ));
            }
            output.push('\n');
        }

        if !self.budget.timeline.is_empty() {
            output.push_str("Spending by month added:\n");
            for month in &self.budget.timeline {
                output.push_str(&format!(
                    "  {:<10} {:>14} {:>4} items\n",
                    month.month.short_label(),
                    month.actual.format_with_symbol(currency),
                    month.count
                ));
            }
            output.push('\n');
        }

        // Guests
        let guests = &self.guests.stats;
        output.push_str("GUESTS\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "Invited: {}   Attendees: {}   Confirmed: {} ({} attending)\n",
            guests.total_guests,
            guests.total_attendees,
            guests.confirmed_guests,
            guests.confirmed_attendees
        ));
        output.push_str(&format!(
            "Pending: {}   Declined: {}   Checked in: {} ({} attendees)\n",
            guests.pending_guests,
            guests.declined_guests,
            guests.checked_in_guests,
            guests.checked_in_attendees
        ));
        output.push_str(&format!(
            "RSVP Rate: {:.1}%   Attendance Rate: {:.1}%\n\n",
            guests.rsvp_rate, guests.attendance_rate
        ));

        output.push_str(&format!(
            "{:<24} {:>8} {:>10} {:>10} {:>10}\n",
            "Category", "Guests", "Attendees", "Confirmed", "Rate"
        ));
        for row in &self.guests.by_category {
            output.push_str(&format!(
                "{:<24} {:>8} {:>10} {:>10} {:>9.1}%\n",
                row.label, row.count, row.attendees, row.confirmed, row.confirmation_rate
            ));
        }

        if !self.guests.timeline.is_empty() {
            output.push_str("\nGuests by month added:\n");
            for month in &self.guests.timeline {
                output.push_str(&format!(
                    "  {:<10} {:>4} guests {:>5} attendees\n",
                    month.month.short_label(),
                    month.count,
                    month.attendees
                ));
            }
        }

        output.push('\n');
        output.push_str("* = Over budget\n");

        output
    }

    /// Export the report to CSV as `section,key,metric,value` rows
    pub fn export_csv<W: Write>(&self, writer: W) -> EventDeskResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["section", "key", "metric", "value"])?;

        let budget = &self.budget.stats;
        let overall = [
            ("total_estimated", budget.total_estimated.to_string()),
            ("total_actual", budget.total_actual.to_string()),
            ("variance", budget.variance.to_string()),
            ("budget_utilization", format!("{:.2}", budget.budget_utilization)),
            ("total_items", budget.total_items.to_string()),
            ("paid_items", budget.paid_items.to_string()),
            ("pending_items", budget.pending_items.to_string()),
            ("overdue_items", budget.overdue_items.to_string()),
        ];
        for (metric, value) in overall {
            csv.write_record(["budget", "", metric, value.as_str()])?;
        }

        for row in &self.budget.by_category {
            let key = row.category.as_str();
            csv.write_record(["budget_category", key, "count", &row.count.to_string()])?;
            csv.write_record([
                "budget_category",
                key,
                "estimated",
                &row.estimated.to_string(),
            ])?;
            csv.write_record(["budget_category", key, "actual", &row.actual.to_string()])?;
            csv.write_record([
                "budget_category",
                key,
                "variance",
                &row.variance.to_string(),
            ])?;
        }

        for month in &self.budget.timeline {
            let key = month.month.to_string();
            csv.write_record(["budget_month", &key, "actual", &month.actual.to_string()])?;
            csv.write_record(["budget_month", &key, "count", &month.count.to_string()])?;
        }

        let guests = &self.guests.stats;
        let overall = [
            ("total_guests", guests.total_guests.to_string()),
            ("total_attendees", guests.total_attendees.to_string()),
            ("confirmed_guests", guests.confirmed_guests.to_string()),
            ("confirmed_attendees", guests.confirmed_attendees.to_string()),
            ("pending_guests", guests.pending_guests.to_string()),
            ("declined_guests", guests.declined_guests.to_string()),
            ("checked_in_guests", guests.checked_in_guests.to_string()),
            ("checked_in_attendees", guests.checked_in_attendees.to_string()),
            ("rsvp_rate", format!("{:.2}", guests.rsvp_rate)),
            ("attendance_rate", format!("{:.2}", guests.attendance_rate)),
        ];
        for (metric, value) in overall {
            csv.write_record(["guests", "", metric, value.as_str()])?;
        }

        for row in &self.guests.by_category {
            let key = row.category.as_str();
            csv.write_record(["guest_category", key, "count", &row.count.to_string()])?;
            csv.write_record([
                "guest_category",
                key,
                "attendees",
                &row.attendees.to_string(),
            ])?;
            csv.write_record([
                "guest_category",
                key,
                "confirmed",
                &row.confirmed.to_string(),
            ])?;
        }

        for month in &self.guests.timeline {
            let key = month.month.to_string();
            csv.write_record(["guest_month", &key, "count", &month.count.to_string()])?;
            csv.write_record([
                "guest_month",
                &key,
                "attendees",
                &month.attendees.to_string(),
            ])?;
        }

        let progress = &self.progress;
        csv.write_record([
            "progress",
            "",
            "days_until_event",
            &progress.days_until_event.to_string(),
        ])?;
        csv.write_record([
            "progress",
            "",
            "planning_progress",
            &progress.planning_progress.to_string(),
        ])?;

        csv.flush()
            .map_err(|e| EventDeskError::Export(e.to_string()))?;
        Ok(())
    }
}

fn budget_section(
    items: &[&BudgetItem],
    options: &ReportOptions,
    current: MonthKey,
) -> BudgetSection {
    let by_category = group_by(items.iter().copied(), |item| item.category.clone())
        .into_iter()
        .map(|group| {
            let estimated: Money = group.members.iter().map(|i| i.estimated_cost).sum();
            let actual: Money = group.members.iter().map(|i| i.actual_cost).sum();
            BudgetCategoryRow {
                label: group.key.label().to_string(),
                category: group.key,
                estimated,
                actual,
                count: group.members.len(),
                variance: actual - estimated,
                utilization: utilization(actual, estimated),
            }
        })
        .collect();

    let timeline = group_by_month(
        items.iter().copied(),
        |item| MonthKey::from_datetime(&item.created_at),
        options.trend_window,
        current,
    )
    .into_iter()
    .map(|group| MonthlySpend {
        month: group.key,
        actual: group.members.iter().map(|i| i.actual_cost).sum(),
        count: group.members.len(),
    })
    .collect();

    BudgetSection {
        stats: BudgetStats::from_items(items.iter().copied()),
        by_category,
        timeline,
    }
}

fn guest_section(guests: &[&Guest], options: &ReportOptions, current: MonthKey) -> GuestSection {
    let by_category = seeded_group_by(guests.iter().copied(), GuestCategory::known(), |guest| {
        guest.category.clone()
    })
    .into_iter()
    .map(|group| {
        let confirmed = group.members.iter().filter(|g| g.is_confirmed()).count();
        GuestCategoryRow {
            label: group.key.label().to_string(),
            category: group.key,
            count: group.members.len(),
            attendees: group
                .members
                .iter()
                .map(|g| u64::from(g.total_attendees()))
                .sum(),
            confirmed,
            confirmation_rate: percentage(confirmed as f64, group.members.len() as f64),
        }
    })
    .collect();

    let timeline = group_by_month(
        guests.iter().copied(),
        |guest| MonthKey::from_datetime(&guest.created_at),
        options.trend_window,
        current,
    )
    .into_iter()
    .map(|group| MonthlyGuests {
        month: group.key,
        count: group.members.len(),
        attendees: group
            .members
            .iter()
            .map(|g| u64::from(g.total_attendees()))
            .sum(),
    })
    .collect();

    GuestSection {
        stats: GuestStats::from_guests(guests.iter().copied()),
        by_category,
        timeline,
    }
}
