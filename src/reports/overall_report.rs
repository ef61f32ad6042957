//! Overall (cross-event) analytics report

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::clock::Clock;
use crate::error::{EventDeskError, EventDeskResult};
use crate::models::{
    BudgetItem, Event, EventCategory, EventId, EventStatus, Guest, Money, MonthKey,
};
use crate::storage::Collections;

use super::aggregate::{BudgetStats, GuestStats};
use super::group::{group_by, group_by_month};
use super::ReportOptions;

/// Headline figures across every event
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverallStats {
    pub total_events: usize,
    /// Events that are confirmed or underway
    pub active_events: usize,
    pub completed_events: usize,
    /// Sum of every event's allocated budget
    pub total_budget: Money,
    pub total_expected_guests: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: EventCategory,
    pub label: String,
    pub count: usize,
    pub budget: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: EventStatus,
    pub label: String,
    pub count: usize,
}

/// Events created in one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyCount {
    pub month: MonthKey,
    pub count: usize,
}

/// Condensed view of a recently created event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentEvent {
    pub id: EventId,
    pub name: String,
    pub category: EventCategory,
    pub status: EventStatus,
    pub date: NaiveDate,
    pub budget: Money,
    pub created_at: DateTime<Utc>,
}

impl From<&Event> for RecentEvent {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            category: event.category.clone(),
            status: event.status.clone(),
            date: event.date,
            budget: event.budget,
            created_at: event.created_at,
        }
    }
}

/// Analytics across every event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallAnalyticsReport {
    pub overall_stats: OverallStats,
    /// Budget items across all events
    pub budget_stats: BudgetStats,
    /// Guests across all events
    pub guest_stats: GuestStats,
    pub events_by_category: Vec<CategoryCount>,
    pub events_by_status: Vec<StatusCount>,
    pub monthly_trend: Vec<MonthlyCount>,
    pub recent_events: Vec<RecentEvent>,
}

impl OverallAnalyticsReport {
    /// Assemble the report from the unscoped collections
    pub fn compute(
        events: &[Event],
        budget_items: &[BudgetItem],
        guests: &[Guest],
        options: &ReportOptions,
        today: NaiveDate,
    ) -> Self {
        let overall_stats = OverallStats {
            total_events: events.len(),
            active_events: events.iter().filter(|e| e.is_active()).count(),
            completed_events: events.iter().filter(|e| e.is_completed()).count(),
            total_budget: events.iter().map(|e| e.budget).sum(),
            total_expected_guests: events.iter().map(|e| u64::from(e.expected_guests)).sum(),
        };

        let events_by_category = group_by(events, |e| e.category.clone())
            .into_iter()
            .map(|group| CategoryCount {
                label: group.key.label().to_string(),
                category: group.key,
                count: group.members.len(),
                budget: group.members.iter().map(|e| e.budget).sum(),
            })
            .collect();

        let events_by_status = group_by(events, |e| e.status.clone())
            .into_iter()
            .map(|group| StatusCount {
                label: group.key.label().to_string(),
                status: group.key,
                count: group.members.len(),
            })
            .collect();

        let monthly_trend = group_by_month(
            events,
            |e| MonthKey::from_datetime(&e.created_at),
            options.trend_window,
            MonthKey::from_date(today),
        )
        .into_iter()
        .map(|group| MonthlyCount {
            month: group.key,
            count: group.members.len(),
        })
        .collect();

        Self {
            overall_stats,
            budget_stats: BudgetStats::from_items(budget_items),
            guest_stats: GuestStats::from_guests(guests),
            events_by_category,
            events_by_status,
            monthly_trend,
            recent_events: recent_events(events, options.recent_limit),
        }
    }

    pub fn generate(
        collections: &Collections,
        options: &ReportOptions,
        clock: &dyn Clock,
    ) -> Self {
        Self::compute(
            &collections.events,
            &collections.budget_items,
            &collections.guests,
            options,
            clock.today(),
        )
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        let stats = &self.overall_stats;

        output.push_str("Overall Analytics\n");
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "Events: {}   Active: {}   Completed: {}\n",
            stats.total_events, stats.active_events, stats.completed_events
        ));
        output.push_str(&format!(
            "Total Budget: {}   Expected Guests: {}\n",
            stats.total_budget.format_with_symbol(currency),
            stats.total_expected_guests
        ));
        output.push_str(&format!(
            "Estimated: {}   Spent: {}   Utilization: {:.1}%\n",
            self.budget_stats.total_estimated.format_with_symbol(currency),
            self.budget_stats.total_actual.format_with_symbol(currency),
            self.budget_stats.budget_utilization
        ));
        output.push_str(&format!(
            "Guests: {}   Confirmed: {}   RSVP Rate: {:.1}%\n\n",
            self.guest_stats.total_guests,
            self.guest_stats.confirmed_guests,
            self.guest_stats.rsvp_rate
        ));

        if !self.events_by_category.is_empty() {
            output.push_str(&format!(
                "{:<30} {:>8} {:>16}\n",
                "Category", "Events", "Budget"
            ));
            output.push_str(&"-".repeat(80));
            output.push('\n');
            for row in &self.events_by_category {
                output.push_str(&format!(
                    "{:<30} {:>8} {:>16}\n",
                    row.label,
                    row.count,
                    row.budget.format_with_symbol(currency)
                ));
            }
            output.push('\n');
        }

        if !self.events_by_status.is_empty() {
            output.push_str(&format!("{:<30} {:>8}\n", "Status", "Events"));
            output.push_str(&"-".repeat(80));
            output.push('\n');
            for row in &self.events_by_status {
                output.push_str(&format!("{:<30} {:>8}\n", row.label, row.count));
            }
            output.push('\n');
        }

        if !self.monthly_trend.is_empty() {
            output.push_str("Events created per month:\n");
            for month in &self.monthly_trend {
                output.push_str(&format!(
                    "  {:<10} {:>4}\n",
                    month.month.short_label(),
                    month.count
                ));
            }
            output.push('\n');
        }

        if !self.recent_events.is_empty() {
            output.push_str("Recent events:\n");
            for event in &self.recent_events {
                output.push_str(&format!(
                    "  {:<8} {:<30} {:<12} {}\n",
                    event.id,
                    event.name,
                    event.status.label(),
                    event.date
                ));
            }
        }

        output
    }

    /// Export the report to CSV as `section,key,count,amount` rows
    pub fn export_csv<W: Write>(&self, writer: W) -> EventDeskResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["section", "key", "count", "amount"])?;

        let stats = &self.overall_stats;
        csv.write_record([
            "overall",
            "total_events",
            &stats.total_events.to_string(),
            "",
        ])?;
        csv.write_record([
            "overall",
            "active_events",
            &stats.active_events.to_string(),
            "",
        ])?;
        csv.write_record([
            "overall",
            "completed_events",
            &stats.completed_events.to_string(),
            "",
        ])?;
        csv.write_record([
            "overall",
            "total_budget",
            "",
            &stats.total_budget.to_string(),
        ])?;
        csv.write_record([
            "overall",
            "total_expected_guests",
            &stats.total_expected_guests.to_string(),
            "",
        ])?;

        for row in &self.events_by_category {
            csv.write_record([
                "category",
                row.category.as_str(),
                &row.count.to_string(),
                &row.budget.to_string(),
            ])?;
        }

        for row in &self.events_by_status {
            csv.write_record(["status", row.status.as_str(), &row.count.to_string(), ""])?;
        }

        for month in &self.monthly_trend {
            csv.write_record([
                "month",
                &month.month.to_string(),
                &month.count.to_string(),
                "",
            ])?;
        }

        for event in &self.recent_events {
            csv.write_record([
                "recent",
                &event.id.to_string(),
                "",
                &event.budget.to_string(),
            ])?;
        }

        csv.flush()
            .map_err(|e| EventDeskError::Export(e.to_string()))?;
        Ok(())
    }
}

/// The `limit` newest events by creation time; ties keep input order
fn recent_events(events: &[Event], limit: usize) -> Vec<RecentEvent> {
    let mut newest: Vec<&Event> = events.iter().collect();
    newest.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    newest
        .into_iter()
        .take(limit)
        .map(RecentEvent::from)
        .collect()
}
