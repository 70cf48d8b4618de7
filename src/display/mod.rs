//! CLI output formatting for ticket listings.

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::board::model::Card;
use crate::board::render::{priority_badge, status_badge};

/// A row in the `vialis ls` table
#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Reported")]
    reported: String,
    #[tabled(rename = "Reports")]
    reports: u32,
}

/// Render cards as a table.
pub fn ticket_table(cards: &[Card]) -> String {
    let rows: Vec<TicketRow> = cards
        .iter()
        .enumerate()
        .map(|(index, card)| TicketRow {
            index: index + 1,
            title: card.title.clone(),
            status: card.status.to_string(),
            priority: card.priority.to_string(),
            location: card.location.clone(),
            reported: card.date.clone(),
            reports: card.reports,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format a card for single-line display with colors
pub fn format_card_line(card: &Card, index: usize) -> String {
    format!(
        "{:3} {}{} {} - {}",
        format!("{}.", index + 1).cyan(),
        status_badge(card.status),
        priority_badge(card.priority),
        card.title,
        card.location.dimmed()
    )
}
