//! Ticket listing command (`vialis ls`)

use crate::board::model::build_cards;
use crate::display::{format_card_line, ticket_table};
use crate::error::{Result, VialisError};
use crate::remote::{Config, HttpTicketSource, TicketSource};
use crate::types::{Ticket, TicketPriority, TicketStatus, VALID_PRIORITIES, VALID_STATUSES};

/// Fetch the ticket list once and print it. No interaction, no retry.
pub async fn cmd_ls(
    status: Option<&str>,
    priority: Option<&str>,
    oneline: bool,
    json: bool,
) -> Result<()> {
    // Validate the filters before touching the network.
    let status_filter = match status {
        Some(raw) => Some(raw.parse::<TicketStatus>().map_err(|_| {
            VialisError::Config(format!(
                "invalid status '{}', expected one of: {}",
                raw,
                VALID_STATUSES.join(", ")
            ))
        })?),
        None => None,
    };
    let priority_filter = match priority {
        Some(raw) => Some(raw.parse::<TicketPriority>().map_err(|_| {
            VialisError::Config(format!(
                "invalid priority '{}', expected one of: {}",
                raw,
                VALID_PRIORITIES.join(", ")
            ))
        })?),
        None => None,
    };

    let config = Config::load()?;
    let source = HttpTicketSource::from_config(&config)?;

    let tickets: Vec<Ticket> = source
        .fetch_tickets()
        .await?
        .into_iter()
        .filter(|t| status_filter.is_none_or(|s| t.status() == s))
        .filter(|t| priority_filter.is_none_or(|p| t.priority() == p))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&tickets)?);
        return Ok(());
    }

    let cards = build_cards(&tickets);
    if cards.is_empty() {
        println!("No tickets reported.");
        return Ok(());
    }

    if oneline {
        for (index, card) in cards.iter().enumerate() {
            println!("{}", format_card_line(card, index));
        }
    } else {
        println!("{}", ticket_table(&cards));
    }

    Ok(())
}
