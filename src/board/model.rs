//! Board state and card view-models.
//!
//! This module separates the raw board state from rendering so the card
//! lifecycle (build, rebuild, annotate) can be tested without a terminal.
//! Cards are rebuilt from scratch on every load; nothing is patched in
//! place and nothing is written back to the server.

use crate::formatting::{ADDRESS_FALLBACK, DEFAULT_REPORT_COUNT, format_reported_date};
use crate::interact::Interaction;
use crate::types::{Ticket, TicketPriority, TicketStatus};

/// Prefix applied to operator-entered assignment text.
pub const ASSIGNED_PREFIX: &str = "Assigned to: ";

/// Prefix applied to operator-entered notes text.
pub const NOTES_PREFIX: &str = "Notes: ";

/// Fixed confirmation surfaced by the notify control.
pub const NOTIFY_MESSAGE: &str = "Message sent to everyone in the area.";

/// Fixed confirmation surfaced by the resolve control.
pub const RESOLVE_MESSAGE: &str = "The ticket has been resolved.";

/// Client-local rendered representation of one ticket.
///
/// Display fields are computed once when the card is built. `assigned` and
/// `notes` are the only operator-writable fields, and the write is local
/// only: it lives until the next load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub description: String,
    /// Address with the fixed fallback already substituted.
    pub location: String,
    /// Reported-at timestamp already formatted for display.
    pub date: String,
    pub reports: u32,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub region: Option<String>,
    pub category: Option<String>,
    pub assigned: String,
    pub notes: String,
}

impl Card {
    /// Build a card from a wire ticket.
    ///
    /// Returns `None` when the record has no usable title; callers skip
    /// such records rather than aborting the batch.
    pub fn from_ticket(ticket: &Ticket) -> Option<Card> {
        let title = ticket.title.as_deref().map(str::trim).unwrap_or_default();
        if title.is_empty() {
            return None;
        }

        Some(Card {
            title: title.to_string(),
            description: ticket.description.clone().unwrap_or_default(),
            location: ticket
                .address
                .clone()
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| ADDRESS_FALLBACK.to_string()),
            date: format_reported_date(ticket.reported_at.as_deref()),
            reports: ticket.amount_of_reports.unwrap_or(DEFAULT_REPORT_COUNT),
            status: ticket.status(),
            priority: ticket.priority(),
            region: ticket.region_name.clone(),
            category: ticket.category.clone(),
            assigned: ticket.assigned_to.clone().unwrap_or_default(),
            notes: ticket.assignment_notes.clone().unwrap_or_default(),
        })
    }
}

/// Build cards for a fetched batch, preserving the server's order.
///
/// Records that cannot become a card are skipped and reported on the
/// diagnostic channel, never to the operator.
pub fn build_cards(tickets: &[Ticket]) -> Vec<Card> {
    tickets
        .iter()
        .filter_map(|ticket| {
            let card = Card::from_ticket(ticket);
            if card.is_none() {
                tracing::warn!(ticket_id = ?ticket.ticket_id, "skipping ticket without a title");
            }
            card
        })
        .collect()
}

/// Outcome of the most recent load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    /// Single human-readable message shown in place of the list.
    Failed(String),
}

/// Raw board state: the card list and how the last load ended.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    pub cards: Vec<Card>,
    pub load: LoadState,
}

impl BoardState {
    /// Replace the whole card set from a fetched batch.
    ///
    /// Always clears the previous cards first; loading twice with the same
    /// batch yields the same card count, never an accumulation.
    pub fn load_tickets(&mut self, tickets: &[Ticket]) {
        self.cards.clear();
        self.cards = build_cards(tickets);
        self.load = LoadState::Loaded;
    }

    /// Record a failed load.
    ///
    /// All cards are dropped so the board shows the single error message
    /// instead of a stale or partial list.
    pub fn load_failed(&mut self, message: String) {
        self.cards.clear();
        self.load = LoadState::Failed(message);
    }
}

/// Interactive controls exposed by every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardControl {
    Assign,
    AddNotes,
    Notify,
    Resolve,
}

/// Activate a control on the card at `index`.
///
/// A control addressed at a card that does not exist is silently skipped.
/// Assign and add-notes go through the interaction port; cancelled or
/// empty input leaves the card unchanged. Notify and resolve only surface
/// their fixed confirmation.
pub fn activate_control(
    state: &mut BoardState,
    index: usize,
    control: CardControl,
    interaction: &mut dyn Interaction,
) {
    let Some(card) = state.cards.get_mut(index) else {
        return;
    };

    match control {
        CardControl::Assign => {
            if let Some(text) = interaction.prompt("Enter the assigned team:") {
                card.assigned = format!("{}{}", ASSIGNED_PREFIX, text);
            }
        }
        CardControl::AddNotes => {
            if let Some(text) = interaction.prompt("Enter the notes to be added:") {
                card.notes = format!("{}{}", NOTES_PREFIX, text);
            }
        }
        CardControl::Notify => interaction.notify(NOTIFY_MESSAGE),
        CardControl::Resolve => interaction.notify(RESOLVE_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Interaction stub that replays scripted prompt answers.
    struct Scripted {
        answers: Vec<Option<String>>,
        notices: Vec<String>,
    }

    impl Scripted {
        fn new(answers: &[Option<&str>]) -> Self {
            Self {
                answers: answers
                    .iter()
                    .rev()
                    .map(|a| a.map(str::to_string))
                    .collect(),
                notices: Vec::new(),
            }
        }
    }

    impl Interaction for Scripted {
        fn prompt(&mut self, _message: &str) -> Option<String> {
            self.answers.pop().flatten()
        }

        fn notify(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
    }

    fn ticket(title: &str) -> Ticket {
        Ticket {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_card_fallbacks() {
        let card = Card::from_ticket(&ticket("Pothole")).unwrap();
        assert_eq!(card.location, ADDRESS_FALLBACK);
        assert_eq!(card.date, "N/A");
        assert_eq!(card.reports, 1);
        assert_eq!(card.assigned, "");
        assert_eq!(card.notes, "");
    }

    #[test]
    fn test_card_uses_server_fields() {
        let wire = Ticket {
            title: Some("Pothole".to_string()),
            description: Some("Large crack".to_string()),
            address: Some("12 Elm St".to_string()),
            reported_at: Some("2024-05-01T10:00:00Z".to_string()),
            amount_of_reports: Some(3),
            assigned_to: Some("Roads Dept".to_string()),
            assignment_notes: Some("check drainage".to_string()),
            status: Some("In Progress".to_string()),
            priority: Some("High".to_string()),
            ..Default::default()
        };
        let card = Card::from_ticket(&wire).unwrap();
        assert_eq!(card.location, "12 Elm St");
        assert_eq!(card.date, "May 1, 10:00 AM");
        assert_eq!(card.reports, 3);
        assert_eq!(card.assigned, "Roads Dept");
        assert_eq!(card.notes, "check drainage");
        assert_eq!(card.status, TicketStatus::InProgress);
        assert_eq!(card.priority, TicketPriority::High);
    }

    #[test]
    fn test_card_requires_title() {
        assert!(Card::from_ticket(&Ticket::default()).is_none());
        assert!(Card::from_ticket(&ticket("   ")).is_none());
    }

    #[test]
    fn test_build_cards_preserves_order_and_skips_titleless() {
        let batch = vec![
            ticket("First"),
            Ticket::default(),
            ticket("Second"),
            ticket("Third"),
        ];
        let cards = build_cards(&batch);
        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_load_twice_does_not_accumulate() {
        let batch = vec![ticket("a"), ticket("b"), ticket("c")];
        let mut state = BoardState::default();
        state.load_tickets(&batch);
        state.load_tickets(&batch);
        assert_eq!(state.cards.len(), 3);
        assert_eq!(state.load, LoadState::Loaded);
    }

    #[test]
    fn test_failed_load_drops_cards() {
        let mut state = BoardState::default();
        state.load_tickets(&[ticket("a")]);
        state.load_failed("connection refused".to_string());
        assert!(state.cards.is_empty());
        assert_eq!(
            state.load,
            LoadState::Failed("connection refused".to_string())
        );
    }

    #[test]
    fn test_assign_overwrites_with_prefix() {
        let mut state = BoardState::default();
        state.load_tickets(&[ticket("Pothole")]);

        let mut interaction = Scripted::new(&[Some("Roads Dept")]);
        activate_control(&mut state, 0, CardControl::Assign, &mut interaction);
        assert_eq!(state.cards[0].assigned, "Assigned to: Roads Dept");
    }

    #[test]
    fn test_assign_cancel_leaves_prior_text() {
        let wire = Ticket {
            title: Some("Pothole".to_string()),
            assigned_to: Some("Night shift".to_string()),
            ..Default::default()
        };
        let mut state = BoardState::default();
        state.load_tickets(&[wire]);

        let mut interaction = Scripted::new(&[None]);
        activate_control(&mut state, 0, CardControl::Assign, &mut interaction);
        assert_eq!(state.cards[0].assigned, "Night shift");
    }

    #[test]
    fn test_notes_prefix() {
        let mut state = BoardState::default();
        state.load_tickets(&[ticket("Pothole")]);

        let mut interaction = Scripted::new(&[Some("needs gravel")]);
        activate_control(&mut state, 0, CardControl::AddNotes, &mut interaction);
        assert_eq!(state.cards[0].notes, "Notes: needs gravel");
    }

    #[test]
    fn test_notify_and_resolve_only_surface_messages() {
        let mut state = BoardState::default();
        state.load_tickets(&[ticket("Pothole")]);
        let before = state.cards.clone();

        let mut interaction = Scripted::new(&[]);
        activate_control(&mut state, 0, CardControl::Notify, &mut interaction);
        activate_control(&mut state, 0, CardControl::Resolve, &mut interaction);

        assert_eq!(state.cards, before);
        assert_eq!(interaction.notices, [NOTIFY_MESSAGE, RESOLVE_MESSAGE]);
    }

    #[test]
    fn test_missing_card_is_silently_skipped() {
        let mut state = BoardState::default();
        state.load_tickets(&[ticket("Pothole")]);

        let mut interaction = Scripted::new(&[Some("unused")]);
        activate_control(&mut state, 5, CardControl::Assign, &mut interaction);
        assert_eq!(state.cards[0].assigned, "");
    }
}
