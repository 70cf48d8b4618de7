//! Interactive board session.
//!
//! Owns the board state, the section navigation, and a ticket source, and
//! applies operator commands one at a time. All mutation is local: the
//! only network traffic a session ever produces is the list fetch.

use std::collections::BTreeMap;

use crate::board::model::{
    BoardState, CardControl, LoadState, activate_control,
};
use crate::board::nav::{NavItem, Section, SectionNav};
use crate::board::render::{board_nodes, nav_line, render_lines, status_badge};
use crate::interact::Interaction;
use crate::remote::TicketSource;

/// One operator command, parsed from a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    /// Activate a card control at a zero-based card index.
    Control {
        control: CardControl,
        index: usize,
    },
    /// Activate a navigation item by label.
    Nav(String),
    Reload,
    Help,
    Quit,
}

/// Parse an operator input line.
///
/// Card indexes are entered one-based and converted here. Anything
/// unrecognized is `None`.
pub fn parse_command(line: &str) -> Option<BoardCommand> {
    let mut words = line.split_whitespace();
    let verb = words.next()?.to_lowercase();

    let command = match verb.as_str() {
        "assign" => BoardCommand::Control {
            control: CardControl::Assign,
            index: parse_index(words.next()?)?,
        },
        "notes" => BoardCommand::Control {
            control: CardControl::AddNotes,
            index: parse_index(words.next()?)?,
        },
        "notify" => BoardCommand::Control {
            control: CardControl::Notify,
            index: parse_index(words.next()?)?,
        },
        "resolve" => BoardCommand::Control {
            control: CardControl::Resolve,
            index: parse_index(words.next()?)?,
        },
        "nav" => BoardCommand::Nav(words.next()?.to_string()),
        "reload" => BoardCommand::Reload,
        "help" => BoardCommand::Help,
        "quit" | "q" | "exit" => BoardCommand::Quit,
        _ => return None,
    };

    // Trailing garbage makes the whole line unrecognized.
    if words.next().is_some() {
        return None;
    }

    Some(command)
}

fn parse_index(word: &str) -> Option<usize> {
    let n: usize = word.parse().ok()?;
    n.checked_sub(1)
}

/// The board's top-level panels.
fn default_nav() -> SectionNav {
    SectionNav::new(
        vec![
            NavItem::new("Overview", "overview"),
            NavItem::new("Tickets", "tickets"),
            NavItem::new("Regions", "regions"),
            NavItem::new("Help", "help"),
        ],
        vec![
            Section::new("overview", "Overview"),
            Section::new("tickets", "Reported tickets"),
            Section::new("regions", "Tickets by region"),
            Section::new("help", "Commands"),
        ],
    )
}

/// Interactive board over a ticket source.
pub struct BoardSession<'a> {
    state: BoardState,
    nav: SectionNav,
    source: &'a dyn TicketSource,
}

impl<'a> BoardSession<'a> {
    pub fn new(source: &'a dyn TicketSource) -> Self {
        Self {
            state: BoardState::default(),
            nav: default_nav(),
            source,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn nav(&self) -> &SectionNav {
        &self.nav
    }

    /// Fetch the ticket list and rebuild every card.
    ///
    /// All-or-nothing: on any fetch failure the previous cards are dropped
    /// and a single error message takes their place. No retry.
    pub async fn load(&mut self) {
        self.state.load = LoadState::Loading;
        match self.source.fetch_tickets().await {
            Ok(tickets) => self.state.load_tickets(&tickets),
            Err(e) => self.state.load_failed(e.to_string()),
        }
    }

    /// Activate a card control through the interaction port.
    pub fn activate(
        &mut self,
        index: usize,
        control: CardControl,
        interaction: &mut dyn Interaction,
    ) {
        activate_control(&mut self.state, index, control, interaction);
    }

    /// Activate a navigation item by label. Returns `false` when no item
    /// carries that label.
    pub fn navigate(&mut self, label: &str) -> bool {
        self.nav.activate_by_label(label)
    }

    /// Render the current frame: the navigation bar followed by the
    /// visible section's panel.
    pub fn frame(&self) -> Vec<String> {
        let mut lines = vec![nav_line(&self.nav), String::new()];

        match self.nav.visible_section().map(|s| s.id.clone()) {
            None => lines.push("No section selected. Try `nav tickets`.".to_string()),
            Some(id) => match id.as_str() {
                "tickets" => lines.extend(render_lines(&board_nodes(&self.state))),
                "overview" => lines.extend(self.overview_lines()),
                "regions" => lines.extend(self.region_lines()),
                "help" => lines.extend(help_lines()),
                // An item may declare a target no panel implements; the
                // highlight stands while nothing is shown.
                _ => {}
            },
        }

        lines
    }

    fn overview_lines(&self) -> Vec<String> {
        match &self.state.load {
            LoadState::Failed(_) => {
                return render_lines(&board_nodes(&self.state));
            }
            LoadState::Loading => return vec!["Loading tickets...".to_string()],
            LoadState::Loaded => {}
        }

        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for card in &self.state.cards {
            *counts.entry(card.status.to_string()).or_default() += 1;
        }

        let mut lines = vec![format!("{} tickets on the board", self.state.cards.len())];
        for card in &self.state.cards {
            // One badge per card keeps the overview scannable without
            // repeating the full card body.
            lines.push(format!("  {} {}", status_badge(card.status), card.title));
        }
        lines.push(String::new());
        for (status, count) in counts {
            lines.push(format!("  {}: {}", status, count));
        }
        lines
    }

    fn region_lines(&self) -> Vec<String> {
        if let LoadState::Failed(_) = self.state.load {
            return render_lines(&board_nodes(&self.state));
        }

        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for card in &self.state.cards {
            let region = card
                .region
                .clone()
                .unwrap_or_else(|| "(no region)".to_string());
            *counts.entry(region).or_default() += 1;
        }

        if counts.is_empty() {
            return vec!["No regions to show.".to_string()];
        }

        counts
            .into_iter()
            .map(|(region, count)| format!("{}: {}", region, count))
            .collect()
    }
}

fn help_lines() -> Vec<String> {
    [
        "assign <card>   prompt for a team and record it on the card",
        "notes <card>    prompt for notes and record them on the card",
        "notify <card>   send the area notification message",
        "resolve <card>  mark the ticket resolved (display only)",
        "nav <section>   switch section (overview, tickets, regions, help)",
        "reload          fetch the ticket list again",
        "quit            leave the board",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
