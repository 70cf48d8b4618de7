//! Typed rendering of the board.
//!
//! A pure function maps board state to a structured node tree; a separate
//! step serializes the tree to colored terminal lines. No template is
//! compiled at runtime, so there is no substitution step that can fail
//! mid-batch.

use owo_colors::OwoColorize;

use crate::board::model::{BoardState, Card, LoadState};
use crate::board::nav::SectionNav;
use crate::types::{TicketPriority, TicketStatus};

/// A node in the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Plain text line.
    Text(String),
    /// Card heading line.
    Heading(String),
    /// Status and priority badges for a card.
    Badges {
        status: TicketStatus,
        priority: TicketPriority,
    },
    /// One labelled field line.
    Field { label: &'static str, value: String },
    /// The single inline error element shown when a load fails.
    Error(String),
    /// One card's subtree.
    Group(Vec<Node>),
}

/// Render one card to a node subtree.
pub fn card_node(card: &Card, index: usize) -> Node {
    let mut children = vec![
        Node::Heading(format!("{}. {}", index + 1, card.title)),
        Node::Badges {
            status: card.status,
            priority: card.priority,
        },
        Node::Field {
            label: "description",
            value: card.description.clone(),
        },
        Node::Field {
            label: "location",
            value: card.location.clone(),
        },
        Node::Field {
            label: "reported",
            value: card.date.clone(),
        },
        Node::Field {
            label: "reports",
            value: card.reports.to_string(),
        },
    ];

    if let Some(region) = &card.region {
        children.push(Node::Field {
            label: "region",
            value: region.clone(),
        });
    }
    if let Some(category) = &card.category {
        children.push(Node::Field {
            label: "category",
            value: category.clone(),
        });
    }

    children.push(Node::Field {
        label: "assigned",
        value: card.assigned.clone(),
    });
    children.push(Node::Field {
        label: "notes",
        value: card.notes.clone(),
    });

    Node::Group(children)
}

/// Render the ticket list, or its single error element, to nodes.
pub fn board_nodes(state: &BoardState) -> Vec<Node> {
    match &state.load {
        LoadState::Loading => vec![Node::Text("Loading tickets...".to_string())],
        LoadState::Failed(message) => vec![Node::Error(format!(
            "Failed to load tickets: {}",
            message
        ))],
        LoadState::Loaded if state.cards.is_empty() => {
            vec![Node::Text("No tickets reported.".to_string())]
        }
        LoadState::Loaded => state
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| card_node(card, index))
            .collect(),
    }
}

/// Color a status badge consistently with the CLI listing.
pub fn status_badge(status: TicketStatus) -> String {
    let badge = format!("[{}]", status);
    match status {
        TicketStatus::New => badge.yellow().to_string(),
        TicketStatus::InProgress => badge.cyan().to_string(),
        TicketStatus::AwaitingParts => badge.magenta().to_string(),
        TicketStatus::Closed => badge.green().to_string(),
    }
}

/// Color a priority badge consistently with the CLI listing.
pub fn priority_badge(priority: TicketPriority) -> String {
    let badge = format!("[{}]", priority);
    match priority {
        TicketPriority::Critical => badge.red().to_string(),
        TicketPriority::High => badge.yellow().to_string(),
        _ => badge,
    }
}

/// Serialize a node tree to terminal lines.
pub fn render_lines(nodes: &[Node]) -> Vec<String> {
    let mut lines = Vec::new();
    for node in nodes {
        push_node(node, &mut lines, 0);
    }
    lines
}

fn push_node(node: &Node, lines: &mut Vec<String>, indent: usize) {
    let pad = "  ".repeat(indent);
    match node {
        Node::Text(text) => lines.push(format!("{}{}", pad, text)),
        Node::Heading(text) => lines.push(format!("{}{}", pad, text.bold())),
        Node::Badges { status, priority } => lines.push(format!(
            "{}{} {}",
            pad,
            status_badge(*status),
            priority_badge(*priority)
        )),
        Node::Field { label, value } => {
            lines.push(format!("{}{}: {}", pad, label.dimmed(), value))
        }
        Node::Error(message) => lines.push(format!("{}{}", pad, message.red())),
        Node::Group(children) => {
            for child in children {
                push_node(child, lines, indent + 1);
            }
            lines.push(String::new());
        }
    }
}

/// Render the navigation bar as a single line.
///
/// The highlighted item is bracketed and colored; everything else is
/// dimmed.
pub fn nav_line(nav: &SectionNav) -> String {
    let rendered: Vec<String> = nav
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if nav.highlighted_index() == Some(index) {
                format!("[{}]", item.label).cyan().bold().to_string()
            } else {
                format!(" {} ", item.label).dimmed().to_string()
            }
        })
        .collect();
    rendered.join(" ")
}
