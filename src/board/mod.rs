//! Ticket board: card view-models, navigation, rendering, and the
//! interactive session that ties them to a ticket source.

pub mod model;
pub mod nav;
pub mod render;
pub mod session;

pub use model::{BoardState, Card, CardControl, LoadState, build_cards};
pub use nav::{NavItem, Section, SectionNav};
pub use render::{Node, board_nodes, card_node, render_lines};
pub use session::{BoardCommand, BoardSession, parse_command};
