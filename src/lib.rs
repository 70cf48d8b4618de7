pub mod board;
pub mod commands;
pub mod display;
pub mod error;
pub mod formatting;
pub mod interact;
pub mod remote;
pub mod types;

pub use board::{BoardSession, BoardState, Card, CardControl, LoadState, SectionNav};
pub use error::{Result, VialisError};
pub use interact::{ConsoleInteraction, Interaction};
pub use remote::{Config, HttpTicketSource, TicketSource};
pub use types::{
    Ticket, TicketPriority, TicketStatus, VALID_PRIORITIES, VALID_STATUSES,
};
