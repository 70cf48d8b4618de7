//! Remote ticket service module.
//!
//! The ticket service is an opaque external collaborator: the client
//! issues a single list request and treats every failure mode uniformly.
//! Nothing is ever written back.

pub mod config;
pub mod http;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Ticket;

pub use config::{ApiConfig, Config};
pub use http::HttpTicketSource;

/// Source of ticket records for the board.
#[async_trait]
pub trait TicketSource: Send + Sync {
    /// Fetch the full ticket list.
    ///
    /// Transport errors, non-success statuses, and malformed bodies all
    /// surface as a single error; no retry is attempted.
    async fn fetch_tickets(&self) -> Result<Vec<Ticket>>;
}
