use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VialisError;

pub const CONFIG_DIR: &str = ".vialis";

/// Triage status of a ticket, as reported by the server.
///
/// The wire carries free-form strings; use [`TicketStatus::parse_lenient`]
/// when an unknown value must degrade to the default instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    New,
    InProgress,
    AwaitingParts,
    Closed,
}

impl TicketStatus {
    /// Parse a wire string, falling back to [`TicketStatus::New`] for
    /// unknown or missing values.
    pub fn parse_lenient(raw: Option<&str>) -> TicketStatus {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::New => write!(f, "new"),
            TicketStatus::InProgress => write!(f, "in progress"),
            TicketStatus::AwaitingParts => write!(f, "awaiting parts"),
            TicketStatus::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = VialisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(TicketStatus::New),
            "in progress" | "in_progress" => Ok(TicketStatus::InProgress),
            "awaiting parts" | "awaiting_parts" => Ok(TicketStatus::AwaitingParts),
            "closed" => Ok(TicketStatus::Closed),
            _ => Err(VialisError::InvalidStatus(s.to_string())),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["new", "in progress", "awaiting parts", "closed"];

/// Priority of a ticket, as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    /// Parse a wire string, falling back to [`TicketPriority::Medium`] for
    /// unknown or missing values.
    pub fn parse_lenient(raw: Option<&str>) -> TicketPriority {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketPriority::Low => write!(f, "low"),
            TicketPriority::Medium => write!(f, "medium"),
            TicketPriority::High => write!(f, "high"),
            TicketPriority::Critical => write!(f, "critical"),
        }
    }
}

impl FromStr for TicketPriority {
    type Err = VialisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            "critical" => Ok(TicketPriority::Critical),
            _ => Err(VialisError::InvalidPriority(s.to_string())),
        }
    }
}

pub const VALID_PRIORITIES: &[&str] = &["low", "medium", "high", "critical"];

/// One ticket record as served by `GET /api/tickets`.
///
/// Server-owned and read-only from the client's perspective. Every field
/// is optional on the wire; rendering substitutes fixed fallbacks rather
/// than surfacing missing data as an error. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(default)]
    pub ticket_id: Option<u64>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub priority: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub reported_at: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub region_name: Option<String>,

    #[serde(default)]
    pub reported_by: Option<String>,

    #[serde(default)]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub assignment_notes: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub amount_of_reports: Option<u32>,
}

impl Ticket {
    /// Status parsed leniently from the wire string.
    pub fn status(&self) -> TicketStatus {
        TicketStatus::parse_lenient(self.status.as_deref())
    }

    /// Priority parsed leniently from the wire string.
    pub fn priority(&self) -> TicketPriority {
        TicketPriority::parse_lenient(self.priority.as_deref())
    }
}
