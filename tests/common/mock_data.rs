//! Mock data builders for creating wire tickets in tests.

use vialis::types::Ticket;

/// Builder for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    /// Create a new ticket builder with the given title
    pub fn new(title: &str) -> Self {
        Self {
            ticket: Ticket {
                title: Some(title.to_string()),
                ..Default::default()
            },
        }
    }

    /// Create a builder for a record with no title at all
    pub fn untitled() -> Self {
        Self {
            ticket: Ticket::default(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.ticket.description = Some(description.to_string());
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.ticket.address = Some(address.to_string());
        self
    }

    pub fn reported_at(mut self, reported_at: &str) -> Self {
        self.ticket.reported_at = Some(reported_at.to_string());
        self
    }

    pub fn reports(mut self, amount: u32) -> Self {
        self.ticket.amount_of_reports = Some(amount);
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.ticket.status = Some(status.to_string());
        self
    }

    pub fn region(mut self, region: &str) -> Self {
        self.ticket.region_name = Some(region.to_string());
        self
    }

    pub fn assigned_to(mut self, assigned_to: &str) -> Self {
        self.ticket.assigned_to = Some(assigned_to.to_string());
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// Shorthand for a batch of plain titled tickets
pub fn mock_tickets(titles: &[&str]) -> Vec<Ticket> {
    titles.iter().map(|t| TicketBuilder::new(t).build()).collect()
}
