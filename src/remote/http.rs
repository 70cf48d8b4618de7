//! HTTP client for the ticket-list endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header;
use url::Url;

use crate::error::{Result, VialisError};
use crate::types::Ticket;

use super::{Config, TicketSource};

/// Path of the ticket-list endpoint, relative to the configured base URL.
const TICKETS_PATH: &str = "/api/tickets";

/// Ticket source backed by the remote HTTP service.
#[derive(Debug)]
pub struct HttpTicketSource {
    client: Client,
    endpoint: Url,
    token: Option<String>,
}

impl HttpTicketSource {
    /// Create a source from configuration.
    ///
    /// Configures the HTTP client with a 30s connect timeout and 60s total
    /// timeout, so a hung connection surfaces as the inline error instead
    /// of leaving the board loading forever.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base = config.base_url();
        let endpoint = Url::parse(&base)
            .and_then(|url| url.join(TICKETS_PATH))
            .map_err(|e| {
                VialisError::Config(format!("invalid ticket service URL '{}': {}", base, e))
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            token: config.token(),
        })
    }

    /// Full URL of the ticket-list endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl TicketSource for HttpTicketSource {
    async fn fetch_tickets(&self) -> Result<Vec<Ticket>> {
        let mut request = self.client.get(self.endpoint.clone());
        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(VialisError::Api(format!(
                "ticket service returned HTTP {}",
                status
            )));
        }

        let tickets: Vec<Ticket> = response.json().await?;
        Ok(tickets)
    }
}
