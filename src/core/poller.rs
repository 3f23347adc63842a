use crate::core::{ConfigProvider, MonitorFactory, PollCycle, VenueMonitor};
use crate::domain::model::EventsResponse;
use crate::utils::error::Result;
use reqwest::Client;

/// One fetch-and-dispatch cycle over the remote event list.
pub struct EventPoller<F: MonitorFactory, C: ConfigProvider> {
    factory: F,
    config: C,
    client: Client,
}

impl<F: MonitorFactory, C: ConfigProvider> EventPoller<F, C> {
    pub fn new(factory: F, config: C) -> Self {
        Self {
            factory,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<F: MonitorFactory, C: ConfigProvider> PollCycle for EventPoller<F, C> {
    /// Fetches the event list and triggers one monitor per event, in order.
    /// The first failure (transport, schema, or monitor) abandons the cycle;
    /// remaining events are not processed.
    async fn poll_once(&self) -> Result<usize> {
        tracing::debug!("Making API request to: {}", self.config.api_endpoint());
        let response = self.client.get(self.config.api_endpoint()).send().await?;

        tracing::debug!("API response status: {}", response.status());
        let body = response.error_for_status()?.bytes().await?;

        // Decoded through serde_json directly so a malformed body surfaces as
        // a schema error, distinct from transport failures.
        let parsed: EventsResponse = serde_json::from_slice(&body)?;

        for event in &parsed.events {
            let monitor = self.factory.create(&event.performer_id, &event.venue_id);
            monitor.monitor_venue().await?;
        }

        Ok(parsed.events.len())
    }
}
