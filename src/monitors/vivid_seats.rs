use crate::core::scheduler::MONITOR_LABEL;
use crate::core::{MonitorFactory, VenueMonitor};
use crate::utils::error::{PollerError, Result};

/// Venue monitor for one `(performer, venue)` pair. The poller owns only
/// construction and triggering; the monitoring engine plugs in behind
/// `monitor_venue`.
#[derive(Debug, Clone)]
pub struct VividSeatsMonitor {
    performer_id: String,
    venue_id: String,
}

impl VividSeatsMonitor {
    pub fn new(performer_id: impl Into<String>, venue_id: impl Into<String>) -> Self {
        Self {
            performer_id: performer_id.into(),
            venue_id: venue_id.into(),
        }
    }

    pub fn performer_id(&self) -> &str {
        &self.performer_id
    }

    pub fn venue_id(&self) -> &str {
        &self.venue_id
    }
}

#[async_trait::async_trait]
impl VenueMonitor for VividSeatsMonitor {
    async fn monitor_venue(&self) -> Result<()> {
        if self.performer_id.trim().is_empty() || self.venue_id.trim().is_empty() {
            return Err(PollerError::MonitorError {
                performer_id: self.performer_id.clone(),
                venue_id: self.venue_id.clone(),
                message: "performer and venue identifiers must be non-empty".to_string(),
            });
        }

        tracing::info!(
            label = MONITOR_LABEL,
            performer_id = %self.performer_id,
            venue_id = %self.venue_id,
            "Monitoring venue"
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct VividSeatsMonitorFactory;

impl VividSeatsMonitorFactory {
    pub fn new() -> Self {
        Self
    }
}

impl MonitorFactory for VividSeatsMonitorFactory {
    type Monitor = VividSeatsMonitor;

    fn create(&self, performer_id: &str, venue_id: &str) -> VividSeatsMonitor {
        VividSeatsMonitor::new(performer_id, venue_id)
    }
}
