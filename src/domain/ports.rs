use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn poll_interval(&self) -> Duration;
}

/// The external collaborator triggered once per event. Implementations may
/// perform arbitrary asynchronous work and may fail.
#[async_trait]
pub trait VenueMonitor: Send + Sync {
    async fn monitor_venue(&self) -> Result<()>;
}

/// Stamps out one monitor per event from its two identifiers.
pub trait MonitorFactory: Send + Sync {
    type Monitor: VenueMonitor;

    fn create(&self, performer_id: &str, venue_id: &str) -> Self::Monitor;
}

/// One fetch-and-dispatch cycle. Returns the number of events dispatched.
#[async_trait]
pub trait PollCycle: Send + Sync {
    async fn poll_once(&self) -> Result<usize>;
}
