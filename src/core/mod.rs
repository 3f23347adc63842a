pub mod poller;
pub mod scheduler;

pub use crate::domain::model::{EventInfo, EventsResponse};
pub use crate::domain::ports::{ConfigProvider, MonitorFactory, PollCycle, VenueMonitor};
pub use crate::utils::error::Result;
