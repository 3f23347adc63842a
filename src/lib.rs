pub mod config;
pub mod core;
pub mod domain;
pub mod monitors;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{poller::EventPoller, scheduler::Scheduler};
pub use crate::domain::model::{EventInfo, EventsResponse};
pub use crate::domain::ports::{ConfigProvider, MonitorFactory, PollCycle, VenueMonitor};
pub use crate::monitors::vivid_seats::{VividSeatsMonitor, VividSeatsMonitorFactory};
pub use crate::utils::error::{PollerError, Result};
