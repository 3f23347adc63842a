use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_ENDPOINT: &str = "https://ticket-tracker-omega.vercel.app/api/event";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "event-poller")]
#[command(about = "Polls the ticket-tracker event API and dispatches venue monitors")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = "12")]
    pub poll_interval_hours: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_hours * 60 * 60)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_positive_number("poll_interval_hours", self.poll_interval_hours, 1)?;
        Ok(())
    }
}
