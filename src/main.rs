use clap::Parser;
use event_poller::utils::{logger, validation::Validate};
use event_poller::{CliConfig, ConfigProvider, EventPoller, Scheduler, VividSeatsMonitorFactory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting event-poller");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let period = config.poll_interval();
    let poller = EventPoller::new(VividSeatsMonitorFactory::new(), config);

    // Runs forever; there is no stop operation.
    Scheduler::new(poller, period).run().await;

    Ok(())
}
