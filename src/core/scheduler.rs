use crate::core::PollCycle;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Label attached to the cycle-level log entries, matching the logging
/// convention of the monitoring integration.
pub const MONITOR_LABEL: &str = "Vivid Seats";

/// Runs poll cycles forever: one immediately at start, then one per period.
pub struct Scheduler<P: PollCycle> {
    cycle: P,
    period: Duration,
}

impl<P: PollCycle> Scheduler<P> {
    pub fn new(cycle: P, period: Duration) -> Self {
        Self { cycle, period }
    }

    /// Never returns. A failed cycle is logged and the schedule continues.
    /// Cycles are serialized: the next tick is not taken until the current
    /// cycle finishes, and a tick missed that way fires after completion
    /// rather than bursting.
    pub async fn run(&self) {
        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            // First tick completes immediately.
            ticker.tick().await;
            self.run_cycle().await;
        }
    }

    async fn run_cycle(&self) {
        match self.cycle.poll_once().await {
            Ok(dispatched) => {
                tracing::info!(
                    label = MONITOR_LABEL,
                    dispatched,
                    "Successfully monitored events."
                );
            }
            Err(e) => {
                tracing::error!(label = MONITOR_LABEL, "Error monitoring events: {}", e);
            }
        }
    }
}
