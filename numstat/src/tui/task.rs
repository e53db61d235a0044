//! Background calculation pass for the TUI.
//!
//! Each trigger spawns one task: it waits out the configured delay, runs
//! the pipeline on the blocking pool and sends the outcome back to the event
//! loop. The task always sends exactly one outcome, so the loop can rely on
//! it to clear the loading state.

use log::{debug, error};
use numstat_core::{headless_calculate, Calculation, StatsConfig, StatsError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type CalcOutcome = Result<Calculation, StatsError>;

/// Spawns a single-shot calculation of `input`.
pub fn spawn_calculation(
    input: String,
    config: StatsConfig,
    tx: mpsc::Sender<CalcOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let delay = config.delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        debug!("Running calculation over {} bytes", input.len());
        let outcome = match tokio::task::spawn_blocking(move || headless_calculate(&input, &config)).await {
            Ok(outcome) => outcome,
            Err(join_err) => {
                error!("Calculation task failed: {}", join_err);
                Err(StatsError::Unexpected(join_err.to_string()))
            }
        };

        if tx.send(outcome).await.is_err() {
            debug!("UI closed before the calculation finished");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn sends_one_outcome() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut config = StatsConfig::default();
        config.interactive.delay_ms = Some(0);

        spawn_calculation("1, 2, 3, 4, 5".to_string(), config, tx).await.unwrap();

        let outcome = rx.recv().await.unwrap().unwrap();
        assert_eq!(outcome.record.mean, "3.000000");
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn waits_for_configured_delay() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut config = StatsConfig::default();
        config.interactive.delay_ms = Some(50);

        let start = Instant::now();
        let _handle = spawn_calculation("abc".to_string(), config, tx);
        let outcome = rx.recv().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
        assert!(matches!(outcome, Err(StatsError::NoValidData)));
    }
}
