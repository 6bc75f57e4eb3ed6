// Simulation driver: spawns one worker per mover and owns their shared shutdown.

use crate::domain::ports::{Clock, MoverStore};
use crate::domain::tuning::SimulationConfig;
use crate::use_cases::worker::{WorkerExit, run_mover};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Handle over a running mover population.
///
/// Dropping it detaches the workers; they stop once their shutdown sender is gone.
pub struct Simulation {
    shutdown_tx: watch::Sender<bool>,
    workers: Vec<JoinHandle<WorkerExit>>,
}

impl Simulation {
    /// Spawns `config.population` workers with ids `0..population`.
    pub fn start<S, C>(config: Arc<SimulationConfig>, store: Arc<S>, clock: Arc<C>) -> Self
    where
        S: MoverStore + 'static,
        C: Clock + 'static,
    {
        let (shutdown_tx, _shutdown_rx) = watch::channel(false);

        let workers = (0..config.population as u64)
            .map(|id| {
                tokio::spawn(run_mover(
                    id,
                    config.clone(),
                    store.clone(),
                    clock.clone(),
                    StdRng::from_os_rng(),
                    shutdown_tx.subscribe(),
                ))
            })
            .collect();

        info!(
            population = config.population,
            tick_interval_ms = config.tick_interval.as_millis(),
            "simulation started"
        );

        Self {
            shutdown_tx,
            workers,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Signals every worker to stop at its next loop boundary.
    pub fn cancel(&self) {
        self.shutdown_tx.send_replace(true);
        info!(workers = self.workers.len(), "cancellation signalled");
    }

    pub fn is_cancelled(&self) -> bool {
        *self.shutdown_tx.borrow()
    }

    /// Waits for every worker to finish. Workers that panicked are logged and skipped.
    pub async fn join(self) -> Vec<WorkerExit> {
        let mut exits = Vec::with_capacity(self.workers.len());
        for handle in self.workers {
            match handle.await {
                Ok(exit) => exits.push(exit),
                Err(e) => warn!(error = %e, "mover task did not finish cleanly"),
            }
        }
        exits
    }
}
