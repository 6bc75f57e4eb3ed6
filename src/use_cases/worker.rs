// Per-mover work loop: create once, then advance, persist and pause until cancelled.

use crate::domain::errors::WorkerError;
use crate::domain::ports::{Clock, MoverStore};
use crate::domain::state::Mover;
use crate::domain::tuning::SimulationConfig;
use rand::Rng;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Terminal state of a mover worker.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerExit {
    Cancelled,
    Failed(WorkerError),
}

/// Runs one mover until the shutdown flag flips or the store rejects a call.
///
/// Cancellation is checked before creation and at the top of every tick, so
/// no persistence call starts after the flag has been observed. A dropped
/// shutdown sender counts as cancellation.
pub async fn run_mover<S, C, R>(
    id: u64,
    config: Arc<SimulationConfig>,
    store: Arc<S>,
    clock: Arc<C>,
    mut rng: R,
    mut shutdown: watch::Receiver<bool>,
) -> WorkerExit
where
    S: MoverStore,
    C: Clock,
    R: Rng + Send,
{
    if is_cancelled(&shutdown) {
        return WorkerExit::Cancelled;
    }

    let mut mover = Mover::spawn(id, &config, &mut rng);
    if let Err(e) = store
        .create_entity(mover.id, mover.x, mover.y, mover.color)
        .await
    {
        warn!(mover_id = id, error = %e, "create failed, stopping mover");
        return WorkerExit::Failed(WorkerError::CreateFailed(e));
    }
    info!(mover_id = id, name = %mover.name, "in mover routine");

    loop {
        if is_cancelled(&shutdown) {
            debug!(mover_id = id, "mover cancelled");
            return WorkerExit::Cancelled;
        }

        mover.advance(&config, &mut rng);

        if let Err(e) = store
            .update_entity(mover.id, mover.x, mover.y, clock.now())
            .await
        {
            warn!(mover_id = id, error = %e, "update failed, stopping mover");
            return WorkerExit::Failed(WorkerError::UpdateFailed(e));
        }

        info!(
            mover_id = mover.id,
            color = mover.color,
            x = mover.x,
            y = mover.y,
            heading = mover.heading,
            velocity = mover.velocity,
            "mover moved"
        );

        let pause = config.jittered_interval(&mut rng);
        tokio::select! {
            _ = tokio::time::sleep(pause) => {}
            changed = shutdown.changed() => {
                if changed.is_err() {
                    debug!(mover_id = id, "shutdown sender dropped");
                    return WorkerExit::Cancelled;
                }
            }
        }
    }
}

fn is_cancelled(shutdown: &watch::Receiver<bool>) -> bool {
    *shutdown.borrow()
}
