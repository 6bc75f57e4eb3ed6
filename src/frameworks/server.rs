// Framework bootstrap for the mover generator.

use crate::domain::ports::{Clock, MoverStore};
use crate::domain::tuning::SimulationConfig;
use crate::frameworks::{config, db};
use crate::interface_adapters::{PostgresMoverStore, SystemClock};
use crate::use_cases::Simulation;

use std::future::Future;
use std::io::{Error, Result};
use std::sync::Arc;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match config::log_format() {
        config::LogFormat::Json => subscriber.json().with_current_span(true).init(),
        config::LogFormat::Compact => subscriber.compact().init(),
    }

    // Panics, including those inside worker tasks, go through tracing.
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "mover process panic");
    }));
}

/// Runs the population until `shutdown` resolves, then cancels every worker.
///
/// Workers are not drained; an in-flight store call may still land after return.
pub async fn run<S, C, F>(config: SimulationConfig, store: Arc<S>, clock: Arc<C>, shutdown: F)
where
    S: MoverStore + 'static,
    C: Clock + 'static,
    F: Future<Output = ()>,
{
    let simulation = Simulation::start(Arc::new(config), store, clock);

    shutdown.await;
    tracing::info!("shutdown requested");
    simulation.cancel();
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let database_url = config::database_url().ok_or_else(|| {
        tracing::error!("unable to find DATABASE_URL");
        Error::other("DATABASE_URL must be set")
    })?;
    tracing::info!("found environment variable DATABASE_URL");

    let simulation_config = config::load_simulation_config().inspect_err(|e| {
        tracing::error!(error = %e, "failed to load simulation config");
    })?;

    let pool = db::connect_pool(&database_url, config::db_max_connections())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to connect to database");
            Error::other(format!("failed to connect to database: {e}"))
        })?;

    if config::run_migrations() {
        db::run_migrations(&pool).await.map_err(|e| {
            tracing::error!(error = %e, "failed to run migrations");
            Error::other(format!("failed to run migrations: {e}"))
        })?;
        tracing::info!("migrations applied");
    }

    let store = Arc::new(PostgresMoverStore::new(pool));

    run(simulation_config, store, Arc::new(SystemClock), async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for interrupt");
        }
    })
    .await;

    Ok(())
}
