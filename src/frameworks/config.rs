use crate::domain::tuning::{Rectangle, SimulationConfig};
use serde::Deserialize;
use std::{env, fs, io, time::Duration};

// Runtime/process settings, read from the environment.

pub fn database_url() -> Option<String> {
    env::var("DATABASE_URL")
        .ok()
        .filter(|value| !value.trim().is_empty())
}

pub fn db_max_connections() -> u32 {
    env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|v| *v > 0)
        .unwrap_or(10)
}

pub fn run_migrations() -> bool {
    matches!(
        env::var("RUN_MIGRATIONS").as_deref(),
        Ok("1") | Ok("true") | Ok("TRUE")
    )
}

/// Explicit population override. A value that does not parse is a startup error.
pub fn mover_count() -> io::Result<Option<usize>> {
    parse_mover_count(env::var("MOVER_COUNT").ok().as_deref())
}

fn parse_mover_count(raw: Option<&str>) -> io::Result<Option<usize>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e| io::Error::other(format!("invalid MOVER_COUNT {value:?}: {e}"))),
    }
}

/// Output style for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

pub fn log_format() -> LogFormat {
    parse_log_format(env::var("LOG_FORMAT").ok().as_deref())
}

fn parse_log_format(raw: Option<&str>) -> LogFormat {
    match raw.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Compact,
    }
}

pub fn simulation_config_path() -> Option<String> {
    env::var("MOVERS_CONFIG").ok()
}

/// Optional TOML overrides for the simulation tuning. Missing keys keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationFile {
    pub population: Option<usize>,
    pub max_heading_change: Option<i32>,
    pub max_velocity_change: Option<f64>,
    pub start_velocity: Option<f64>,
    pub tick_interval_ms: Option<u64>,
    pub bounds: Option<BoundsFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundsFile {
    pub min_x: Option<f64>,
    pub min_y: Option<f64>,
    pub max_x: Option<f64>,
    pub max_y: Option<f64>,
}

impl SimulationFile {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn apply(self, base: SimulationConfig) -> SimulationConfig {
        let bounds = match self.bounds {
            Some(b) => Rectangle {
                min_x: b.min_x.unwrap_or(base.bounds.min_x),
                min_y: b.min_y.unwrap_or(base.bounds.min_y),
                max_x: b.max_x.unwrap_or(base.bounds.max_x),
                max_y: b.max_y.unwrap_or(base.bounds.max_y),
            },
            None => base.bounds,
        };

        SimulationConfig {
            population: self.population.unwrap_or(base.population),
            max_heading_change: self.max_heading_change.unwrap_or(base.max_heading_change),
            max_velocity_change: self.max_velocity_change.unwrap_or(base.max_velocity_change),
            start_velocity: self.start_velocity.unwrap_or(base.start_velocity),
            bounds,
            tick_interval: self
                .tick_interval_ms
                .map(Duration::from_millis)
                .unwrap_or(base.tick_interval),
        }
    }
}

/// Reads the optional `MOVERS_CONFIG` file and `MOVER_COUNT`, then resolves them.
pub fn load_simulation_config() -> io::Result<SimulationConfig> {
    let file = match simulation_config_path() {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .map_err(|e| io::Error::other(format!("failed to read {path}: {e}")))?;
            let file = SimulationFile::parse(&text)
                .map_err(|e| io::Error::other(format!("failed to parse {path}: {e}")))?;
            tracing::debug!(%path, "simulation config file loaded");
            Some(file)
        }
        None => None,
    };

    resolve_simulation_config(file, mover_count()?)
}

/// Defaults, then the file, then the population override; validated last.
pub fn resolve_simulation_config(
    file: Option<SimulationFile>,
    mover_count: Option<usize>,
) -> io::Result<SimulationConfig> {
    let mut config = SimulationConfig::default();

    if let Some(file) = file {
        config = file.apply(config);
    }

    if let Some(count) = mover_count {
        config.population = count;
    }

    config
        .validate()
        .map_err(|e| io::Error::other(format!("invalid simulation config: {e}")))?;

    Ok(config)
}
