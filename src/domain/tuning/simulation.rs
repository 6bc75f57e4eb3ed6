// Tuning for the mover population.
// Built once at startup and shared read-only by the driver and every worker.

use crate::domain::errors::ConfigError;
use rand::Rng;
use std::time::Duration;

/// Largest accepted per-tick heading change: one full turn.
pub const MAX_HEADING_CHANGE: i32 = 360;

/// Axis-aligned area the movers wander in. Edges wrap around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rectangle {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns true if the point lies inside the rectangle, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    fn is_valid(&self) -> bool {
        [self.min_x, self.min_y, self.max_x, self.max_y]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x < self.max_x
            && self.min_y < self.max_y
            // Finite edges can still span more than f64::MAX.
            && self.width().is_finite()
            && self.height().is_finite()
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            min_x: -180.0,
            min_y: -70.0,
            max_x: 180.0,
            max_y: 70.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Number of concurrently running movers.
    pub population: usize,

    /// Largest heading change per tick, in whole degrees.
    pub max_heading_change: i32,

    /// Scale of the normal velocity drift per tick.
    pub max_velocity_change: f64,

    /// Velocity every mover starts with, in distance units per tick.
    pub start_velocity: f64,

    /// Area the movers spawn in and wrap around.
    pub bounds: Rectangle,

    /// Base pause between ticks; the actual pause is jittered around it.
    pub tick_interval: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population: 100,
            max_heading_change: 5,
            max_velocity_change: 0.1,
            start_velocity: 2.0,
            bounds: Rectangle::default(),
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.max_heading_change < 0 {
            return Err(ConfigError::NegativeHeadingChange);
        }
        if self.max_heading_change > MAX_HEADING_CHANGE {
            return Err(ConfigError::HeadingChangeTooLarge);
        }
        if !self.max_velocity_change.is_finite() || self.max_velocity_change < 0.0 {
            return Err(ConfigError::InvalidVelocityChange);
        }
        if !self.start_velocity.is_finite() {
            return Err(ConfigError::InvalidStartVelocity);
        }
        if !self.bounds.is_valid() {
            return Err(ConfigError::InvalidBounds);
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    /// Pause before the next tick, uniform over `[interval / 2, interval * 3 / 2)`.
    pub fn jittered_interval<R: Rng>(&self, rng: &mut R) -> Duration {
        self.tick_interval.mul_f64(rng.random_range(0.5..1.5))
    }
}
