// Domain-level mover entity.

use crate::domain::systems::motion::{self, MotionState, Perturbation};
use crate::domain::tuning::SimulationConfig;
use rand::Rng;

/// Display colors handed out round-robin by mover id.
pub const PALETTE: [&str; 22] = [
    "aqua",
    "fuchsia",
    "lime",
    "maroon",
    "red",
    "orange",
    "yellow",
    "green",
    "blue",
    "indigo",
    "violet",
    "navy",
    "purple",
    "teal",
    "greenyellow",
    "darkred",
    "cyan",
    "darkcyan",
    "darkorange",
    "lightpink",
    "salmon",
    "slategray",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Mover {
    pub id: u64,
    pub heading: i32,
    pub velocity: f64,
    pub x: f64,
    pub y: f64,

    // Display attributes, fixed at spawn.
    pub color: &'static str,
    pub name: String,
}

impl Mover {
    /// Places a new mover at a random point and heading inside the bounds.
    pub fn spawn<R: Rng>(id: u64, config: &SimulationConfig, rng: &mut R) -> Self {
        let bounds = &config.bounds;
        Self {
            id,
            heading: rng.random_range(0..360),
            velocity: config.start_velocity,
            x: rng.random_range(bounds.min_x..bounds.max_x),
            y: rng.random_range(bounds.min_y..bounds.max_y),
            color: PALETTE[(id % PALETTE.len() as u64) as usize],
            name: format!("Object {id}"),
        }
    }

    pub fn motion_state(&self) -> MotionState {
        MotionState {
            heading: self.heading,
            velocity: self.velocity,
            x: self.x,
            y: self.y,
        }
    }

    /// Draws fresh perturbations and applies one motion step in place.
    pub fn advance<R: Rng>(&mut self, config: &SimulationConfig, rng: &mut R) {
        let p = Perturbation::draw(rng, config);
        self.apply(p, config);
    }

    pub fn apply(&mut self, p: Perturbation, config: &SimulationConfig) {
        let next = motion::step(self.motion_state(), p, &config.bounds);
        self.heading = next.heading;
        self.velocity = next.velocity;
        self.x = next.x;
        self.y = next.y;
    }
}
