use crate::domain::tuning::{Rectangle, SimulationConfig};
use rand::Rng;
use rand_distr::StandardNormal;
use std::f64::consts::PI;

/// Kinematic state advanced by one motion step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub heading: i32,  // degrees, 0..360
    pub velocity: f64, // distance per tick, may drift negative
    pub x: f64,
    pub y: f64,
}

/// Random draws consumed by a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbation {
    pub heading_delta: i32,
    pub velocity_delta: f64,
}

impl Perturbation {
    pub fn draw<R: Rng>(rng: &mut R, config: &SimulationConfig) -> Self {
        let max_turn = config.max_heading_change;
        let noise: f64 = rng.sample(StandardNormal);
        Self {
            heading_delta: rng.random_range(-max_turn..=max_turn),
            velocity_delta: noise * config.max_velocity_change,
        }
    }
}

/// Applies one tick: turn, move along the new heading, wrap, then drift velocity.
pub fn step(state: MotionState, p: Perturbation, bounds: &Rectangle) -> MotionState {
    let heading = turn(state.heading, p.heading_delta);

    let angle = heading_to_radians(heading);
    let x = state.x + angle.cos() * state.velocity;
    let y = state.y + angle.sin() * state.velocity;

    MotionState {
        heading,
        velocity: state.velocity + p.velocity_delta,
        x: wrap_axis(x, bounds.min_x, bounds.max_x),
        y: wrap_axis(y, bounds.min_y, bounds.max_y),
    }
}

pub fn normalize_heading(heading: i32) -> i32 {
    heading.rem_euclid(360)
}

// Summed in i64 so no pair of i32 inputs can overflow.
fn turn(heading: i32, delta: i32) -> i32 {
    (i64::from(heading) + i64::from(delta)).rem_euclid(360) as i32
}

/// Heading 0 points along +Y, so the angle is offset by a quarter turn.
pub fn heading_to_radians(heading: i32) -> f64 {
    PI * f64::from(heading + 90) / 180.0
}

/// Re-enters from the opposite edge, keeping the overshoot distance.
///
/// Only a single correction is applied, so a step longer than the span can
/// still land outside.
pub fn wrap_axis(value: f64, min: f64, max: f64) -> f64 {
    if value > max {
        min + (value - max)
    } else if value < min {
        max - (min - value)
    } else {
        value
    }
}
