// Use cases layer: mover workers and the simulation that owns them.

pub mod simulation;
pub mod worker;

#[cfg(test)]
pub(crate) mod test_support;

pub use simulation::Simulation;
pub use worker::{WorkerExit, run_mover};
