pub mod simulation;

pub use simulation::{Rectangle, SimulationConfig};
