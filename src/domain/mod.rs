// Domain layer: mover state, motion rules and ports.

pub mod errors;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use errors::{ConfigError, WorkerError};
pub use ports::{Clock, MoverStore};
pub use state::{Mover, PALETTE};
pub use systems::motion::{MotionState, Perturbation};
pub use tuning::{Rectangle, SimulationConfig};
