// Interface adapters: concrete stores and clocks behind the domain ports.

pub mod clock;
pub mod store;

pub use clock::SystemClock;
pub use store::PostgresMoverStore;
