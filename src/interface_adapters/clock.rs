use std::time::SystemTime;

use crate::domain::ports::Clock;

// System clock adapter used to stamp mover updates.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}
