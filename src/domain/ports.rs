use async_trait::async_trait;
use std::time::SystemTime;

// Port for externalizing mover state; the backing store owns its own concurrency.
#[async_trait]
pub trait MoverStore: Send + Sync {
    async fn create_entity(&self, id: u64, x: f64, y: f64, color: &str) -> Result<(), String>;
    async fn update_entity(&self, id: u64, x: f64, y: f64, at: SystemTime) -> Result<(), String>;
}

// Port for retrieving the time stamped onto each update.
pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}
