// In-memory doubles for driving the public simulation API without a database.
use async_trait::async_trait;
use movers::domain::{Clock, MoverStore};
use std::{
    collections::HashMap,
    sync::Mutex,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

pub type Track = Vec<(f64, f64)>;

#[derive(Default)]
struct Tables {
    created: HashMap<u64, (f64, f64, String)>,
    tracks: HashMap<u64, Track>,
    updates: usize,
}

// Records creates and per-mover update positions.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    // Fail a mover's update once it already has this many.
    update_limit: Option<usize>,
}

impl MemoryStore {
    pub fn with_update_limit(limit: usize) -> Self {
        Self {
            update_limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn created(&self) -> HashMap<u64, (f64, f64, String)> {
        self.tables.lock().expect("tables mutex poisoned").created.clone()
    }

    pub fn tracks(&self) -> HashMap<u64, Track> {
        self.tables.lock().expect("tables mutex poisoned").tracks.clone()
    }

    pub fn update_count(&self) -> usize {
        self.tables.lock().expect("tables mutex poisoned").updates
    }
}

#[async_trait]
impl MoverStore for MemoryStore {
    async fn create_entity(&self, id: u64, x: f64, y: f64, color: &str) -> Result<(), String> {
        let mut tables = self.tables.lock().expect("tables mutex poisoned");
        tables.created.insert(id, (x, y, color.to_string()));
        Ok(())
    }

    async fn update_entity(&self, id: u64, x: f64, y: f64, _at: SystemTime) -> Result<(), String> {
        let mut tables = self.tables.lock().expect("tables mutex poisoned");
        let track = tables.tracks.entry(id).or_default();
        if self.update_limit.is_some_and(|limit| track.len() >= limit) {
            return Err(format!("mover {id} reached its update limit"));
        }
        track.push((x, y));
        tables.updates += 1;
        Ok(())
    }
}

pub struct StaticClock(pub SystemTime);

impl Default for StaticClock {
    fn default() -> Self {
        Self(UNIX_EPOCH + Duration::from_secs(1_700_000_000))
    }
}

impl Clock for StaticClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}
