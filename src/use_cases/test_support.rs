use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use async_trait::async_trait;

use crate::domain::ports::{Clock, MoverStore};

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) SystemTime);

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StoreCall {
    Create {
        id: u64,
        x: f64,
        y: f64,
        color: String,
    },
    Update {
        id: u64,
        x: f64,
        y: f64,
        at: SystemTime,
    },
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub create: bool,
    pub update: bool,
    // Fail every update after this many have succeeded.
    pub update_limit: Option<usize>,
}

#[derive(Clone)]
pub(crate) struct RecordingStore {
    calls: Arc<Mutex<Vec<StoreCall>>>,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    pub(crate) fn update_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, StoreCall::Update { .. }))
            .count()
    }
}

#[async_trait]
impl MoverStore for RecordingStore {
    async fn create_entity(&self, id: u64, x: f64, y: f64, color: &str) -> Result<(), String> {
        if self.failures.create {
            return Err("create failed".to_string());
        }

        let mut guard = self.calls.lock().expect("calls mutex poisoned");
        guard.push(StoreCall::Create {
            id,
            x,
            y,
            color: color.to_string(),
        });
        Ok(())
    }

    async fn update_entity(&self, id: u64, x: f64, y: f64, at: SystemTime) -> Result<(), String> {
        if self.failures.update {
            return Err("update failed".to_string());
        }

        let mut guard = self.calls.lock().expect("calls mutex poisoned");
        let updates = guard
            .iter()
            .filter(|c| matches!(c, StoreCall::Update { .. }))
            .count();
        if self.failures.update_limit.is_some_and(|limit| updates >= limit) {
            return Err("update limit reached".to_string());
        }
        guard.push(StoreCall::Update { id, x, y, at });
        Ok(())
    }
}
