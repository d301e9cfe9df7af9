use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::requests::SimulationCommand;
use crate::models::status::ServiceStatus;

/// Process-wide status flags, shared by every handler through the router state.
///
/// The guard is never held across an `.await`: callers work on snapshots.
#[derive(Debug, Clone, Default)]
pub struct SharedStatus {
    inner: Arc<Mutex<ServiceStatus>>,
}

impl SharedStatus {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ServiceStatus> {
        // A panicking handler must not wedge the admin surface.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ServiceStatus {
        self.lock().clone()
    }

    /// Counts an incoming request and returns the flags it should obey.
    pub fn record_request(&self) -> ServiceStatus {
        let mut status = self.lock();
        status.request_count += 1;
        status.clone()
    }

    pub fn record_error(&self) {
        self.lock().error_count += 1;
    }

    pub fn apply(&self, command: SimulationCommand, duration: Option<f64>) {
        self.lock().apply(command, duration);
    }

    pub fn set_delay(&self, seconds: f64) {
        self.lock().response_delay = seconds;
    }
}
