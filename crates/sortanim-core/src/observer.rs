//! Observer pattern for step tracking.
//!
//! Observers see every step after the renderer has acknowledged it, in
//! emission order. They never influence the run.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::step::Step;

/// An acknowledged step, as reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepEvent {
    /// Session-wide run number, starting at 1.
    pub run: u64,
    /// Frame position within the run.
    pub seq: u64,
    pub step: Step,
}

/// Observer trait for receiving step events.
pub trait StepObserver: Send + Sync {
    /// Receive an acknowledged step.
    fn on_step(&self, event: &StepEvent);
}

/// Subject that manages a collection of observers.
pub struct StepSubject {
    observers: RwLock<Vec<Arc<dyn StepObserver>>>,
}

impl StepSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn StepObserver>) {
        self.observers.write().push(observer);
    }

    /// Notify all observers of a step.
    pub fn notify(&self, event: &StepEvent) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_step(event);
        }
    }
}

impl Default for StepSubject {
    fn default() -> Self {
        Self::new()
    }
}
