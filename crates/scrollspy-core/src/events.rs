//! Scroll event dispatch.
//!
//! A [`ScrollEvents`] registry stands in for the host environment's event
//! stream: the owner of a scroll source emits a [`ScrollMeasurement`] every
//! time the offset moves, and any number of observers (navigation bindings,
//! scrollbar state, ...) receive it in registration order. Everything runs
//! synchronously on the caller's thread; observers must not re-enter the
//! registry from inside their callback.

use crate::source::ScrollMeasurement;

/// Handle identifying a registered observer, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

struct Observer {
    id: ObserverId,
    callback: Box<dyn FnMut(&ScrollMeasurement)>,
}

/// Observer registry for one scroll source.
#[derive(Default)]
pub struct ScrollEvents {
    next_id: u64,
    observers: Vec<Observer>,
}

impl ScrollEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. Observers fire in registration order.
    pub fn subscribe(&mut self, callback: impl FnMut(&ScrollMeasurement) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push(Observer {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a previously registered observer.
    ///
    /// Returns `false` when the id was already removed; unsubscribing twice
    /// is harmless.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| o.id != id);
        self.observers.len() != before
    }

    /// Number of currently registered observers.
    pub fn listener_count(&self) -> usize {
        self.observers.len()
    }

    /// Deliver a scroll measurement to every observer.
    pub fn emit(&mut self, measurement: &ScrollMeasurement) {
        for observer in &mut self.observers {
            (observer.callback)(measurement);
        }
    }
}

impl std::fmt::Debug for ScrollEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollEvents")
            .field("listeners", &self.observers.len())
            .finish()
    }
}
