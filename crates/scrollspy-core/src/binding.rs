//! Scoped navigation binding.
//!
//! [`NavBinding`] wires a [`ScrollTracker`] to a [`ScrollEvents`] registry
//! for its lifetime: attaching subscribes one observer that feeds scroll
//! measurements into the tracker, and detaching (explicitly or on drop)
//! removes exactly that observer, so bindings can never leak listeners.
//!
//! Several bindings may attach to the same registry; each owns its own
//! tracker and they never share mutable state.

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::{ObserverId, ScrollEvents};
use crate::source::{ScrollBehavior, ScrollSource, ScrollTarget};
use crate::tracker::ScrollTracker;

/// RAII binding of a tracker to a scroll event stream.
pub struct NavBinding {
    tracker: Rc<RefCell<ScrollTracker>>,
    events: Rc<RefCell<ScrollEvents>>,
    observer: Option<ObserverId>,
}

impl NavBinding {
    /// Attach a tracker to an event registry.
    ///
    /// The observer holds shared ownership of the tracker, so later target
    /// or offset changes are visible to it without re-subscribing.
    pub fn attach(events: Rc<RefCell<ScrollEvents>>, tracker: ScrollTracker) -> Self {
        let tracker = Rc::new(RefCell::new(tracker));
        let sink = Rc::clone(&tracker);
        let observer = events
            .borrow_mut()
            .subscribe(move |measurement| sink.borrow_mut().on_scroll(measurement));
        Self {
            tracker,
            events,
            observer: Some(observer),
        }
    }

    /// Effective active index for display, combining natural tracking with
    /// the explicit-navigation override. Reads the source's overflow state
    /// live.
    pub fn hit_target_index(&self, source: &dyn ScrollSource) -> usize {
        self.tracker.borrow().effective_index(source.can_scroll())
    }

    /// Naturally tracked index, without the override.
    pub fn natural_index(&self) -> usize {
        self.tracker.borrow().natural_index()
    }

    /// Scroll the source to a section and remember it as the pending target.
    pub fn scroll_to(&self, source: &mut dyn ScrollSource, index: usize, behavior: ScrollBehavior) {
        self.tracker.borrow_mut().scroll_to(source, index, behavior);
    }

    /// Replace the tracked targets (full threshold recompute).
    pub fn set_targets<T: ScrollTarget>(&self, targets: &[T]) {
        self.tracker.borrow_mut().set_targets(targets);
    }

    /// Change the uniform top adjustment (full threshold recompute).
    pub fn set_offset_top(&self, offset_top: f64) {
        self.tracker.borrow_mut().set_offset_top(offset_top);
    }

    /// Whether the last observed offset sat at the maximum scroll extent.
    pub fn at_bottom(&self) -> bool {
        self.tracker.borrow().at_bottom()
    }

    /// Number of tracked sections.
    pub fn len(&self) -> usize {
        self.tracker.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracker.borrow().is_empty()
    }

    /// Unsubscribe from the event registry. Safe to call more than once;
    /// also runs on drop.
    pub fn detach(&mut self) {
        if let Some(id) = self.observer.take() {
            self.events.borrow_mut().unsubscribe(id);
        }
    }
}

impl Drop for NavBinding {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScrollMeasurement;
    use crate::Result;

    struct FixedSource {
        offset: f64,
        content_extent: f64,
        viewport_extent: f64,
    }

    impl ScrollSource for FixedSource {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn content_extent(&self) -> f64 {
            self.content_extent
        }

        fn viewport_extent(&self) -> f64 {
            self.viewport_extent
        }

        fn scroll_to(&mut self, offset: f64, _behavior: ScrollBehavior) -> Result<()> {
            self.offset = offset.clamp(0.0, (self.content_extent - self.viewport_extent).max(0.0));
            Ok(())
        }
    }

    fn events() -> Rc<RefCell<ScrollEvents>> {
        Rc::new(RefCell::new(ScrollEvents::new()))
    }

    fn emit(events: &Rc<RefCell<ScrollEvents>>, offset: f64) {
        events.borrow_mut().emit(&ScrollMeasurement {
            offset,
            content_extent: 400.0,
            viewport_extent: 50.0,
        });
    }

    #[test]
    fn test_attach_subscribes_and_drop_unsubscribes() {
        let events = events();
        {
            let _binding = NavBinding::attach(
                Rc::clone(&events),
                ScrollTracker::with_targets(&[0.0, 100.0], 0.0),
            );
            assert_eq!(events.borrow().listener_count(), 1);
        }
        assert_eq!(events.borrow().listener_count(), 0);
    }

    #[test]
    fn test_detach_is_idempotent() {
        let events = events();
        let mut binding = NavBinding::attach(Rc::clone(&events), ScrollTracker::default());
        binding.detach();
        binding.detach();
        assert_eq!(events.borrow().listener_count(), 0);
    }

    #[test]
    fn test_events_drive_the_tracker() {
        let events = events();
        let binding = NavBinding::attach(
            Rc::clone(&events),
            ScrollTracker::with_targets(&[0.0, 100.0, 250.0], 0.0),
        );
        let source = FixedSource {
            offset: 0.0,
            content_extent: 400.0,
            viewport_extent: 50.0,
        };

        emit(&events, 150.0);
        assert_eq!(binding.hit_target_index(&source), 1);

        emit(&events, 260.0);
        assert_eq!(binding.hit_target_index(&source), 2);
    }

    #[test]
    fn test_multiple_bindings_coexist() {
        let events = events();
        let first = NavBinding::attach(
            Rc::clone(&events),
            ScrollTracker::with_targets(&[0.0, 100.0], 0.0),
        );
        let second = NavBinding::attach(
            Rc::clone(&events),
            ScrollTracker::with_targets(&[0.0, 200.0], 0.0),
        );
        assert_eq!(events.borrow().listener_count(), 2);

        emit(&events, 150.0);
        assert_eq!(first.natural_index(), 1);
        assert_eq!(second.natural_index(), 0);

        drop(first);
        assert_eq!(events.borrow().listener_count(), 1);
        drop(second);
        assert_eq!(events.borrow().listener_count(), 0);
    }

    #[test]
    fn test_retarget_takes_effect_without_resubscribing() {
        // Changed configuration must not leak a second listener
        let events = events();
        let binding = NavBinding::attach(
            Rc::clone(&events),
            ScrollTracker::with_targets(&[0.0, 100.0], 0.0),
        );

        binding.set_targets(&[0.0, 50.0, 75.0]);
        assert_eq!(events.borrow().listener_count(), 1);

        emit(&events, 60.0);
        assert_eq!(binding.natural_index(), 1);
        emit(&events, 80.0);
        assert_eq!(binding.natural_index(), 2);
    }

    #[test]
    fn test_unreachable_last_section_override() {
        let events = events();
        let binding = NavBinding::attach(
            Rc::clone(&events),
            ScrollTracker::with_targets(&[0.0, 100.0, 250.0], 0.0),
        );
        // Content fits the viewport: nothing can scroll, no events fire
        let mut source = FixedSource {
            offset: 0.0,
            content_extent: 40.0,
            viewport_extent: 50.0,
        };

        binding.scroll_to(&mut source, 2, ScrollBehavior::Smooth);
        assert_eq!(binding.hit_target_index(&source), 2);
    }
}
