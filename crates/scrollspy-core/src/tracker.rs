//! Scroll-position-to-section-index tracking.
//!
//! A [`ScrollTracker`] watches the vertical offset of a scroll source and
//! keeps an "active section" index in sync with it: the index advances when
//! the offset crosses the next section's threshold and retreats when it
//! falls back below the current one. It also remembers explicit navigation
//! requests so that a jump to a section whose threshold is unreachable by
//! natural scrolling (a short last section) still highlights that section
//! while the view sits at the bottom.

use tracing::warn;

use crate::source::{ScrollBehavior, ScrollMeasurement, ScrollSource, ScrollTarget};

/// Tolerance for the at-bottom comparison. Fractional offsets from smooth
/// scrolling make exact equality unreliable.
const BOTTOM_EPSILON: f64 = 1.0;

/// Maps a scroll offset onto the index of the section currently in view.
///
/// The natural index (`cursor`) moves by at most one step per scroll event;
/// a large jump that skips several thresholds catches up over the following
/// events. Only [`ScrollTracker::on_scroll`] mutates the cursor.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    /// Raw top offsets of the tracked sections, in document order.
    tops: Vec<f64>,
    /// `tops[i] - offset_top`; the offset at which section i becomes active.
    thresholds: Vec<f64>,
    /// Uniform adjustment subtracted from every threshold, compensating for
    /// fixed chrome above the scrollable area.
    offset_top: f64,
    /// Naturally tracked active index.
    cursor: usize,
    /// Explicit navigation target, remembered until the view leaves the
    /// bottom of the scrollable area.
    pending_target: Option<usize>,
    /// Whether the last observed offset was at the maximum scroll extent.
    at_bottom: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ScrollTracker {
    /// Create a tracker with no targets.
    pub fn new(offset_top: f64) -> Self {
        Self {
            tops: Vec::new(),
            thresholds: Vec::new(),
            offset_top,
            cursor: 0,
            pending_target: None,
            at_bottom: false,
        }
    }

    /// Create a tracker over an initial set of targets.
    pub fn with_targets<T: ScrollTarget>(targets: &[T], offset_top: f64) -> Self {
        let mut tracker = Self::new(offset_top);
        tracker.set_targets(targets);
        tracker
    }

    /// Replace the tracked targets and recompute every threshold.
    ///
    /// There is no partial update: the full threshold list is rebuilt. The
    /// cursor is clamped into the new range.
    pub fn set_targets<T: ScrollTarget>(&mut self, targets: &[T]) {
        self.tops = targets.iter().map(|t| t.top_offset()).collect();
        self.rebuild_thresholds();
    }

    /// Change the uniform top adjustment and recompute every threshold.
    pub fn set_offset_top(&mut self, offset_top: f64) {
        self.offset_top = offset_top;
        self.rebuild_thresholds();
    }

    fn rebuild_thresholds(&mut self) {
        self.thresholds = self.tops.iter().map(|top| top - self.offset_top).collect();
        if !self.thresholds.is_empty() {
            self.cursor = self.cursor.min(self.thresholds.len() - 1);
        } else {
            self.cursor = 0;
        }
        // A pending navigation into a section that no longer exists is
        // meaningless; dropping it keeps the effective index in range
        if self
            .pending_target
            .is_some_and(|target| target >= self.thresholds.len())
        {
            self.pending_target = None;
        }
    }

    /// Number of tracked sections.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Threshold offset for a section, if the index is in range.
    pub fn threshold(&self, index: usize) -> Option<f64> {
        self.thresholds.get(index).copied()
    }

    /// Naturally tracked active index, ignoring any pending navigation.
    pub fn natural_index(&self) -> usize {
        self.cursor
    }

    /// Explicit navigation target still in effect, if any.
    pub fn pending_target(&self) -> Option<usize> {
        self.pending_target
    }

    /// Whether the last observed offset sat at the maximum scroll extent.
    pub fn at_bottom(&self) -> bool {
        self.at_bottom
    }

    /// Process one scroll event.
    ///
    /// Index stepping runs first, bottom detection second; the two update
    /// disjoint state apart from the pending-target clear, which belongs to
    /// the bottom side.
    pub fn on_scroll(&mut self, measurement: &ScrollMeasurement) {
        self.track_index(measurement.offset);
        self.track_bottom(measurement);
    }

    /// Advance or retreat the cursor by at most one step.
    fn track_index(&mut self, offset: f64) {
        let next = self.cursor + 1;
        if next < self.thresholds.len() && offset >= self.thresholds[next] {
            self.cursor = next;
        } else if self.cursor > 0 && offset < self.thresholds[self.cursor] {
            self.cursor -= 1;
        }
    }

    /// Track whether the offset sits at the maximum scroll extent. Leaving
    /// the bottom revokes any pending navigation override.
    fn track_bottom(&mut self, measurement: &ScrollMeasurement) {
        let reached = (measurement.max_scroll() - measurement.offset).abs() <= BOTTOM_EPSILON;
        if reached != self.at_bottom {
            self.at_bottom = reached;
            if !reached {
                self.pending_target = None;
            }
        }
    }

    /// Effective active index: natural tracking, overridden by a pending
    /// navigation target while the view cannot scroll or sits at the bottom.
    ///
    /// `can_scroll` is the source's live overflow state; it is read at query
    /// time rather than cached so a relayout is picked up immediately.
    pub fn effective_index(&self, can_scroll: bool) -> usize {
        match self.pending_target {
            Some(target) if (!can_scroll || self.at_bottom) && target > self.cursor => target,
            _ => self.cursor,
        }
    }

    /// Issue a scroll command for a section and remember it as the pending
    /// navigation target.
    ///
    /// The target is recorded even when the source refuses the command, so
    /// the override still applies when the section's threshold cannot be
    /// reached. An out-of-range index is reported and ignored entirely.
    pub fn scroll_to(
        &mut self,
        source: &mut dyn ScrollSource,
        index: usize,
        behavior: ScrollBehavior,
    ) {
        let Some(&threshold) = self.thresholds.get(index) else {
            warn!(index, sections = self.thresholds.len(), "scroll target out of range");
            return;
        };
        if let Err(err) = source.scroll_to(threshold, behavior) {
            warn!(%err, index, "unable to scroll the configured source");
        }
        self.pending_target = Some(index);
    }
}
