//! Abstractions over the host environment's scroll machinery.
//!
//! The tracker never talks to a terminal (or any other surface) directly.
//! It measures and commands scrolling through [`ScrollSource`], and reads
//! section geometry through [`ScrollTarget`]. The demo viewport in
//! `scrollspy-tui` implements both sides; tests use plain numbers.

use crate::Result;

/// Motion mode for an explicit scroll command.
///
/// Passed through untouched to the scroll source. How `Smooth` is realized
/// (eased glide, native animation, nothing at all) is the source's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Jump directly to the target offset.
    #[default]
    Instant,
    /// Animate towards the target offset.
    Smooth,
}

/// Snapshot of a scroll source's geometry at the moment a scroll event fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMeasurement {
    /// Current vertical scroll offset.
    pub offset: f64,
    /// Total scrollable extent (content height).
    pub content_extent: f64,
    /// Visible extent (viewport height).
    pub viewport_extent: f64,
}

impl ScrollMeasurement {
    /// Maximum reachable scroll offset, zero when content fits the viewport.
    pub fn max_scroll(&self) -> f64 {
        (self.content_extent - self.viewport_extent).max(0.0)
    }
}

/// A scrollable surface: something with a vertical offset that can be
/// queried and commanded.
pub trait ScrollSource {
    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Total scrollable extent (content height).
    fn content_extent(&self) -> f64;

    /// Visible extent (viewport height).
    fn viewport_extent(&self) -> f64;

    /// Move the scroll position to `offset`.
    ///
    /// Returns an error when the source cannot scroll at all (the handle is
    /// not a genuine scrollable surface); callers are expected to report and
    /// carry on rather than fail.
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) -> Result<()>;

    /// Whether there is any overflow to scroll through.
    fn can_scroll(&self) -> bool {
        self.content_extent() > self.viewport_extent()
    }

    /// Snapshot the current geometry.
    fn measure(&self) -> ScrollMeasurement {
        ScrollMeasurement {
            offset: self.scroll_offset(),
            content_extent: self.content_extent(),
            viewport_extent: self.viewport_extent(),
        }
    }
}

/// A tracked section: an opaque caller-owned handle that knows its top
/// position within the scroll source's content.
pub trait ScrollTarget {
    /// Offset of the section's top edge from the top of the content.
    fn top_offset(&self) -> f64;
}

/// Plain offsets are valid targets, which keeps tests and simple callers
/// free of wrapper types.
impl ScrollTarget for f64 {
    fn top_offset(&self) -> f64 {
        *self
    }
}

impl<T: ScrollTarget> ScrollTarget for &T {
    fn top_offset(&self) -> f64 {
        (*self).top_offset()
    }
}
