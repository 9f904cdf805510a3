//! Scrollable document viewport.
//!
//! [`DocViewport`] is the terminal's stand-in for a natively scrollable
//! surface: it owns the vertical offset over the flattened document lines
//! and implements [`ScrollSource`], including the `Smooth` behavior as a
//! time-based eased glide. The tracker core stays animation-free; whatever
//! motion `Smooth` produces happens entirely on this side of the trait.

use std::time::{Duration, Instant};

use scrollspy_core::{EasingType, Error, Result, ScrollBehavior, ScrollConfig, ScrollSource};

/// In-flight glide towards a target offset.
#[derive(Debug, Clone)]
struct Glide {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

impl Glide {
    fn is_complete(&self) -> bool {
        self.start.elapsed() >= self.duration
    }

    fn position(&self) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = (self.start.elapsed().as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        let eased = ease(self.easing, t);
        self.from + (self.to - self.from) * eased
    }
}

/// Apply an easing curve to a progress value in [0, 1].
fn ease(easing: EasingType, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        EasingType::None => {
            if t < 1.0 {
                0.0
            } else {
                1.0
            }
        }
        EasingType::Linear => t,
        EasingType::Cubic => {
            let inv = 1.0 - t;
            1.0 - inv * inv * inv
        }
        EasingType::Quintic => {
            let inv = 1.0 - t;
            1.0 - inv * inv * inv * inv * inv
        }
        EasingType::EaseOut => {
            if t >= 1.0 {
                1.0
            } else {
                1.0 - 2.0_f64.powf(-10.0 * t)
            }
        }
    }
}

/// Vertical scroll state over the document, measured in lines.
#[derive(Debug, Clone)]
pub struct DocViewport {
    offset: f64,
    content_extent: f64,
    viewport_extent: f64,
    config: ScrollConfig,
    glide: Option<Glide>,
}

impl DocViewport {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            offset: 0.0,
            content_extent: 0.0,
            viewport_extent: 0.0,
            config,
            glide: None,
        }
    }

    /// Total document height in lines. Clamps the offset when it shrinks.
    pub fn set_content_extent(&mut self, lines: f64) {
        self.content_extent = lines.max(0.0);
        self.offset = self.offset.min(self.max_scroll());
    }

    /// Visible height in lines, updated on every layout pass.
    pub fn set_viewport_extent(&mut self, lines: f64) {
        self.viewport_extent = lines.max(0.0);
        self.offset = self.offset.min(self.max_scroll());
    }

    pub fn max_scroll(&self) -> f64 {
        (self.content_extent - self.viewport_extent).max(0.0)
    }

    /// Where the offset will end up once any glide finishes. Relative
    /// scrolling chains off this so rapid key presses accumulate.
    pub fn target_offset(&self) -> f64 {
        self.glide.as_ref().map(|g| g.to).unwrap_or(self.offset)
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    pub fn smooth_enabled(&self) -> bool {
        self.config.smooth_enabled
    }

    /// Toggle smooth scrolling at runtime. An active glide finishes
    /// instantly when smoothing turns off.
    pub fn set_smooth(&mut self, enabled: bool) {
        self.config.smooth_enabled = enabled;
        if !enabled {
            if let Some(glide) = self.glide.take() {
                self.offset = glide.to;
            }
        }
    }

    /// Scroll by a line delta, chaining off the current glide target.
    pub fn scroll_by(&mut self, delta: f64) {
        let target = self.target_offset() + delta;
        // Extents are always valid here, the error path cannot trigger
        let _ = self.scroll_to(target, ScrollBehavior::Smooth);
    }

    /// Advance an active glide. Returns true when the offset moved.
    pub fn update(&mut self) -> bool {
        let Some(glide) = &self.glide else {
            return false;
        };
        let old = self.offset;
        if glide.is_complete() {
            self.offset = glide.to.min(self.max_scroll());
            self.glide = None;
        } else {
            self.offset = glide.position().min(self.max_scroll());
        }
        (self.offset - old).abs() > f64::EPSILON
    }

    fn smooth_duration(&self) -> Duration {
        if self.config.smooth_enabled {
            Duration::from_millis(self.config.animation_duration_ms)
        } else {
            Duration::ZERO
        }
    }
}

impl ScrollSource for DocViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn content_extent(&self) -> f64 {
        self.content_extent
    }

    fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) -> Result<()> {
        if self.viewport_extent <= 0.0 {
            return Err(Error::Scroll(
                "viewport has no visible area to scroll".into(),
            ));
        }

        let target = offset.clamp(0.0, self.max_scroll());
        let smooth = behavior == ScrollBehavior::Smooth
            && self.config.smooth_enabled
            && self.config.animation_duration_ms > 0;

        if !smooth || (target - self.offset).abs() <= f64::EPSILON {
            self.offset = target;
            self.glide = None;
            return Ok(());
        }

        self.glide = Some(Glide {
            start: Instant::now(),
            from: self.offset,
            to: target,
            duration: self.smooth_duration(),
            easing: self.config.easing,
        });
        Ok(())
    }
}
