//! Per-element scroll animation state machine.
//!
//! An element slides left from its starting column toward a target column,
//! or scrolls forever as a wrapping band. Dismissing it sends it off the left
//! edge, after which [`ScrollingElement::animate`] reports completion once and
//! the owner drops it.
//!
//! # Frame order
//!
//! Each [`animate`](ScrollingElement::animate) call runs, in order:
//!
//! 1. resolve the target column (cached until invalidated)
//! 2. move
//! 3. draw the primary copy, then the trailing copy for live looping elements
//! 4. check whether the element has fully left the viewport
//!
//! # Looping
//!
//! A looping element repeats with period `width + 2 * (viewport_width / 3)`.
//! While the trailing edge of the current copy is left of the first third of
//! the viewport, a second copy is drawn one period to the right so the band
//! never shows a gap.

use crate::model::{Bitmap, Surface, TargetKind};
use tracing::debug;

/// Apply the looping slowdown to a requested speed.
///
/// Looping elements move one cell per frame slower than requested, but never
/// slower than one cell per frame.
pub fn loop_adjusted_speed(speed: i32, looping: bool) -> i32 {
    if looping && speed > 1 {
        speed - 1
    } else {
        speed
    }
}

/// A horizontally scrolling element.
///
/// Owns its bitmap and all of its motion state; elements never share state,
/// so a collection can animate them in any order.
#[derive(Debug, Clone)]
pub struct ScrollingElement<B> {
    bitmap: B,
    /// Bitmap width, fixed for the element's lifetime.
    width: i32,
    x: i32,
    y: i32,
    target: TargetKind,
    /// `None` until resolved against a viewport width.
    resolved_target: Option<i32>,
    speed: i32,
    looping: bool,
    alive: bool,
    /// Completion has been reported.
    exited: bool,
}

impl<B: Bitmap> ScrollingElement<B> {
    /// Create an element at `(x, y)` heading for `target`.
    ///
    /// `speed` is in cells per frame; looping elements get
    /// [`loop_adjusted_speed`].
    pub fn new(bitmap: B, x: i32, target: TargetKind, y: i32, speed: i32, looping: bool) -> Self {
        let width = i32::from(bitmap.width());
        Self {
            bitmap,
            width,
            x,
            y,
            target,
            resolved_target: None,
            speed: loop_adjusted_speed(speed, looping),
            looping,
            alive: true,
            exited: false,
        }
    }

    /// Resolve the target column for `viewport_width`.
    ///
    /// Only computes when the cached value has been invalidated; otherwise
    /// returns the cached column.
    pub fn resolve_target(&mut self, viewport_width: i32) -> i32 {
        let (target, width) = (self.target, self.width);
        *self
            .resolved_target
            .get_or_insert_with(|| target.offset(viewport_width, width))
    }

    /// Advance one frame and draw into `surface`.
    ///
    /// Returns `true` exactly once: on the first frame the element is fully
    /// past the left edge (`x < -width`). The caller should drop the element
    /// then.
    pub fn animate<S>(&mut self, surface: &mut S) -> bool
    where
        S: Surface<B> + ?Sized,
    {
        let viewport_width = i32::from(surface.viewport().width);
        let target_x = self.resolve_target(viewport_width);
        let third = viewport_width / 3;

        if self.looping {
            self.x -= self.speed;
            if self.x < -self.width && self.alive {
                let period = self.width + 2 * third;
                self.x += period;
                debug!(x = self.x, period, "looping element wrapped");
            }
        } else if self.x > target_x {
            // One-directional: an element already at or left of its target
            // stays put.
            self.x -= self.speed;
        }

        self.draw(surface, third);

        if !self.exited && self.x < -self.width {
            self.exited = true;
            debug!(x = self.x, alive = self.alive, "element left the viewport");
            return true;
        }
        false
    }

    /// Draw the current frame without moving.
    pub fn render<S>(&self, surface: &mut S)
    where
        S: Surface<B> + ?Sized,
    {
        let third = i32::from(surface.viewport().width) / 3;
        self.draw(surface, third);
    }

    fn draw<S>(&self, surface: &mut S, third: i32)
    where
        S: Surface<B> + ?Sized,
    {
        surface.draw_at(&self.bitmap, self.x, self.y);

        if self.looping && self.alive && self.x + self.width < third {
            surface.draw_at(&self.bitmap, self.x + self.width + 2 * third, self.y);
        }
    }

    /// Replace the speed. Takes effect on the next frame.
    pub fn set_speed(&mut self, speed: i32) {
        self.speed = speed;
    }

    /// Dismiss the element: it heads off-screen and stops wrapping.
    ///
    /// Calling it again has no effect.
    pub fn kill(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.target = TargetKind::Offscreen;
        self.resolved_target = None;
        debug!(x = self.x, y = self.y, "element dismissed");
    }

    /// Change the target while alive. Ignored once dismissed.
    pub fn retarget(&mut self, target: TargetKind) {
        if !self.alive || self.target == target {
            return;
        }
        self.target = target;
        self.resolved_target = None;
    }

    /// Forget the cached target column so the next frame resolves it against
    /// the current viewport.
    pub fn invalidate_target(&mut self) {
        self.resolved_target = None;
    }

    /// Current left edge.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Top edge.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Cells moved per frame.
    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Target kind.
    pub fn target(&self) -> TargetKind {
        self.target
    }

    /// Cached target column, `None` while unresolved.
    pub fn resolved_target(&self) -> Option<i32> {
        self.resolved_target
    }

    /// `false` once dismissed.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Whether the element wraps around.
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// The bitmap being scrolled.
    pub fn bitmap(&self) -> &B {
        &self.bitmap
    }

    /// Bitmap width.
    pub fn width(&self) -> i32 {
        self.width
    }
}

#[cfg(test)]
#[path = "scrolling_element_tests.rs"]
mod tests;
