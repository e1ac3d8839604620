//! Owning collection of active scrolling elements.

use super::scrolling_element::{loop_adjusted_speed, ScrollingElement};
use crate::model::{Bitmap, Surface};
use tracing::debug;

/// Active elements in insertion order.
///
/// Elements are plain owned values; the set drops an element on the frame its
/// [`ScrollingElement::animate`] reports completion.
#[derive(Debug, Clone)]
pub struct ElementSet<B> {
    elements: Vec<ScrollingElement<B>>,
}

impl<B> Default for ElementSet<B> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<B: Bitmap> ElementSet<B> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element on top of the existing ones.
    pub fn push(&mut self, element: ScrollingElement<B>) {
        self.elements.push(element);
    }

    /// Number of elements, dismissed ones included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` when no elements remain.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements not yet dismissed.
    pub fn alive_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_alive()).count()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ScrollingElement<B>> {
        self.elements.iter()
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Advance every element one frame and drop the ones that finished.
    ///
    /// Returns how many elements were dropped.
    pub fn animate_all<S>(&mut self, surface: &mut S) -> usize
    where
        S: Surface<B> + ?Sized,
    {
        let before = self.elements.len();
        self.elements.retain_mut(|element| !element.animate(surface));
        let removed = before - self.elements.len();
        if removed > 0 {
            debug!(removed, remaining = self.elements.len(), "dropped finished elements");
        }
        removed
    }

    /// Draw every element without moving it.
    pub fn render_all<S>(&self, surface: &mut S)
    where
        S: Surface<B> + ?Sized,
    {
        for element in &self.elements {
            element.render(surface);
        }
    }

    /// Dismiss the oldest element that is still alive.
    ///
    /// Returns `false` when every element is already dismissed.
    pub fn kill_oldest(&mut self) -> bool {
        match self.elements.iter_mut().find(|e| e.is_alive()) {
            Some(element) => {
                element.kill();
                true
            }
            None => false,
        }
    }

    /// Dismiss every live element. Returns how many were dismissed.
    pub fn kill_all(&mut self) -> usize {
        let mut killed = 0;
        for element in self.elements.iter_mut().filter(|e| e.is_alive()) {
            element.kill();
            killed += 1;
        }
        killed
    }

    /// Set every element's speed, keeping looping elements one cell slower.
    pub fn set_speed_all(&mut self, speed: i32) {
        for element in &mut self.elements {
            let looping = element.is_looping();
            element.set_speed(loop_adjusted_speed(speed, looping));
        }
    }

    /// Drop every cached target so positions follow a resized viewport.
    pub fn invalidate_targets(&mut self) {
        for element in &mut self.elements {
            element.invalidate_target();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RecordingSurface, TargetKind, TextBitmap};
    use ratatui::style::Style;

    fn element(text: &str, x: i32, target: TargetKind, y: i32) -> ScrollingElement<TextBitmap> {
        ScrollingElement::new(
            TextBitmap::from_text(text, Style::default()),
            x,
            target,
            y,
            2,
            false,
        )
    }

    #[test]
    fn new_set_is_empty() {
        let set: ElementSet<TextBitmap> = ElementSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.alive_count(), 0);
    }

    #[test]
    fn animate_all_draws_every_element() {
        let mut set = ElementSet::new();
        set.push(element("one", 40, TargetKind::Left, 0));
        set.push(element("two", 40, TargetKind::Left, 2));
        let mut surface = RecordingSurface::new(80, 24);

        let removed = set.animate_all(&mut surface);

        assert_eq!(removed, 0);
        let rows: Vec<i32> = surface.commands().iter().map(|c| c.y).collect();
        assert_eq!(rows, vec![0, 2]);
    }

    #[test]
    fn animate_all_drops_finished_and_keeps_order() {
        let mut set = ElementSet::new();
        set.push(element("a", 10, TargetKind::Left, 0));
        // width 5, already at -5: one step of 2 puts it at -7 < -5
        set.push(element("bbbbb", -5, TargetKind::Offscreen, 1));
        set.push(element("c", 10, TargetKind::Left, 2));
        let mut surface = RecordingSurface::new(80, 24);

        let removed = set.animate_all(&mut surface);

        assert_eq!(removed, 1);
        let rows: Vec<i32> = set.iter().map(|e| e.y()).collect();
        assert_eq!(rows, vec![0, 2]);
    }

    #[test]
    fn kill_oldest_skips_dismissed_elements() {
        let mut set = ElementSet::new();
        set.push(element("a", 10, TargetKind::Left, 0));
        set.push(element("b", 10, TargetKind::Left, 1));

        assert!(set.kill_oldest());
        assert!(set.kill_oldest());
        assert!(!set.kill_oldest());

        assert!(set.iter().all(|e| !e.is_alive()));
        assert_eq!(set.len(), 2, "dismissed elements stay until they exit");
    }

    #[test]
    fn kill_all_counts_only_live_elements() {
        let mut set = ElementSet::new();
        set.push(element("a", 10, TargetKind::Left, 0));
        set.push(element("b", 10, TargetKind::Left, 1));
        set.kill_oldest();

        assert_eq!(set.kill_all(), 1);
        assert_eq!(set.alive_count(), 0);
    }

    #[test]
    fn dismissed_elements_eventually_leave_the_set() {
        let mut set = ElementSet::new();
        set.push(element("hello", 30, TargetKind::Centered, 0));
        set.push(element("world", 30, TargetKind::Centered, 1));
        set.kill_all();
        let mut surface = RecordingSurface::new(80, 24);

        let mut frames = 0;
        while !set.is_empty() && frames < 1_000 {
            set.animate_all(&mut surface);
            frames += 1;
        }
        assert!(set.is_empty());
    }

    #[test]
    fn set_speed_all_keeps_looping_elements_slower() {
        let mut set = ElementSet::new();
        set.push(element("still", 10, TargetKind::Left, 0));
        set.push(ScrollingElement::new(
            TextBitmap::from_text("band", Style::default()),
            10,
            TargetKind::Left,
            1,
            2,
            true,
        ));

        set.set_speed_all(6);

        let speeds: Vec<i32> = set.iter().map(|e| e.speed()).collect();
        assert_eq!(speeds, vec![6, 5]);
    }

    #[test]
    fn invalidate_targets_clears_every_cache() {
        let mut set = ElementSet::new();
        set.push(element("a", 10, TargetKind::Left, 0));
        set.push(element("b", 10, TargetKind::Right, 1));
        let mut surface = RecordingSurface::new(80, 24);
        set.animate_all(&mut surface);
        assert!(set.iter().all(|e| e.resolved_target().is_some()));

        set.invalidate_targets();
        assert!(set.iter().all(|e| e.resolved_target().is_none()));
    }

    #[test]
    fn render_all_does_not_move() {
        let mut set = ElementSet::new();
        set.push(element("a", 40, TargetKind::Left, 0));
        let mut surface = RecordingSurface::new(80, 24);

        set.render_all(&mut surface);
        set.render_all(&mut surface);

        assert_eq!(set.iter().next().map(|e| e.x()), Some(40));
        assert_eq!(surface.commands().len(), 2);
    }

    #[test]
    fn clear_drops_everything() {
        let mut set = ElementSet::new();
        set.push(element("a", 40, TargetKind::Left, 0));
        set.clear();
        assert!(set.is_empty());
    }
}
