//! Property-based tests for the scrolling element state machine.
//!
//! BLACK-BOX: elements are driven only through `animate`, `kill` and
//! `set_speed`, and observed through their accessors and the draw commands a
//! `RecordingSurface` captures.
//!
//! Properties under test:
//! - target columns follow the per-kind formulas and are cached
//! - non-looping elements move monotonically and come to rest within one
//!   step of their target
//! - live looping elements never leave the band and never report completion
//! - the trailing copy is drawn exactly one period to the right
//! - dismissed elements report completion exactly once

use marquee::model::{Bitmap, RecordingSurface, TargetKind, EDGE_MARGIN};
use marquee::state::{loop_adjusted_speed, ScrollingElement};
use proptest::prelude::*;

// ===== Test Bitmap =====

/// One-row bitmap of a given width.
#[derive(Debug, Clone, Copy)]
struct Strip(u16);

impl Bitmap for Strip {
    fn width(&self) -> u16 {
        self.0
    }

    fn height(&self) -> u16 {
        1
    }
}

// ===== Arbitrary Strategies =====

fn arb_target() -> impl Strategy<Value = TargetKind> {
    prop_oneof![
        Just(TargetKind::Centered),
        Just(TargetKind::Right),
        Just(TargetKind::Left),
        Just(TargetKind::Offscreen),
    ]
}

fn arb_viewport_width() -> impl Strategy<Value = u16> {
    1u16..2000
}

fn arb_bitmap_width() -> impl Strategy<Value = u16> {
    1u16..500
}

/// Frames generous enough for any generated element to cross the viewport.
const FRAME_LIMIT: usize = 5_000;

// ===== Target Resolution =====

proptest! {
    #[test]
    fn resolved_target_matches_formula(
        target in arb_target(),
        vw in arb_viewport_width(),
        w in arb_bitmap_width(),
    ) {
        let (vw_i, w_i) = (i32::from(vw), i32::from(w));
        let expected = match target {
            TargetKind::Centered => vw_i / 2 - w_i / 2,
            TargetKind::Right => vw_i - w_i - EDGE_MARGIN,
            TargetKind::Left => EDGE_MARGIN,
            TargetKind::Offscreen => -w_i - EDGE_MARGIN,
        };

        let mut element = ScrollingElement::new(Strip(w), vw_i, target, 0, 1, false);
        prop_assert_eq!(element.resolve_target(vw_i), expected);
    }

    #[test]
    fn resolved_target_is_cached_across_widths(
        target in arb_target(),
        first in arb_viewport_width(),
        second in arb_viewport_width(),
        w in arb_bitmap_width(),
    ) {
        let mut element = ScrollingElement::new(Strip(w), 0, target, 0, 1, false);
        let resolved = element.resolve_target(i32::from(first));
        prop_assert_eq!(element.resolve_target(i32::from(second)), resolved);

        element.invalidate_target();
        prop_assert_eq!(
            element.resolve_target(i32::from(second)),
            target.offset(i32::from(second), i32::from(w))
        );
    }
}

// ===== Settling =====

proptest! {
    #[test]
    fn non_looping_element_settles_within_one_step(
        target in prop_oneof![Just(TargetKind::Centered), Just(TargetKind::Right)],
        vw in 200u16..2000,
        w in 1u16..100,
        speed in 1i32..60,
    ) {
        let vw_i = i32::from(vw);
        let mut surface = RecordingSurface::new(vw, 50);
        let mut element = ScrollingElement::new(Strip(w), vw_i, target, 0, speed, false);
        let target_x = element.resolve_target(vw_i);
        prop_assume!(target_x < vw_i);

        let mut previous = element.x();
        for _ in 0..FRAME_LIMIT {
            element.animate(&mut surface);
            prop_assert!(element.x() <= previous, "moved right: {} -> {}", previous, element.x());
            previous = element.x();
        }

        prop_assert!(element.x() <= target_x);
        prop_assert!(element.x() > target_x - speed);

        // resting elements stay put
        let rest = element.x();
        element.animate(&mut surface);
        prop_assert_eq!(element.x(), rest);
    }

    #[test]
    fn non_looping_element_left_of_target_never_moves(
        vw in 200u16..2000,
        w in 1u16..50,
        start in -40i32..40,
        speed in 1i32..60,
    ) {
        // Right target is at least vw - 50 - 50 >= 100, so start is left of it
        let mut surface = RecordingSurface::new(vw, 50);
        let mut element =
            ScrollingElement::new(Strip(w), start, TargetKind::Right, 0, speed, false);

        for _ in 0..20 {
            element.animate(&mut surface);
        }
        prop_assert_eq!(element.x(), start);
    }
}

// ===== Looping =====

proptest! {
    #[test]
    fn live_looping_element_stays_in_band(
        vw in arb_viewport_width(),
        w in arb_bitmap_width(),
        speed_seed in any::<u16>(),
        frames in 1usize..2_000,
    ) {
        let vw_i = i32::from(vw);
        let w_i = i32::from(w);
        let period = w_i + 2 * (vw_i / 3);
        // wrapping restores the invariant only while a step fits in a period
        let speed = 1 + i32::from(speed_seed) % w_i;

        let mut surface = RecordingSurface::new(vw, 50);
        let mut element = ScrollingElement::new(Strip(w), vw_i, TargetKind::Centered, 0, speed, true);

        for _ in 0..frames {
            let exited = element.animate(&mut surface);
            prop_assert!(!exited, "live looping element reported completion");
            prop_assert!(element.x() >= -w_i);
            prop_assert!(element.x() <= vw_i.max(period - w_i));
        }
    }

    #[test]
    fn trailing_copy_is_one_period_right(
        vw in 3u16..2000,
        w in arb_bitmap_width(),
        frames in 1usize..2_000,
    ) {
        let vw_i = i32::from(vw);
        let w_i = i32::from(w);
        let third = vw_i / 3;
        let period = w_i + 2 * third;

        let mut surface = RecordingSurface::new(vw, 50);
        let mut element = ScrollingElement::new(Strip(w), vw_i, TargetKind::Centered, 0, 2, true);

        for _ in 0..frames {
            element.animate(&mut surface);
            let commands = surface.take();
            match commands.as_slice() {
                [primary] => {
                    prop_assert_eq!(primary.x, element.x());
                    prop_assert!(primary.x + w_i >= third);
                }
                [primary, copy] => {
                    prop_assert_eq!(primary.x, element.x());
                    prop_assert!(primary.x + w_i < third);
                    prop_assert_eq!(copy.x, primary.x + period);
                    prop_assert_eq!(copy.y, primary.y);
                }
                other => prop_assert!(false, "unexpected draw count {}", other.len()),
            }
        }
    }

    #[test]
    fn looping_speed_is_reduced_by_one(speed in 1i32..100) {
        let element = ScrollingElement::new(Strip(10), 0, TargetKind::Centered, 0, speed, true);
        prop_assert_eq!(element.speed(), loop_adjusted_speed(speed, true));
        prop_assert_eq!(element.speed(), (speed - 1).max(1));
    }
}

// ===== Dismissal =====

proptest! {
    #[test]
    fn dismissed_element_completes_exactly_once(
        target in arb_target(),
        vw in arb_viewport_width(),
        w in arb_bitmap_width(),
        speed in 1i32..40,
        looping in any::<bool>(),
        frames_before_kill in 0usize..300,
    ) {
        let vw_i = i32::from(vw);
        let mut surface = RecordingSurface::new(vw, 50);
        let mut element = ScrollingElement::new(Strip(w), vw_i, target, 0, speed, looping);

        let mut completions = 0;
        for _ in 0..frames_before_kill {
            if element.animate(&mut surface) {
                completions += 1;
            }
        }

        element.kill();
        prop_assert!(!element.is_alive());
        prop_assert_eq!(element.target(), TargetKind::Offscreen);

        for _ in 0..FRAME_LIMIT {
            if element.animate(&mut surface) {
                completions += 1;
            }
        }

        prop_assert_eq!(completions, 1);
        prop_assert!(element.x() < -i32::from(w));
    }

    #[test]
    fn dismissed_looping_element_draws_single_copy(
        vw in 3u16..2000,
        w in arb_bitmap_width(),
    ) {
        let mut surface = RecordingSurface::new(vw, 50);
        let mut element =
            ScrollingElement::new(Strip(w), i32::from(vw), TargetKind::Centered, 0, 3, true);
        element.kill();

        for _ in 0..FRAME_LIMIT {
            element.animate(&mut surface);
            prop_assert_eq!(surface.take().len(), 1);
        }
    }

    #[test]
    fn kill_is_idempotent(
        w in arb_bitmap_width(),
        x in -100i32..100,
    ) {
        let mut once = ScrollingElement::new(Strip(w), x, TargetKind::Left, 0, 2, false);
        once.kill();
        let mut twice = once.clone();
        twice.kill();

        prop_assert_eq!(twice.x(), once.x());
        prop_assert_eq!(twice.target(), once.target());
        prop_assert_eq!(twice.resolved_target(), once.resolved_target());
        prop_assert_eq!(twice.is_alive(), once.is_alive());
    }
}
