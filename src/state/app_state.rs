//! Top-level ticker state.

use super::element_set::ElementSet;
use super::scrolling_element::ScrollingElement;
use crate::model::{Bitmap, ItemSpec, KeyAction, LoopMode, Surface, TargetKind, TextBitmap, Viewport};
use ratatui::style::{Color, Style};
use tracing::{debug, info, warn};

/// Upper bound for the speed keys.
pub const MAX_SPEED: i32 = 40;

/// Defaults applied to items that do not override them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerSettings {
    /// Cells per frame.
    pub speed: i32,
    /// Resting position.
    pub target: TargetKind,
    /// Loop behaviour.
    pub loop_mode: LoopMode,
    /// Respawn all items once every element has exited.
    pub cycle: bool,
    /// Row of the first stacked item.
    pub top: u16,
    /// Blank rows between stacked items.
    pub row_gap: u16,
}

impl Default for TickerSettings {
    fn default() -> Self {
        Self {
            speed: 2,
            target: TargetKind::Centered,
            loop_mode: LoopMode::Auto,
            cycle: false,
            top: 1,
            row_gap: 1,
        }
    }
}

/// Everything the ticker needs between frames.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active elements.
    pub elements: ElementSet<TextBitmap>,
    items: Vec<ItemSpec>,
    settings: TickerSettings,
    speed: i32,
    paused: bool,
}

impl AppState {
    /// Create state for `items`; nothing is spawned until
    /// [`spawn_items`](Self::spawn_items).
    pub fn new(items: Vec<ItemSpec>, settings: TickerSettings) -> Self {
        let speed = settings.speed;
        Self {
            elements: ElementSet::new(),
            items,
            settings,
            speed,
            paused: false,
        }
    }

    /// Configured items.
    pub fn items(&self) -> &[ItemSpec] {
        &self.items
    }

    /// Current base speed.
    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Whether motion is frozen.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Create one element per item, entering from the right edge of
    /// `viewport`.
    ///
    /// Items without an explicit row stack downward from `top`, separated by
    /// `row_gap` blank rows.
    pub fn spawn_items(&mut self, viewport: Viewport) {
        let start_x = i32::from(viewport.width);
        let mut next_row = i32::from(self.settings.top);

        for item in &self.items {
            let bitmap = TextBitmap::from_text(&item.text, item_style(item));
            let looping = item
                .loop_mode
                .unwrap_or(self.settings.loop_mode)
                .should_loop(bitmap.width(), viewport.width);
            let target = item.target.unwrap_or(self.settings.target);
            let speed = item.speed.unwrap_or(self.speed);
            let y = item.row.map_or(next_row, i32::from);
            next_row =
                y + i32::from(bitmap.height().max(1)) + i32::from(self.settings.row_gap);

            debug!(
                width = bitmap.width(),
                y,
                %target,
                looping,
                speed,
                "spawning element"
            );
            self.elements.push(ScrollingElement::new(
                bitmap, start_x, target, y, speed, looping,
            ));
        }

        info!(count = self.items.len(), "spawned items");
    }

    /// Advance one frame.
    ///
    /// While paused, elements are drawn in place. With `cycle` set, items
    /// are spawned again once every element has exited.
    pub fn tick<S>(&mut self, surface: &mut S) -> usize
    where
        S: Surface<TextBitmap> + ?Sized,
    {
        if self.paused {
            self.elements.render_all(surface);
            return 0;
        }

        let removed = self.elements.animate_all(surface);
        if self.settings.cycle && self.elements.is_empty() && !self.items.is_empty() {
            info!("all elements exited, cycling items");
            self.spawn_items(surface.viewport());
        }
        removed
    }

    /// Follow a viewport resize.
    pub fn resize(&mut self) {
        self.elements.invalidate_targets();
    }

    /// Perform a user action. Returns `true` when the app should quit.
    pub fn apply(&mut self, action: KeyAction, viewport: Viewport) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::DismissOldest => {
                if !self.elements.kill_oldest() {
                    debug!("nothing left to dismiss");
                }
            }
            KeyAction::DismissAll => {
                let killed = self.elements.kill_all();
                debug!(killed, "dismissed all elements");
            }
            KeyAction::Restart => {
                self.elements.clear();
                self.spawn_items(viewport);
            }
            KeyAction::SpeedUp => self.change_speed(1),
            KeyAction::SlowDown => self.change_speed(-1),
            KeyAction::TogglePause => {
                self.paused = !self.paused;
                debug!(paused = self.paused, "toggled pause");
            }
        }
        false
    }

    fn change_speed(&mut self, delta: i32) {
        let speed = self.speed.saturating_add(delta).clamp(1, MAX_SPEED);
        if speed == self.speed {
            return;
        }
        self.speed = speed;
        self.elements.set_speed_all(speed);
        debug!(speed, "changed speed");
    }
}

/// Style for an item; an unparseable color is logged and ignored.
fn item_style(item: &ItemSpec) -> Style {
    let Some(name) = item.color.as_deref() else {
        return Style::default();
    };
    match name.parse::<Color>() {
        Ok(color) => Style::default().fg(color),
        Err(_) => {
            warn!(color = name, "unknown item color, rendering unstyled");
            Style::default()
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
