//! Surface implementation over a ratatui buffer.

use crate::model::{Surface, TextBitmap, Viewport};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

/// Draws [`TextBitmap`]s into a region of a ratatui [`Buffer`].
///
/// Coordinates are relative to `area`. Anything outside it, including
/// negative columns of a bitmap sliding off the left edge, is clipped
/// per grapheme.
#[derive(Debug)]
pub struct BufferSurface<'a> {
    buffer: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferSurface<'a> {
    /// Wrap `buffer`, drawing inside `area`.
    ///
    /// `area` is clamped to the buffer's own area.
    pub fn new(buffer: &'a mut Buffer, area: Rect) -> Self {
        let area = area.intersection(buffer.area);
        Self { buffer, area }
    }
}

impl Surface<TextBitmap> for BufferSurface<'_> {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.area.width, self.area.height)
    }

    fn draw_at(&mut self, bitmap: &TextBitmap, x: i32, y: i32) {
        let width = i32::from(self.area.width);
        let height = i32::from(self.area.height);

        for (offset, line) in bitmap.lines().iter().enumerate() {
            let row = y.saturating_add(i32::try_from(offset).unwrap_or(i32::MAX));
            if row < 0 || row >= height {
                continue;
            }
            // row is within 0..height, which fits in u16
            let cell_y = self.area.y + row as u16;

            let mut col = x;
            for grapheme in line.styled_graphemes(Style::default()) {
                if col >= width {
                    break;
                }
                let cells = i32::try_from(grapheme.symbol.width()).unwrap_or(0);
                if cells == 0 {
                    continue;
                }
                if col >= 0 && col + cells <= width {
                    let cell_x = self.area.x + col as u16;
                    self.buffer[(cell_x, cell_y)]
                        .set_symbol(grapheme.symbol)
                        .set_style(grapheme.style);
                    // trailing half of a wide grapheme
                    for extra in 1..cells {
                        self.buffer[(cell_x + extra as u16, cell_y)].reset();
                    }
                }
                col += cells;
            }
        }
    }
}
