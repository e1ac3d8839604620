//! Pre-rendered text blocks.

use super::render::Bitmap;
use ratatui::style::Style;
use ratatui::text::Line;

/// A block of styled text lines with a fixed size.
///
/// The terminal counterpart of a rendered text or image surface: a single
/// line for a ticker caption, several lines for a banner. Width is the
/// display width of the widest line (wide graphemes count as two cells).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBitmap {
    lines: Vec<Line<'static>>,
    width: u16,
    height: u16,
}

impl TextBitmap {
    /// Build a bitmap from already-styled lines.
    pub fn new(lines: Vec<Line<'static>>) -> Self {
        let width = lines.iter().map(Line::width).max().unwrap_or(0);
        let width = u16::try_from(width).unwrap_or(u16::MAX);
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        Self {
            lines,
            width,
            height,
        }
    }

    /// Build a bitmap from plain text, one row per `\n`-separated line.
    ///
    /// Tabs are expanded to four spaces so widths stay predictable.
    pub fn from_text(text: &str, style: Style) -> Self {
        let lines = text
            .lines()
            .map(|line| Line::styled(line.replace('\t', "    "), style))
            .collect();
        Self::new(lines)
    }

    /// Rows of the bitmap, top to bottom.
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }
}

impl Bitmap for TextBitmap {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }
}
