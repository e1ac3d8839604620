//! Collaborator interfaces between the scrolling core and a renderer.
//!
//! The core never owns rendering resources. It reads the viewport size from a
//! [`Surface`] and hands it draw commands for a [`Bitmap`] it holds.

/// A renderable block with a fixed size.
pub trait Bitmap {
    /// Width in cells.
    fn width(&self) -> u16;
    /// Height in cells.
    fn height(&self) -> u16;
}

impl<T: Bitmap + ?Sized> Bitmap for &T {
    fn width(&self) -> u16 {
        (**self).width()
    }

    fn height(&self) -> u16 {
        (**self).height()
    }
}

/// Visible area that positions are resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Viewport {
    /// Create a viewport of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renderer that accepts bitmaps of type `B` at arbitrary positions.
///
/// Positions may be negative or past the viewport; implementations clip.
pub trait Surface<B: ?Sized> {
    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Draw `bitmap` with its top-left corner at `(x, y)`.
    fn draw_at(&mut self, bitmap: &B, x: i32, y: i32);
}

/// A draw request captured by [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width of the drawn bitmap.
    pub width: u16,
    /// Height of the drawn bitmap.
    pub height: u16,
}

/// Headless surface that records every draw call.
///
/// Used to observe what the core emits per frame without a terminal.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recorder reporting the given viewport size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Commands recorded since creation or the last [`take`](Self::take).
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain recorded commands, e.g. once per frame.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Change the reported viewport, simulating a resize.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
    }
}

impl<B: Bitmap + ?Sized> Surface<B> for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn draw_at(&mut self, bitmap: &B, x: i32, y: i32) {
        self.commands.push(DrawCommand {
            x,
            y,
            width: bitmap.width(),
            height: bitmap.height(),
        });
    }
}
