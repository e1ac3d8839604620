//! Domain model types (pure).
//!
//! Target kinds, bitmaps, the renderer collaborator traits, and the
//! configured ticker items.

pub mod bitmap;
pub mod error;
pub mod item;
pub mod key_action;
pub mod render;
pub mod target;

// Re-export for convenience
pub use bitmap::TextBitmap;
pub use error::{AppError, InputError};
pub use item::{ItemSpec, LoopMode, ParseLoopModeError};
pub use key_action::KeyAction;
pub use render::{Bitmap, DrawCommand, RecordingSurface, Surface, Viewport};
pub use target::{EDGE_MARGIN, ParseTargetError, TargetKind};
