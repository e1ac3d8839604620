//! Animation state machine (pure).
//!
//! All state transitions are plain functions over owned values, testable
//! without a terminal.

pub mod app_state;
pub mod element_set;
pub mod scrolling_element;

// Re-export for convenience
pub use app_state::{AppState, MAX_SPEED, TickerSettings};
pub use element_set::ElementSet;
pub use scrolling_element::{ScrollingElement, loop_adjusted_speed};
