//! marquee
//!
//! Terminal ticker: lines of text slide in from the right edge and settle at
//! a target column, or scroll forever as a seamless repeating band.
//!
//! Pure core / impure shell: [`state`] holds the per-element scroll state
//! machine and is driven through the [`model::Surface`] trait; [`view`]
//! renders it into a ratatui terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
