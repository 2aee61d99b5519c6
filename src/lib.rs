//! bolt-glyph - direction glyphs for character-grid effects
//!
//! # Overview
//!
//! ```text
//!   source (0,0)                       source (0,3)
//!        \                                   /
//!         \          direction_symbol       /
//!          \   ─────────────────────────>  /
//!      target (3,3)                  target (3,0)
//! ```
//!
//! [`direction_symbol`] is the core: a pure classification of the line
//! from a source cell to a target cell into `\`, `/`, `|`, `-` or `?`.
//! [`GlyphSet`] swaps in other characters and [`bolt()`] spreads the choice
//! along a whole trajectory.

pub mod bolt;
pub mod config;
pub mod constants;

pub use bolt::{
    bolt, classify, direction_symbol, span, trace, trail, BoltCell, BoltDirection, GlyphError,
    GlyphSet, Trace,
};
