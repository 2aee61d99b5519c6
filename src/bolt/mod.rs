//! Bolt glyph selection
//!
//! This module picks the characters used to draw:
//! - Lightning bolts and beams
//! - Bullets and arrows in flight
//! - Magic spell trajectories
//!
//! A single glyph describes the orientation from source to target.
//! Trails re-evaluate it per cell so bent or shallow paths read correctly.

pub mod direction;
pub mod glyphs;
pub mod trajectory;

// Re-export commonly used items
pub use direction::{classify, direction_symbol, BoltDirection};
pub use glyphs::{GlyphError, GlyphSet};
pub use trajectory::{bolt, span, trace, trail, BoltCell, Trace};
