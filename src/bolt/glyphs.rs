//! Glyph sets
//!
//! Maps each bolt direction to the character drawn in its cell.
//! ASCII works everywhere; the Unicode set uses box-drawing diagonals
//! that line up with adjacent cells on fonts that support them.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

use super::direction::{classify, BoltDirection};
use crate::constants::{
    is_box_drawing, ASCII_DIAGONAL_DOWN, ASCII_DIAGONAL_UP, ASCII_FALLBACK, ASCII_HORIZONTAL,
    ASCII_VERTICAL, PRESET_ASCII, PRESET_UNICODE, UNICODE_DIAGONAL_DOWN, UNICODE_DIAGONAL_UP,
    UNICODE_FALLBACK, UNICODE_HORIZONTAL, UNICODE_VERTICAL,
};

/// Glyph set errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlyphError {
    #[error("unknown glyph preset '{0}' (expected 'ascii' or 'unicode')")]
    UnknownPreset(String),

    #[error("glyph {glyph:?} for '{slot}' must occupy one cell, but has width {width}")]
    InvalidWidth {
        slot: &'static str,
        glyph: char,
        width: usize,
    },
}

/// Characters used for each bolt direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphSet {
    pub diagonal_down: char,
    pub diagonal_up: char,
    pub vertical: char,
    pub horizontal: char,
    pub fallback: char,
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::ascii()
    }
}

impl GlyphSet {
    /// `\ / | - ?`
    pub const fn ascii() -> Self {
        Self {
            diagonal_down: ASCII_DIAGONAL_DOWN,
            diagonal_up: ASCII_DIAGONAL_UP,
            vertical: ASCII_VERTICAL,
            horizontal: ASCII_HORIZONTAL,
            fallback: ASCII_FALLBACK,
        }
    }

    /// `╲ ╱ │ ─ ·`
    pub const fn unicode() -> Self {
        Self {
            diagonal_down: UNICODE_DIAGONAL_DOWN,
            diagonal_up: UNICODE_DIAGONAL_UP,
            vertical: UNICODE_VERTICAL,
            horizontal: UNICODE_HORIZONTAL,
            fallback: UNICODE_FALLBACK,
        }
    }

    /// Look up a preset by name (case-insensitive)
    pub fn from_preset(name: &str) -> Result<Self, GlyphError> {
        let key = name.trim().to_ascii_lowercase();
        match key.as_str() {
            PRESET_ASCII => Ok(Self::ascii()),
            PRESET_UNICODE => Ok(Self::unicode()),
            _ => Err(GlyphError::UnknownPreset(name.to_string())),
        }
    }

    /// Glyph for a direction
    #[inline]
    pub const fn glyph(&self, direction: BoltDirection) -> char {
        match direction {
            BoltDirection::DiagonalDown => self.diagonal_down,
            BoltDirection::DiagonalUp => self.diagonal_up,
            BoltDirection::Vertical => self.vertical,
            BoltDirection::Horizontal => self.horizontal,
            BoltDirection::Undetermined => self.fallback,
        }
    }

    /// Glyph for the segment from `source` to `target`
    #[inline]
    pub fn between<T: PartialOrd>(&self, source: (T, T), target: (T, T)) -> char {
        self.glyph(classify(source.0, source.1, target.0, target.1))
    }

    /// Slots paired with their names, in direction order
    fn slots(&self) -> [(&'static str, char); 5] {
        [
            ("diagonal_down", self.diagonal_down),
            ("diagonal_up", self.diagonal_up),
            ("vertical", self.vertical),
            ("horizontal", self.horizontal),
            ("fallback", self.fallback),
        ]
    }

    /// Check that every glyph fills exactly one grid cell.
    ///
    /// Control characters have no width and wide (CJK, emoji) characters
    /// take two columns; either would shear the bolt off the grid.
    pub fn validate(&self) -> Result<(), GlyphError> {
        for (slot, glyph) in self.slots() {
            let width = glyph.width().unwrap_or(0);
            if width != 1 {
                return Err(GlyphError::InvalidWidth { slot, glyph, width });
            }
        }
        Ok(())
    }

    /// True if all four line glyphs are box-drawing characters
    pub fn is_box_drawing(&self) -> bool {
        self.slots()
            .iter()
            .filter(|(slot, _)| *slot != "fallback")
            .all(|(_, glyph)| is_box_drawing(*glyph as u32))
    }
}
