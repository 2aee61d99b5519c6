//! Global constants for bolt-glyph
//!
//! Consolidates glyph defaults and Unicode range constants
//! to eliminate magic characters throughout the codebase.

// ============================================================================
// ASCII Glyphs
// ============================================================================

/// Diagonal from upper-left to lower-right (both axes move the same way)
pub const ASCII_DIAGONAL_DOWN: char = '\\';

/// Diagonal from lower-left to upper-right (axes move in opposite ways)
pub const ASCII_DIAGONAL_UP: char = '/';

/// Vertical line
pub const ASCII_VERTICAL: char = '|';

/// Horizontal line
pub const ASCII_HORIZONTAL: char = '-';

/// Source and target coincide (or are not comparable)
pub const ASCII_FALLBACK: char = '?';

// ============================================================================
// Unicode Glyphs
// ============================================================================

/// BOX DRAWINGS LIGHT DIAGONAL UPPER LEFT TO LOWER RIGHT (U+2572)
pub const UNICODE_DIAGONAL_DOWN: char = '╲';

/// BOX DRAWINGS LIGHT DIAGONAL UPPER RIGHT TO LOWER LEFT (U+2571)
pub const UNICODE_DIAGONAL_UP: char = '╱';

/// BOX DRAWINGS LIGHT VERTICAL (U+2502)
pub const UNICODE_VERTICAL: char = '│';

/// BOX DRAWINGS LIGHT HORIZONTAL (U+2500)
pub const UNICODE_HORIZONTAL: char = '─';

/// MIDDLE DOT (U+00B7)
pub const UNICODE_FALLBACK: char = '·';

// ============================================================================
// Presets
// ============================================================================

/// Preset name for the ASCII glyph set
pub const PRESET_ASCII: &str = "ascii";

/// Preset name for the box-drawing glyph set
pub const PRESET_UNICODE: &str = "unicode";

/// Preset used when nothing is configured
pub const DEFAULT_PRESET: &str = PRESET_ASCII;

// ============================================================================
// Trails
// ============================================================================

/// Longest bolt, in steps, the CLI will print with --trail
pub const MAX_TRAIL_SPAN: u64 = 10_000;

// ============================================================================
// Unicode Ranges
// ============================================================================

/// Box drawing characters range (U+2500 - U+257F)
/// Light and heavy lines, corners, T-junctions, crosses, diagonals
pub const BOX_DRAWING_RANGE_START: u32 = 0x2500;
pub const BOX_DRAWING_RANGE_END: u32 = 0x257F;

/// Check if a code point is a box drawing character
#[inline]
pub const fn is_box_drawing(cp: u32) -> bool {
    cp >= BOX_DRAWING_RANGE_START && cp <= BOX_DRAWING_RANGE_END
}
