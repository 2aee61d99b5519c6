//! Direction classification between two grid cells
//!
//! Picks the line orientation a bolt takes when it travels from a
//! source cell toward a target cell.

use crate::constants::{
    ASCII_DIAGONAL_DOWN, ASCII_DIAGONAL_UP, ASCII_FALLBACK, ASCII_HORIZONTAL, ASCII_VERTICAL,
};

/// Orientation of the segment from source to target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoltDirection {
    /// Both axes move the same way (down-right or up-left): `\`
    DiagonalDown,
    /// Axes move in opposite ways (up-right or down-left): `/`
    DiagonalUp,
    /// Same column, different row: `|`
    Vertical,
    /// Same row, different column: `-`
    Horizontal,
    /// Identical points, or coordinates that do not compare: `?`
    Undetermined,
}

impl BoltDirection {
    /// All variants in classification priority order
    pub const ALL: [BoltDirection; 5] = [
        BoltDirection::DiagonalDown,
        BoltDirection::DiagonalUp,
        BoltDirection::Vertical,
        BoltDirection::Horizontal,
        BoltDirection::Undetermined,
    ];

    /// ASCII glyph for this direction
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            BoltDirection::DiagonalDown => ASCII_DIAGONAL_DOWN,
            BoltDirection::DiagonalUp => ASCII_DIAGONAL_UP,
            BoltDirection::Vertical => ASCII_VERTICAL,
            BoltDirection::Horizontal => ASCII_HORIZONTAL,
            BoltDirection::Undetermined => ASCII_FALLBACK,
        }
    }
}

/// Classify the direction from `(source_x, source_y)` to `(target_x, target_y)`.
///
/// Rules are checked in order and the first match wins:
///
/// 1. both axes strictly increase or both strictly decrease -> `DiagonalDown`
/// 2. one axis strictly increases while the other strictly decreases -> `DiagonalUp`
/// 3. same x, different y -> `Vertical`
/// 4. different x, same y -> `Horizontal`
/// 5. anything else -> `Undetermined`
///
/// Only `PartialOrd` is required. NaN fails every ordering comparison, so it
/// normally lands on `Undetermined`. An equal axis paired with a NaN on the
/// other axis still satisfies `!=` and reads as a straight line.
#[inline]
pub fn classify<T: PartialOrd>(
    source_x: T,
    source_y: T,
    target_x: T,
    target_y: T,
) -> BoltDirection {
    if (source_x < target_x && source_y < target_y) || (source_x > target_x && source_y > target_y)
    {
        BoltDirection::DiagonalDown
    } else if (source_x < target_x && source_y > target_y)
        || (source_x > target_x && source_y < target_y)
    {
        BoltDirection::DiagonalUp
    } else if source_x == target_x && source_y != target_y {
        BoltDirection::Vertical
    } else if source_x != target_x && source_y == target_y {
        BoltDirection::Horizontal
    } else {
        BoltDirection::Undetermined
    }
}

/// ASCII direction glyph from `(source_x, source_y)` to `(target_x, target_y)`.
///
/// Shorthand for `classify(..).symbol()`. Never fails; identical points
/// give `'?'`.
#[inline]
pub fn direction_symbol<T: PartialOrd>(
    source_x: T,
    source_y: T,
    target_x: T,
    target_y: T,
) -> char {
    classify(source_x, source_y, target_x, target_y).symbol()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_symbol_concrete_cases() {
        assert_eq!(direction_symbol(0, 0, 3, 3), '\\');
        assert_eq!(direction_symbol(3, 3, 0, 0), '\\');
        assert_eq!(direction_symbol(0, 3, 3, 0), '/');
        assert_eq!(direction_symbol(3, 0, 0, 3), '/');
        assert_eq!(direction_symbol(2, 2, 2, 5), '|');
        assert_eq!(direction_symbol(2, 2, 5, 2), '-');
        assert_eq!(direction_symbol(4, 4, 4, 4), '?');
    }

    #[test]
    fn test_classify_ignores_slope() {
        // Shallow and steep lines both count as diagonal
        assert_eq!(classify(0, 0, 10, 1), BoltDirection::DiagonalDown);
        assert_eq!(classify(0, 0, 1, 10), BoltDirection::DiagonalDown);
        assert_eq!(classify(0, 10, 1, 0), BoltDirection::DiagonalUp);
    }

    #[test]
    fn test_classify_negative_coordinates() {
        assert_eq!(classify(-5, -5, -1, -1), BoltDirection::DiagonalDown);
        assert_eq!(classify(-1, 1, 1, -1), BoltDirection::DiagonalUp);
        assert_eq!(classify(-3, -7, -3, 7), BoltDirection::Vertical);
        assert_eq!(classify(i64::MIN, 0, i64::MAX, 0), BoltDirection::Horizontal);
    }

    #[test]
    fn test_classify_floats() {
        assert_eq!(classify(0.0, 0.0, 0.5, 0.5), BoltDirection::DiagonalDown);
        assert_eq!(classify(1.0, 1.0, 1.0, 1.0), BoltDirection::Undetermined);
    }

    #[test]
    fn test_classify_nan_falls_through() {
        assert_eq!(classify(f64::NAN, 0.0, 1.0, 1.0), BoltDirection::Undetermined);
        assert_eq!(classify(0.0, 0.0, 0.0, f64::NAN), BoltDirection::Vertical);
        assert_eq!(direction_symbol(f32::NAN, f32::NAN, f32::NAN, f32::NAN), '?');
    }

    #[test]
    fn test_symbol_matches_variant() {
        let symbols: Vec<char> = BoltDirection::ALL.iter().map(|d| d.symbol()).collect();
        assert_eq!(symbols, vec!['\\', '/', '|', '-', '?']);
    }
}
