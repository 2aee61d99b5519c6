//! Bolt trajectories
//!
//! A bolt rarely travels along one of the four glyph orientations, so the
//! glyph is picked per step: a shallow line alternates between `-` and a
//! diagonal as it climbs.

use super::glyphs::GlyphSet;

/// One cell of a bolt trail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoltCell {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
}

/// Number of steps from `source` to `target` (Chebyshev distance)
pub fn span(source: (i32, i32), target: (i32, i32)) -> u64 {
    let dx = (i64::from(target.0) - i64::from(source.0)).unsigned_abs();
    let dy = (i64::from(target.1) - i64::from(source.1)).unsigned_abs();
    dx.max(dy)
}

/// Lazy walk over the cells of a line, see [`trace`]
#[derive(Debug, Clone)]
pub struct Trace {
    // i64 so that spans across the whole i32 range don't overflow
    x: i64,
    y: i64,
    tx: i64,
    ty: i64,
    dx: i64,
    dy: i64,
    step_x: i64,
    step_y: i64,
    err: i64,
    remaining: u64,
    done: bool,
}

impl Iterator for Trace {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        // x and y stay between source and target, so they fit in i32
        let cell = (self.x as i32, self.y as i32);
        if self.x == self.tx && self.y == self.ty {
            self.done = true;
            return Some(cell);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.step_x;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.step_y;
        }
        self.remaining -= 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let len = self.remaining.saturating_add(1);
        match usize::try_from(len) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Grid cells on the line from `source` to `target`, both included.
///
/// Uses Bresenham's integer line algorithm, so every step moves at most one
/// cell on each axis. The first cell is always `source` and the last is
/// always `target`. Cells are produced on demand; nothing is allocated, so
/// even a line across the whole i32 range can be walked or cut short.
pub fn trace(source: (i32, i32), target: (i32, i32)) -> Trace {
    let (x, y) = (i64::from(source.0), i64::from(source.1));
    let (tx, ty) = (i64::from(target.0), i64::from(target.1));
    let dx = (tx - x).abs();
    let dy = -(ty - y).abs();

    Trace {
        x,
        y,
        tx,
        ty,
        dx,
        dy,
        step_x: if x < tx { 1 } else { -1 },
        step_y: if y < ty { 1 } else { -1 },
        err: dx + dy,
        remaining: span(source, target),
        done: false,
    }
}

/// Attach a glyph to every cell of `path`.
///
/// Each cell shows the direction of the step that entered it. The first
/// cell has no incoming step and borrows the glyph of the step leaving it.
/// A single-cell path has no direction at all and gets the fallback glyph.
pub fn trail(path: &[(i32, i32)], glyphs: &GlyphSet) -> Vec<BoltCell> {
    let first_glyph = match path {
        [] => return Vec::new(),
        [_] => glyphs.fallback,
        [a, b, ..] => glyphs.between(*a, *b),
    };

    let mut cells = Vec::with_capacity(path.len());
    cells.push(BoltCell {
        x: path[0].0,
        y: path[0].1,
        glyph: first_glyph,
    });
    cells.extend(path.windows(2).map(|step| BoltCell {
        x: step[1].0,
        y: step[1].1,
        glyph: glyphs.between(step[0], step[1]),
    }));
    cells
}

/// Trail of a bolt fired from `source` at `target`.
///
/// The source cell is left out since the caster stands on it. Firing at
/// your own cell yields nothing to draw. Like [`trace`], cells are
/// produced lazily.
pub fn bolt(
    source: (i32, i32),
    target: (i32, i32),
    glyphs: &GlyphSet,
) -> impl Iterator<Item = BoltCell> {
    let glyphs = *glyphs;
    let mut prev = source;
    trace(source, target).skip(1).map(move |cell| {
        let glyph = glyphs.between(prev, cell);
        prev = cell;
        BoltCell {
            x: cell.0,
            y: cell.1,
            glyph,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(source: (i32, i32), target: (i32, i32)) -> Vec<(i32, i32)> {
        trace(source, target).collect()
    }

    fn cells(source: (i32, i32), target: (i32, i32), glyphs: &GlyphSet) -> Vec<BoltCell> {
        bolt(source, target, glyphs).collect()
    }

    fn glyph_string(cells: &[BoltCell]) -> String {
        cells.iter().map(|c| c.glyph).collect()
    }

    #[test]
    fn test_trace_single_point() {
        assert_eq!(path((4, 4), (4, 4)), vec![(4, 4)]);
    }

    #[test]
    fn test_trace_straight_lines() {
        assert_eq!(path((0, 0), (3, 0)), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(path((2, 5), (2, 2)), vec![(2, 5), (2, 4), (2, 3), (2, 2)]);
        assert_eq!(path((3, 3), (0, 0)), vec![(3, 3), (2, 2), (1, 1), (0, 0)]);
    }

    #[test]
    fn test_trace_shallow_line() {
        assert_eq!(
            path((0, 0), (5, 2)),
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]
        );
    }

    #[test]
    fn test_trace_is_connected() {
        let targets = [(7, -3), (-9, 4), (1, 12), (-6, -6), (0, -11)];
        for target in targets {
            let path = path((0, 0), target);
            assert_eq!(path.first(), Some(&(0, 0)));
            assert_eq!(path.last(), Some(&target));
            for step in path.windows(2) {
                assert!((step[1].0 - step[0].0).abs() <= 1);
                assert!((step[1].1 - step[0].1).abs() <= 1);
                assert_ne!(step[0], step[1]);
            }
        }
    }

    #[test]
    fn test_trace_extreme_span() {
        let path = path((i32::MAX - 2, 0), (i32::MAX, 0));
        assert_eq!(path.len(), 3);
        assert_eq!(path[2], (i32::MAX, 0));
    }

    #[test]
    fn test_trace_full_range_is_lazy() {
        let mut walk = trace((i32::MIN, 0), (i32::MAX, 0));
        assert_eq!(walk.size_hint().1, usize::try_from(1u64 << 32).ok());
        assert_eq!(walk.next(), Some((i32::MIN, 0)));
        assert_eq!(walk.next(), Some((i32::MIN + 1, 0)));

        let first: Vec<BoltCell> =
            bolt((i32::MIN, i32::MIN), (i32::MAX, i32::MAX), &GlyphSet::ascii())
                .take(3)
                .collect();
        assert_eq!(first.len(), 3);
        assert_eq!((first[2].x, first[2].y), (i32::MIN + 3, i32::MIN + 3));
        assert_eq!(glyph_string(&first), "\\\\\\");
    }

    #[test]
    fn test_trace_size_hint_counts_down() {
        let mut walk = trace((0, 0), (5, 2));
        assert_eq!(walk.size_hint(), (6, Some(6)));
        walk.next();
        assert_eq!(walk.size_hint(), (5, Some(5)));
        assert_eq!(walk.by_ref().count(), 5);
        assert_eq!(walk.size_hint(), (0, Some(0)));
        assert_eq!(walk.next(), None);
    }

    #[test]
    fn test_span() {
        assert_eq!(span((4, 4), (4, 4)), 0);
        assert_eq!(span((0, 0), (5, -2)), 5);
        assert_eq!(span((i32::MIN, 0), (i32::MAX, 1)), u64::from(u32::MAX));
    }

    #[test]
    fn test_trail_empty_and_single() {
        let glyphs = GlyphSet::ascii();
        assert!(trail(&[], &glyphs).is_empty());
        assert_eq!(
            trail(&[(1, 2)], &glyphs),
            vec![BoltCell {
                x: 1,
                y: 2,
                glyph: '?'
            }]
        );
    }

    #[test]
    fn test_trail_changes_glyph_mid_flight() {
        let path = path((0, 0), (5, 2));
        let cells = trail(&path, &GlyphSet::ascii());
        assert_eq!(glyph_string(&cells), "--\\-\\-");
    }

    #[test]
    fn test_trail_bent_path() {
        // Up, then diagonally down-right, then right
        let path = [(0, 2), (0, 1), (1, 2), (2, 2)];
        let cells = trail(&path, &GlyphSet::unicode());
        assert_eq!(glyph_string(&cells), "││╲─");
    }

    #[test]
    fn test_bolt_skips_source() {
        let cells = cells((2, 2), (2, 5), &GlyphSet::ascii());
        let coords: Vec<(i32, i32)> = cells.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(coords, vec![(2, 3), (2, 4), (2, 5)]);
        assert_eq!(glyph_string(&cells), "|||");
    }

    #[test]
    fn test_bolt_at_self_is_empty() {
        assert_eq!(bolt((4, 4), (4, 4), &GlyphSet::ascii()).count(), 0);
    }

    #[test]
    fn test_bolt_diagonal() {
        let cells = cells((0, 3), (3, 0), &GlyphSet::ascii());
        assert_eq!(glyph_string(&cells), "///");
        assert_eq!(cells.last().map(|c| (c.x, c.y)), Some((3, 0)));
    }
}
