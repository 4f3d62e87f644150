//! Random border points.

use hello_core::{Borders, Position};
use rand::Rng;

/// Pick a random point on one of the four border lines.
///
/// Half of the time the point lands on the top or bottom border with a
/// random x, otherwise on the left or right border with a random y.
pub fn pick_target<R: Rng + ?Sized>(rng: &mut R, borders: Borders) -> Position {
    if rng.gen_bool(0.5) {
        let x = below(rng, borders.right);
        let y = if rng.gen_bool(0.5) { 0.0 } else { borders.bottom };
        Position::new(x, y)
    } else {
        let x = if rng.gen_bool(0.5) { 0.0 } else { borders.right };
        let y = below(rng, borders.bottom);
        Position::new(x, y)
    }
}

/// Uniform value in `[0, limit)`, or 0 for an empty or unbounded range.
fn below<R: Rng + ?Sized>(rng: &mut R, limit: f32) -> f32 {
    if limit.is_finite() && limit > 0.0 {
        rng.gen_range(0.0..limit)
    } else {
        0.0
    }
}

/// Assert that `pos` lies within the borders and on one of the four
/// border lines.
#[cfg(test)]
pub(crate) fn assert_on_border(borders: Borders, pos: Position) {
    let inside = (0.0..=borders.right).contains(&pos.x) && (0.0..=borders.bottom).contains(&pos.y);
    let on_line =
        pos.x == 0.0 || pos.x == borders.right || pos.y == 0.0 || pos.y == borders.bottom;
    assert!(inside, "{pos:?} outside {borders:?}");
    assert!(on_line, "{pos:?} not on a border line of {borders:?}");
}

#[cfg(test)]
mod tests {
    use hello_core::{LABEL_SIZE, Size};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const BORDERS: Borders = Borders {
        right: 310.0,
        bottom: 340.0,
    };

    #[test]
    fn test_targets_lie_on_a_border_line() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert_on_border(BORDERS, pick_target(&mut rng, BORDERS));
        }
    }

    #[test]
    fn test_all_four_edges_are_used() {
        let mut rng = StdRng::seed_from_u64(42);
        let (mut left, mut right, mut top, mut bottom) = (false, false, false, false);
        for _ in 0..1000 {
            let t = pick_target(&mut rng, BORDERS);
            left |= t.x == 0.0;
            right |= t.x == BORDERS.right;
            top |= t.y == 0.0;
            bottom |= t.y == BORDERS.bottom;
        }
        assert!(left && right && top && bottom);
    }

    #[test]
    fn test_degenerate_borders() {
        let mut rng = StdRng::seed_from_u64(1);
        let borders = Borders {
            right: 0.0,
            bottom: 0.0,
        };
        for _ in 0..10 {
            assert_eq!(pick_target(&mut rng, borders), Position::ORIGIN);
        }
    }

    #[test]
    fn test_unbounded_range_yields_zero() {
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(below(&mut rng, f32::INFINITY), 0.0);
        assert_eq!(below(&mut rng, f32::NAN), 0.0);
        assert_eq!(below(&mut rng, -5.0), 0.0);
    }

    #[test]
    fn test_infinite_canvas_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(9);
        let borders = Borders::compute(Size::new(f32::INFINITY, 400.0), LABEL_SIZE);
        for _ in 0..100 {
            let target = pick_target(&mut rng, borders);
            assert!(target.x == 0.0 || target.x == f32::INFINITY);
            assert!(target.y.is_finite());
        }
    }
}
