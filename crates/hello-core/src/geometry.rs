//! Positions, sizes and the bounce borders of the logical canvas.

/// A point on the logical canvas. The origin is the top-left corner and y
/// grows downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Position = Position::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `to`; `t` is expected in `0.0..=1.0`.
    pub fn lerp(self, to: Position, t: f32) -> Position {
        Position {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

/// Width and height in logical canvas units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Largest x and y at which a label's top-left corner may sit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Borders {
    pub right: f32,
    pub bottom: f32,
}

impl Borders {
    /// Borders for labels of `item` size on a canvas of `canvas` size.
    ///
    /// The bottom border keeps a margin of three label heights.
    pub fn compute(canvas: Size, item: Size) -> Self {
        Self {
            right: (canvas.width - item.width).max(0.0),
            bottom: (canvas.height - 3.0 * item.height).max(0.0),
        }
    }

    /// Whether `pos` sits on or beyond any of the four borders.
    pub fn touches(&self, pos: Position) -> bool {
        pos.x <= 0.0 || pos.x >= self.right || pos.y <= 0.0 || pos.y >= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borders_default_canvas() {
        let borders = Borders::compute(Size::new(400.0, 400.0), Size::new(90.0, 20.0));
        assert_eq!(borders.right, 310.0);
        assert_eq!(borders.bottom, 340.0);
    }

    #[test]
    fn test_borders_clamp_small_canvas() {
        let borders = Borders::compute(Size::new(50.0, 50.0), Size::new(90.0, 20.0));
        assert_eq!(borders.right, 0.0);
        assert_eq!(borders.bottom, 0.0);
    }

    #[test]
    fn test_touches() {
        let borders = Borders { right: 310.0, bottom: 340.0 };
        assert!(borders.touches(Position::new(0.0, 150.0)));
        assert!(borders.touches(Position::new(310.0, 150.0)));
        assert!(borders.touches(Position::new(150.0, 0.0)));
        assert!(borders.touches(Position::new(150.0, 345.0)));
        assert!(borders.touches(Position::new(-3.0, 150.0)));
        assert!(!borders.touches(Position::new(150.0, 150.0)));
    }

    #[test]
    fn test_lerp() {
        let from = Position::new(0.0, 100.0);
        let to = Position::new(100.0, 0.0);
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 0.5), Position::new(50.0, 50.0));
        assert_eq!(from.lerp(to, 1.0), to);
    }
}
