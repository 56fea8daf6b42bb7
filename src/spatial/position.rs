//! Immutable grid coordinates and the lattice step geometry
//!
//! The four directional constructors encode the spacing that makes adjacent
//! plus shapes interlock without overlapping: (±1, ±2) multiples of the size
//! factor walk within a column, (±2, ∓1) multiples walk across columns.
//! The multipliers are load-bearing and must not be tuned.

/// An immutable 2D integer coordinate
///
/// Positions carry no bounds restriction; validity is checked only where a
/// tile is written to the grid or where lattice expansion tests termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column coordinate
    pub x: i32,
    /// Row coordinate
    pub y: i32,
}

impl Position {
    /// Create a position at the given coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a new position offset by (dx, dy)
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Position of the next plus up and to the right within the same column
    pub const fn up_right(self, size: i32) -> Self {
        self.shift(size, size * 2)
    }

    /// Position of the next plus down and to the left within the same column
    pub const fn down_left(self, size: i32) -> Self {
        self.shift(-size, -size * 2)
    }

    /// Position of the seed plus in the neighboring column to the right
    pub const fn down_right(self, size: i32) -> Self {
        self.shift(size * 2, -size)
    }

    /// Position of the seed plus in the neighboring column to the left
    pub const fn up_left(self, size: i32) -> Self {
        self.shift(-(size * 2), size)
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn shift_is_pure_translation() {
        let p = Position::new(3, -7);
        assert_eq!(p.shift(2, 5), Position::new(5, -2));
        // Receiver is untouched
        assert_eq!(p, Position::new(3, -7));
    }

    #[test]
    fn directional_steps_use_fixed_multiples() {
        let p = Position::new(10, 10);
        assert_eq!(p.up_right(3), Position::new(13, 16));
        assert_eq!(p.down_left(3), Position::new(7, 4));
        assert_eq!(p.down_right(3), Position::new(16, 7));
        assert_eq!(p.up_left(3), Position::new(4, 13));
    }

    #[test]
    fn opposite_steps_cancel() {
        let p = Position::new(-4, 9);
        assert_eq!(p.up_right(2).down_left(2), p);
        assert_eq!(p.up_left(5).down_right(5), p);
    }
}
