//! Grid coordinates and movement deltas.

use core::ops::Add;

/// A 2-D integer coordinate (row, col).
///
/// Addition is component-wise and produces a new value; there is no bounds
/// checking here — bounds are a map concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub row: i32,
    pub col: i32,
}

impl Vec2 {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Euclidean distance to another coordinate.
    pub fn distance_to(self, other: Vec2) -> f64 {
        let dr = (self.row - other.row) as f64;
        let dc = (self.col - other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl From<[i32; 2]> for Vec2 {
    fn from(pair: [i32; 2]) -> Self {
        Vec2::new(pair[0], pair[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_componentwise() {
        assert_eq!(Vec2::new(1, 2) + Vec2::new(3, -5), Vec2::new(4, -3));
    }

    #[test]
    fn test_add_zero_is_identity() {
        let v = Vec2::new(7, -9);
        assert_eq!(v + Vec2::default(), v);
    }

    #[test]
    fn test_distance() {
        assert_eq!(Vec2::new(2, 2).distance_to(Vec2::new(2, 3)), 1.0);
        assert_eq!(Vec2::new(0, 0).distance_to(Vec2::new(3, 4)), 5.0);
    }

    proptest! {
        #[test]
        fn add_commutes(a in -1000i32..1000, b in -1000i32..1000,
                        c in -1000i32..1000, d in -1000i32..1000) {
            let x = Vec2::new(a, b);
            let y = Vec2::new(c, d);
            prop_assert_eq!(x + y, y + x);
        }

        #[test]
        fn add_associates(a in -1000i32..1000, b in -1000i32..1000,
                          c in -1000i32..1000, d in -1000i32..1000,
                          e in -1000i32..1000, f in -1000i32..1000) {
            let x = Vec2::new(a, b);
            let y = Vec2::new(c, d);
            let z = Vec2::new(e, f);
            prop_assert_eq!((x + y) + z, x + (y + z));
        }
    }
}
