use std::ops::Mul;

/// Integer position in board pixel coordinates, y grows downward
#[derive(
    Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Add, AddAssign, Sub, SubAssign, Neg,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Mul<i32> for Point {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snap both coordinates down to the nearest multiple of `cell`
    #[must_use]
    pub fn snap_down(self, cell: i32) -> Self {
        Self {
            x: self.x - self.x.rem_euclid(cell),
            y: self.y - self.y.rem_euclid(cell),
        }
    }
}

#[test]
fn test_snap_down() {
    let test_snap = [
        ((95, 60), (90, 60)),
        ((29, 31), (0, 30)),
        ((150, 145), (150, 120)),
        ((-1, 0), (-30, 0)),
    ];

    for &((x, y), (sx, sy)) in &test_snap {
        assert_eq!(Point::new(x, y).snap_down(30), Point::new(sx, sy));
    }
}
