use std::ops::Neg;

use crate::basic::Point;
use Dir::*;

// defined in clockwise order starting at North
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Dir {
    North,
    East,
    South,
    West,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            North => South,
            East => West,
            South => North,
            West => East,
        }
    }
}

impl Dir {
    /// Unit vector in screen coordinates (y grows downward)
    pub fn vector(self) -> Point {
        match self {
            North => Point { x: 0, y: -1 },
            East => Point { x: 1, y: 0 },
            South => Point { x: 0, y: 1 },
            West => Point { x: -1, y: 0 },
        }
    }

    // clockwise order starting from North
    pub fn iter() -> impl Iterator<Item = Self> {
        [North, East, South, West].iter().copied()
    }
}

#[test]
fn test_dir_neg() {
    let test_opposites = [(North, South), (East, West), (South, North), (West, East)];

    for &(dir, opposite) in &test_opposites {
        assert_eq!(-dir, opposite);
        assert_eq!(-(-dir), dir);
    }
}

#[test]
fn test_dir_vectors_cancel() {
    for dir in Dir::iter() {
        assert_eq!(dir.vector() + (-dir).vector(), Point::new(0, 0));
    }
}
