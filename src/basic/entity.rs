use crate::basic::{Dir, Point, Rect};

/// Shared geometric state for everything that occupies board space.
/// Snake segments are entities, `Snake` and `Bait` hold them by
/// composition, so hit-box and collision logic lives in one place.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Entity {
    pub pos: Point,
    pub size: i32,
}

impl Entity {
    pub fn new(pos: Point, size: i32) -> Self {
        Self { pos, size }
    }

    pub fn hit_box(self) -> Rect {
        Rect {
            pos: self.pos,
            width: self.size,
            height: self.size,
        }
    }

    pub fn is_collided(self, other: Entity) -> bool {
        self.hit_box().intersects(other.hit_box())
    }

    /// Position one cell away in `dir`
    pub fn next_pos(self, dir: Dir) -> Point {
        self.pos + dir.vector() * self.size
    }

    /// Zero position and size
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[test]
fn test_collision() {
    let e = Entity::new(Point::new(100, 100), 30);

    // coincident and partially overlapping entities collide
    assert!(e.is_collided(e));
    assert!(e.is_collided(Entity::new(Point::new(115, 100), 30)));

    // cell neighbors only touch, they don't collide
    assert!(!e.is_collided(Entity::new(Point::new(130, 100), 30)));
    assert!(!e.is_collided(Entity::new(Point::new(100, 70), 30)));

    assert!(!e.is_collided(Entity::new(Point::new(200, 200), 30)));
}

#[test]
fn test_next_pos() {
    use crate::basic::Dir::*;

    let e = Entity::new(Point::new(100, 100), 30);

    let test_moves = [
        (North, Point::new(100, 70)),
        (East, Point::new(130, 100)),
        (South, Point::new(100, 130)),
        (West, Point::new(70, 100)),
    ];

    for &(dir, expected) in &test_moves {
        assert_eq!(e.next_pos(dir), expected);
    }
}

#[test]
fn test_reset() {
    let mut e = Entity::new(Point::new(100, 100), 30);
    e.reset();
    assert_eq!(e, Entity::default());
}
