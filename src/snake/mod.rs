use tracing::debug;

pub use builder::{Builder, BuilderError};

use crate::basic::{Dir, Entity, Point};

pub mod builder;

pub struct Snake {
    /// Segment 0 is the head. Hosts draw the body first and the head
    /// last, so the head stays on top wherever segments overlap.
    segments: Vec<Entity>,
    /// Direction the snake is currently going
    dir: Dir,
    /// Set while an accepted direction change is waiting to be applied,
    /// cleared by the next completed `step`. At most one turn can
    /// register between two ticks.
    dir_grace: bool,
    /// Chain length restored by `reset`
    init_len: usize,
    /// Heading restored by `reset`
    init_dir: Dir,
}

impl Snake {
    pub fn head(&self) -> &Entity {
        &self.segments[0]
    }

    pub fn tail(&self) -> &Entity {
        &self.segments[self.segments.len() - 1]
    }

    /// Ordered head-first
    pub fn segments(&self) -> &[Entity] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    /// Take `dir` as the heading for the next step. At most one change
    /// registers per step and a 180-degree turn is never accepted.
    /// Rejected requests are dropped, this is debounce, not a failure.
    pub fn request_dir(&mut self, dir: Dir) {
        if self.dir_grace {
            debug!(?dir, "direction change dropped, already turned this tick");
            return;
        }
        if dir == -self.dir {
            debug!(from = ?self.dir, to = ?dir, "refusing 180-degree turn");
            return;
        }

        self.dir = dir;
        self.dir_grace = true;
    }

    /// The body-follow step: every segment takes the position its neighbor
    /// toward the head held before this step, then the head advances one
    /// cell. Tail-to-head order keeps the chain intact, head-first would
    /// smear the head's new position down the body.
    pub fn step(&mut self) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i].pos = self.segments[i - 1].pos;
        }
        self.segments[0].pos = self.segments[0].next_pos(self.dir);

        self.dir_grace = false;
    }

    /// Append `n` segments at the tail's current position. They sit
    /// stacked on the tail until successive steps pull them apart.
    pub fn grow(&mut self, n: usize) {
        let tail = *self.tail();
        for _ in 0..n {
            self.segments.push(tail);
        }
    }

    pub fn head_collides_with_body(&self) -> bool {
        let head = *self.head();
        self.segments[1..].iter().any(|segment| head.is_collided(*segment))
    }

    /// Where the head lands if the current heading holds for one more step
    pub fn next_head_pos(&self) -> Point {
        self.head().next_pos(self.dir)
    }

    /// Fresh stacked chain of the initial length at `pos`, initial
    /// heading restored, direction latch re-armed
    pub fn reset(&mut self, pos: Point) {
        let size = self.head().size;
        self.segments.clear();
        self.segments.push(Entity::new(pos, size));
        self.dir = self.init_dir;
        self.dir_grace = false;
        self.grow(self.init_len - 1);
    }
}

#[test]
fn test_body_follow() {
    use itertools::Itertools;

    let mut snake = Builder::default()
        .pos(Point::new(100, 100))
        .dir(Dir::East)
        .len(3)
        .size(30)
        .build()
        .unwrap();

    // fresh chains are stacked, the first step only reveals the head
    snake.step();
    assert_eq!(snake.segments()[0].pos, Point::new(130, 100));
    assert_eq!(snake.segments()[1].pos, Point::new(100, 100));
    assert_eq!(snake.segments()[2].pos, Point::new(100, 100));

    snake.step();
    snake.step();

    // fully revealed chain: one cell between each pair of neighbors
    for (ahead, behind) in snake.segments().iter().tuple_windows() {
        assert_eq!(ahead.pos - behind.pos, Dir::East.vector() * 30);
    }
    assert_eq!(snake.head().pos, Point::new(190, 100));
}

#[test]
fn test_direction_latch() {
    let mut snake = Builder::default()
        .pos(Point::new(100, 100))
        .dir(Dir::North)
        .len(2)
        .size(30)
        .build()
        .unwrap();

    // the exact opposite is rejected outright and doesn't use the latch
    snake.request_dir(Dir::South);
    assert_eq!(snake.dir(), Dir::North);

    snake.request_dir(Dir::East);
    assert_eq!(snake.dir(), Dir::East);

    // second change in the same tick is dropped
    snake.request_dir(Dir::North);
    assert_eq!(snake.dir(), Dir::East);

    // the step re-arms the latch
    snake.step();
    snake.request_dir(Dir::North);
    assert_eq!(snake.dir(), Dir::North);
}

#[test]
fn test_opposite_rejected_even_when_armed() {
    let mut snake = Builder::default()
        .pos(Point::new(100, 100))
        .dir(Dir::North)
        .len(3)
        .size(30)
        .build()
        .unwrap();

    for _ in 0..3 {
        snake.step();
        snake.request_dir(Dir::South);
        assert_eq!(snake.dir(), Dir::North);
    }
}

#[test]
fn test_grow_stacks_on_tail() {
    let mut snake = Builder::default()
        .pos(Point::new(100, 100))
        .dir(Dir::East)
        .len(2)
        .size(30)
        .build()
        .unwrap();

    snake.step();
    snake.step();
    let tail_pos = snake.tail().pos;

    snake.grow(2);
    assert_eq!(snake.len(), 4);
    assert_eq!(snake.segments()[2].pos, tail_pos);
    assert_eq!(snake.segments()[3].pos, tail_pos);
}

#[test]
fn test_reset_restores_initial_chain() {
    let mut snake = Builder::default()
        .pos(Point::new(100, 100))
        .dir(Dir::North)
        .len(3)
        .size(30)
        .build()
        .unwrap();

    snake.step();
    snake.grow(4);
    snake.request_dir(Dir::West);

    snake.reset(Point::new(200, 200));
    assert_eq!(snake.len(), 3);
    assert_eq!(snake.dir(), Dir::North);
    for segment in snake.segments() {
        assert_eq!(segment.pos, Point::new(200, 200));
        assert_eq!(segment.size, 30);
    }
}
