use super::*;
use std::fmt::{Display, Formatter};

#[derive(Debug, Error)]
#[must_use]
pub struct BuilderError(pub Box<Builder>, pub &'static str);

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "snake builder error: {}", self.1)?;
        write!(f, "builder: {:?}", self.0)
    }
}

#[derive(Default, Clone, Debug)]
pub struct Builder {
    pub pos: Option<Point>,
    pub dir: Option<Dir>,
    pub len: Option<usize>,
    pub size: Option<i32>,
}

impl Builder {
    #[inline(always)]
    #[must_use]
    pub fn pos(mut self, value: Point) -> Self {
        self.pos = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn dir(mut self, value: Dir) -> Self {
        self.dir = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn len(mut self, value: usize) -> Self {
        self.len = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn size(mut self, value: i32) -> Self {
        self.size = Some(value);
        self
    }

    /// Head at `pos`, the remaining `len - 1` segments grown coincident
    /// with the tail. The chain stays stacked until moves reveal it one
    /// cell at a time.
    pub fn build(&self) -> Result<Snake, BuilderError> {
        let pos = self
            .pos
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `pos`"))?;
        let len = self
            .len
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `len`"))?;
        let size = self
            .size
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `size`"))?;
        let dir = self.dir.unwrap_or(Dir::North);

        if len == 0 {
            return Err(BuilderError(Box::new(self.clone()), "`len` must be at least 1"));
        }
        if size <= 0 {
            return Err(BuilderError(Box::new(self.clone()), "`size` must be positive"));
        }

        let mut snake = Snake {
            segments: vec![Entity::new(pos, size)],
            dir,
            dir_grace: false,
            init_len: len,
            init_dir: dir,
        };
        snake.grow(len - 1);

        Ok(snake)
    }
}

#[test]
fn test_zero_len_is_a_configuration_error() {
    let result = Builder::default()
        .pos(Point::new(0, 0))
        .len(0)
        .size(30)
        .build();

    assert!(result.is_err());
}

#[test]
fn test_missing_field() {
    let result = Builder::default().len(3).size(30).build();
    assert!(result.is_err());
}

#[test]
fn test_build_stacks_chain() {
    let snake = Builder::default()
        .pos(Point::new(90, 120))
        .dir(Dir::East)
        .len(4)
        .size(30)
        .build()
        .unwrap();

    assert_eq!(snake.len(), 4);
    assert_eq!(snake.dir(), Dir::East);
    for segment in snake.segments() {
        assert_eq!(segment.pos, Point::new(90, 120));
    }
}
