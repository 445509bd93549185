use std::time::Duration;

use static_assertions::const_assert;

pub const DEFAULT_CELL_SIZE: i32 = 30;
pub const DEFAULT_INITIAL_SNAKE_LEN: usize = 3;

const_assert!(DEFAULT_CELL_SIZE > 0);
const_assert!(DEFAULT_INITIAL_SNAKE_LEN >= 1);

/// Per-session constants. `tick_interval` is informational, the host owns
/// the timer and the core only ever advances inside `Game::tick`.
#[derive(Copy, Clone, Debug)]
pub struct Prefs {
    pub cell_size: i32,
    pub initial_snake_len: usize,
    pub tick_interval: Duration,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            initial_snake_len: DEFAULT_INITIAL_SNAKE_LEN,
            tick_interval: Duration::from_millis(100),
        }
    }
}

// builder
impl Prefs {
    pub fn cell_size(mut self, cell_size: i32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn initial_snake_len(mut self, initial_snake_len: usize) -> Self {
        self.initial_snake_len = initial_snake_len;
        self
    }

    pub fn tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }
}
