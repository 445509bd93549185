use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};
use tracing::info;

pub use palette::{Color, Palette};
pub use prefs::Prefs;

use crate::bait::place::place_bait;
use crate::bait::Bait;
use crate::basic::{Dir, Entity, Point, Rect};
use crate::error::{Error, ErrorConversion, ErrorType, Result};
use crate::snake::{self, Snake};

pub mod palette;
pub mod prefs;

/// Top-level screens. `None` is a sentinel no running game is ever in,
/// finding it mid-dispatch means the state machine was corrupted.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    None,
    Landing,
    GamePlay,
    GameOver,
    Ranking,
}

/// Player intents, already decoded from whatever device the host reads.
/// Up/Down/Left/Right arrive as North/South/West/East.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Input {
    Dir(Dir),
    Confirm,
    Cancel,
}

/// Board center snapped down to the cell grid
fn spawn_pos(board: Rect, cell_size: i32) -> Point {
    board.center().snap_down(cell_size)
}

pub struct Game<R: Rng = ThreadRng> {
    board: Rect,
    prefs: Prefs,
    palette: Palette,
    snake: Snake,
    bait: Bait,
    state: GameState,
    paused: bool,
    needs_redraw: bool,
    score: u32,
    rng: R,
}

impl Game<ThreadRng> {
    pub fn new(board: Rect, prefs: Prefs) -> Result<Self> {
        Self::with_rng(board, prefs, thread_rng())
    }
}

impl<R: Rng> Game<R> {
    /// `rng` is injected so bait placement is reproducible under test
    pub fn with_rng(board: Rect, prefs: Prefs, mut rng: R) -> Result<Self> {
        let snake = snake::Builder::default()
            .pos(spawn_pos(board, prefs.cell_size))
            .dir(Dir::North)
            .len(prefs.initial_snake_len)
            .size(prefs.cell_size)
            .build()
            .map_err(Error::from)
            .with_trace_step("Game::with_rng")?;

        let bait_pos = place_bait(board, &snake, prefs.cell_size, &mut rng)
            .with_trace_step("Game::with_rng")?;

        Ok(Self {
            board,
            prefs,
            palette: Palette::default(),
            snake,
            bait: Bait::new(bait_pos, prefs.cell_size),
            state: GameState::Landing,
            paused: false,
            needs_redraw: true,
            score: 0,
            rng,
        })
    }

    /// Fresh session landing in `dst`: snake back at the snapped board
    /// center, new bait, score cleared, pause lifted
    fn restart(&mut self, dst: GameState) -> Result {
        self.state = dst;
        self.snake.reset(spawn_pos(self.board, self.prefs.cell_size));
        self.bait.entity.pos =
            place_bait(self.board, &self.snake, self.prefs.cell_size, &mut self.rng)
                .with_trace_step("Game::restart")?;
        self.score = 0;
        self.paused = false;
        self.needs_redraw = true;
        info!(state = ?dst, "session restarted");
        Ok(())
    }

    /// Advance the simulation one step. Landing, GameOver and Ranking
    /// don't simulate, they hold until the player acts.
    pub fn tick(&mut self) -> Result {
        match self.state {
            GameState::None => Err(ErrorType::InvalidGameState(self.state).into()),
            GameState::Landing | GameState::GameOver | GameState::Ranking => Ok(()),
            GameState::GamePlay => self.update_gameplay().with_trace_step("Game::tick"),
        }
    }

    fn update_gameplay(&mut self) -> Result {
        if self.paused {
            self.needs_redraw = true;
            return Ok(());
        }

        self.snake.step();

        if self.is_game_over() {
            self.state = GameState::GameOver;
            self.needs_redraw = true;
            return Ok(());
        }

        if self.snake.head().is_collided(self.bait.entity) {
            self.snake.grow(1);
            self.score += 1;
            self.bait.entity.pos =
                place_bait(self.board, &self.snake, self.prefs.cell_size, &mut self.rng)?;
        }

        self.needs_redraw = true;
        Ok(())
    }

    /// Dead by self-collision, or by facing off the board: the head's box
    /// one cell ahead must still lie fully inside the board. One rule for
    /// all four directions.
    fn is_game_over(&self) -> bool {
        if self.snake.head_collides_with_body() {
            return true;
        }

        let next_head = Entity::new(self.snake.next_head_pos(), self.prefs.cell_size);
        !self.board.contains_rect(next_head.hit_box())
    }

    /// Walk the transition table for one player intent. Directional
    /// intents only steer during unpaused play.
    pub fn handle_input(&mut self, input: Input) -> Result {
        match input {
            Input::Dir(dir) => {
                if self.state == GameState::GamePlay && !self.paused {
                    self.snake.request_dir(dir);
                }
                Ok(())
            }
            Input::Confirm => self.handle_confirm().with_trace_step("Game::handle_input"),
            Input::Cancel => self.handle_cancel().with_trace_step("Game::handle_input"),
        }
    }

    fn handle_confirm(&mut self) -> Result {
        match self.state {
            GameState::None => return Err(ErrorType::InvalidGameState(self.state).into()),
            GameState::Landing => self.state = GameState::GamePlay,
            GameState::GamePlay => self.paused = !self.paused,
            GameState::GameOver => self.state = GameState::Ranking,
            GameState::Ranking => self.restart(GameState::Landing)?,
        }
        self.needs_redraw = true;
        Ok(())
    }

    fn handle_cancel(&mut self) -> Result {
        if self.state == GameState::GameOver {
            self.restart(GameState::GamePlay)?;
        }
        Ok(())
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Baits eaten this session, backs the ranking screen
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> Rect {
        self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn bait(&self) -> &Bait {
        &self.bait
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn prefs(&self) -> Prefs {
        self.prefs
    }

    /// True after every tick and every accepted transition, until the
    /// host acknowledges with `clear_redraw`
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }
}

#[cfg(test)]
fn test_game() -> Game<rand::rngs::StdRng> {
    use rand::SeedableRng;

    // 10x10 cells, spawn dead center at (150, 150)
    let mut game = Game::with_rng(
        Rect::new(0, 0, 300, 300),
        Prefs::default(),
        rand::rngs::StdRng::seed_from_u64(12),
    )
    .unwrap();

    // park the bait out of the way, tests that care about it move it back
    game.bait.entity.pos = Point::new(270, 270);
    game
}

#[test]
fn test_landing_confirm_starts_play() {
    let mut game = test_game();
    assert_eq!(game.state(), GameState::Landing);

    game.handle_input(Input::Confirm).unwrap();
    assert_eq!(game.state(), GameState::GamePlay);
    assert!(game.needs_redraw());
}

#[test]
fn test_tick_is_a_noop_outside_gameplay() {
    let mut game = test_game();
    let head = game.snake().head().pos;

    game.tick().unwrap();
    assert_eq!(game.state(), GameState::Landing);
    assert_eq!(game.snake().head().pos, head);
}

#[test]
fn test_tick_moves_snake_one_cell() {
    let mut game = test_game();
    game.handle_input(Input::Confirm).unwrap();
    game.clear_redraw();

    game.tick().unwrap();
    assert_eq!(game.snake().head().pos, Point::new(150, 120));
    assert!(game.needs_redraw());
}

#[test]
fn test_confirm_toggles_pause_and_paused_ticks_freeze() {
    let mut game = test_game();
    game.handle_input(Input::Confirm).unwrap();

    game.handle_input(Input::Confirm).unwrap();
    assert_eq!(game.state(), GameState::GamePlay);
    assert!(game.paused());

    let head = game.snake().head().pos;
    game.clear_redraw();
    game.tick().unwrap();
    assert_eq!(game.snake().head().pos, head);
    assert!(game.needs_redraw());

    game.handle_input(Input::Confirm).unwrap();
    assert!(!game.paused());
}

#[test]
fn test_eating_grows_and_replaces_bait() {
    let mut game = test_game();
    game.handle_input(Input::Confirm).unwrap();

    // directly in the head's path
    game.bait.entity.pos = Point::new(150, 120);
    game.tick().unwrap();

    assert_eq!(game.snake().len(), 4);
    assert_eq!(game.score(), 1);

    let bait = game.bait().entity;
    assert_ne!(bait.pos, Point::new(150, 120));
    assert!(game.board().contains_rect(bait.hit_box()));
    for segment in game.snake().segments() {
        assert!(!bait.is_collided(*segment));
    }
}

#[test]
fn test_boundary_game_over() {
    let mut game = test_game();
    game.handle_input(Input::Confirm).unwrap();

    // head starts at y = 150 going north; y = 0 is the last row with an
    // in-board next position, so the fifth tick is fatal
    for _ in 0..4 {
        game.tick().unwrap();
        assert_eq!(game.state(), GameState::GamePlay);
    }
    assert_eq!(game.snake().head().pos, Point::new(150, 30));

    game.tick().unwrap();
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.snake().head().pos, Point::new(150, 0));
}

#[test]
fn test_self_collision_game_over() {
    let mut game = test_game();
    game.handle_input(Input::Confirm).unwrap();
    game.snake.grow(2); // length 5, enough to close a loop

    game.tick().unwrap();
    game.handle_input(Input::Dir(Dir::East)).unwrap();
    game.tick().unwrap();
    game.handle_input(Input::Dir(Dir::South)).unwrap();
    game.tick().unwrap();
    assert_eq!(game.state(), GameState::GamePlay);

    // west closes the square onto the segment still at the spawn cell
    game.handle_input(Input::Dir(Dir::West)).unwrap();
    game.tick().unwrap();
    assert_eq!(game.state(), GameState::GameOver);
}

#[test]
fn test_game_over_confirm_walks_to_ranking_then_landing() {
    let mut game = test_game();
    game.handle_input(Input::Confirm).unwrap();
    game.bait.entity.pos = Point::new(150, 120);
    game.tick().unwrap(); // eat
    assert_eq!(game.score(), 1);

    // park the new bait and ride north into the wall
    game.bait.entity.pos = Point::new(270, 270);
    for _ in 0..5 {
        game.tick().unwrap();
    }
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.score(), 1);

    game.handle_input(Input::Confirm).unwrap();
    assert_eq!(game.state(), GameState::Ranking);
    assert_eq!(game.score(), 1);

    // leaving the ranking screen restarts the session
    game.handle_input(Input::Confirm).unwrap();
    assert_eq!(game.state(), GameState::Landing);
    assert_eq!(game.score(), 0);
    assert_eq!(game.snake().len(), 3);
    assert_eq!(game.snake().head().pos, Point::new(150, 150));
}

#[test]
fn test_game_over_cancel_restarts_play() {
    let mut game = test_game();
    game.handle_input(Input::Confirm).unwrap();
    for _ in 0..5 {
        game.tick().unwrap();
    }
    assert_eq!(game.state(), GameState::GameOver);

    game.handle_input(Input::Cancel).unwrap();
    assert_eq!(game.state(), GameState::GamePlay);
    assert!(!game.paused());
    assert_eq!(game.snake().len(), 3);
    assert_eq!(game.snake().head().pos, Point::new(150, 150));
    assert_eq!(game.snake().dir(), Dir::North);
}

#[test]
fn test_direction_input_ignored_outside_play() {
    let mut game = test_game();

    game.handle_input(Input::Dir(Dir::East)).unwrap();
    assert_eq!(game.snake().dir(), Dir::North);

    game.handle_input(Input::Confirm).unwrap();
    game.handle_input(Input::Confirm).unwrap(); // pause
    game.handle_input(Input::Dir(Dir::East)).unwrap();
    assert_eq!(game.snake().dir(), Dir::North);
}

#[test]
fn test_none_state_is_an_invariant_violation() {
    let mut game = test_game();
    game.state = GameState::None;

    let err = game.tick().unwrap_err();
    assert!(matches!(
        err.error_type(),
        ErrorType::InvalidGameState(GameState::None)
    ));

    let err = game.handle_input(Input::Confirm).unwrap_err();
    assert!(matches!(
        err.error_type(),
        ErrorType::InvalidGameState(GameState::None)
    ));
}

#[test]
fn test_spawn_snaps_to_grid() {
    use rand::SeedableRng;

    // odd board dimensions, center (155, 145) snaps down to (150, 120)
    let game = Game::with_rng(
        Rect::new(0, 0, 310, 290),
        Prefs::default(),
        rand::rngs::StdRng::seed_from_u64(12),
    )
    .unwrap();

    assert_eq!(game.snake().head().pos, Point::new(150, 120));
}

#[test]
fn test_zero_initial_length_fails_construction() {
    use rand::SeedableRng;

    let result = Game::with_rng(
        Rect::new(0, 0, 300, 300),
        Prefs::default().initial_snake_len(0),
        rand::rngs::StdRng::seed_from_u64(12),
    );

    assert!(matches!(
        result.unwrap_err().error_type(),
        ErrorType::SnakeBuilder(_)
    ));
}
