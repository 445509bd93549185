use rand::Rng;
use tracing::warn;

use crate::basic::{Entity, Point, Rect};
use crate::error::{ErrorType, Result};
use crate::snake::Snake;

/// Upper bound on rejection-sampling attempts. Running out means the
/// board is saturated, a design error rather than a runtime condition.
pub const MAX_ATTEMPTS: usize = 1000;

/// Find a grid-aligned position whose full box lies inside `board` and
/// overlaps no snake segment. Draws uniform points in `board` (both
/// edges inclusive) and snaps them down to the cell grid until one
/// satisfies both constraints.
pub fn place_bait(
    board: Rect,
    snake: &Snake,
    cell_size: i32,
    rng: &mut impl Rng,
) -> Result<Point> {
    for _ in 0..MAX_ATTEMPTS {
        let pos = Point {
            x: rng.gen_range(board.left()..=board.right()),
            y: rng.gen_range(board.top()..=board.bottom()),
        }
        .snap_down(cell_size);

        let candidate = Entity::new(pos, cell_size);
        if !board.contains_rect(candidate.hit_box()) {
            continue;
        }
        if snake
            .segments()
            .iter()
            .any(|segment| candidate.is_collided(*segment))
        {
            continue;
        }

        return Ok(pos);
    }

    warn!(attempts = MAX_ATTEMPTS, "no free cell for bait, board is saturated");
    Err(ErrorType::BaitPlacement { attempts: MAX_ATTEMPTS }.into())
}

#[test]
fn test_placement_postconditions() {
    use crate::basic::Dir;
    use crate::snake::Builder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let board = Rect::new(0, 0, 300, 300);
    let snake = Builder::default()
        .pos(Point::new(120, 120))
        .dir(Dir::East)
        .len(3)
        .size(30)
        .build()
        .unwrap();
    let mut rng = StdRng::seed_from_u64(12);

    for _ in 0..100 {
        let pos = place_bait(board, &snake, 30, &mut rng).unwrap();
        let bait = Entity::new(pos, 30);

        assert_eq!(pos.snap_down(30), pos);
        assert!(board.contains_rect(bait.hit_box()));
        for segment in snake.segments() {
            assert!(!bait.is_collided(*segment));
        }
    }
}

#[test]
fn test_saturated_board_exhausts_retries() {
    use crate::basic::Dir;
    use crate::snake::Builder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // walk a 4-segment snake over every cell of a 2x2 board
    let board = Rect::new(0, 0, 60, 60);
    let mut snake = Builder::default()
        .pos(Point::new(0, 0))
        .dir(Dir::East)
        .len(4)
        .size(30)
        .build()
        .unwrap();
    snake.step();
    snake.request_dir(Dir::South);
    snake.step();
    snake.request_dir(Dir::West);
    snake.step();

    let mut rng = StdRng::seed_from_u64(12);
    let err = place_bait(board, &snake, 30, &mut rng).unwrap_err();
    assert!(matches!(
        err.error_type(),
        ErrorType::BaitPlacement { attempts: MAX_ATTEMPTS }
    ));
}
