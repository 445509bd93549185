use crate::basic::{Entity, Point};
use crate::game::palette::{Color, BAIT_COLOR};

pub mod place;

/// The single consumable on the board. Position is all the behavior it
/// has, the color is render data the host paints with.
pub struct Bait {
    pub entity: Entity,
    pub color: Color,
}

impl Bait {
    pub fn new(pos: Point, size: i32) -> Self {
        Self {
            entity: Entity::new(pos, size),
            color: *BAIT_COLOR,
        }
    }
}
