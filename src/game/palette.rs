use lazy_static::lazy_static;

/// 8-bit RGB triple, handed to the render collaborator as-is
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

lazy_static! {
    pub static ref SNAKE_HEAD_COLOR: Color = Color::from_rgb(255, 0, 0);
    pub static ref SNAKE_BODY_COLOR: Color = Color::from_rgb(128, 128, 128);
    pub static ref BAIT_COLOR: Color = Color::from_rgb(0, 255, 0);
}

/// Fixed colors the host paints the snake with, red head over a grey body
pub struct Palette {
    pub snake_head: Color,
    pub snake_body: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            snake_head: *SNAKE_HEAD_COLOR,
            snake_body: *SNAKE_BODY_COLOR,
        }
    }
}
