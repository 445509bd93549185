//! Core simulation for a grid-locked snake game.
//!
//! The crate owns locomotion, growth, collision detection, bait placement
//! and the top-level state machine. Windowing, rendering and input decoding
//! live in the host: it calls [`Game::tick`] from a fixed-interval timer,
//! forwards decoded [`Input`] events, and reads the state back through
//! read-only accessors once per frame.

#[macro_use]
extern crate derive_more;

pub mod bait;
pub mod basic;
pub mod error;
pub mod game;
pub mod snake;

pub use crate::error::{Error, Result};
pub use crate::game::{Game, GameState, Input};
