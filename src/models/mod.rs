pub mod game;

pub use game::{DiceSnapshot, Position, BOARD_SIZE, NUMBER_OF_DICE};
