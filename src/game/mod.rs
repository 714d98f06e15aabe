// Game engine modules

pub mod board;
pub mod die;
pub mod session;
pub mod validator;

pub use board::{Boggle, Verdict, LETTERS, MIN_WORD_LENGTH};
pub use die::Die;
pub use session::{Session, SessionState};
pub use validator::PathValidator;

use crate::models::DiceSnapshot;

/// What a front-end needs from the game: shake the board, look at it, check words
pub trait GameService {
    /// Shuffle and roll every die, returning the new board
    fn roll(&mut self) -> DiceSnapshot;

    fn validate(&self, word: &str) -> bool;

    fn snapshot(&self) -> DiceSnapshot;
}
