//! # Boggle
//!
//! A single-player Boggle simulator: sixteen lettered dice, a word list, and
//! the rules for tracing words across the 4x4 board.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;

pub use dictionary::Dictionary;
pub use error::{BoggleError, Result};
pub use game::{Boggle, Die, GameService, PathValidator, Session, SessionState, Verdict};
pub use models::{DiceSnapshot, Position};
