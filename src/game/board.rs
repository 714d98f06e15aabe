use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    dictionary::Dictionary,
    game::{die::Die, validator::PathValidator, GameService},
    models::{DiceSnapshot, Position, NUMBER_OF_DICE},
};

/// Shortest string that counts as a Boggle word
pub const MIN_WORD_LENGTH: usize = 3;

/// Letters on the 16 standard Boggle dice, one die per row
pub const LETTERS: [[&str; 6]; NUMBER_OF_DICE] = [
    ["A", "A", "E", "E", "G", "N"],
    ["E", "L", "R", "T", "T", "Y"],
    ["W", "A", "O", "O", "T", "T"],
    ["A", "B", "B", "J", "O", "O"],
    ["E", "H", "R", "T", "V", "W"],
    ["C", "I", "M", "O", "T", "U"],
    ["D", "I", "S", "T", "T", "Y"],
    ["E", "I", "O", "S", "S", "T"],
    ["Y", "D", "E", "L", "R", "V"],
    ["A", "C", "H", "O", "P", "S"],
    ["U", "H", "I", "M", "N", "QU"],
    ["E", "E", "I", "N", "S", "U"],
    ["E", "E", "G", "H", "N", "W"],
    ["A", "F", "F", "K", "P", "S"],
    ["H", "L", "N", "N", "R", "Z"],
    ["X", "D", "E", "I", "L", "R"],
];

/// Outcome of checking a word traced across the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    InvalidPath,
    TooShort,
    NotInDictionary,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Verdict::Accepted
    }
}

/// A game of Boggle: the 16 dice and the dictionary words are checked against
pub struct Boggle {
    dice: Vec<Die>,
    dictionary: Dictionary,
    rng: StdRng,
}

impl Boggle {
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_rng(dictionary, StdRng::from_os_rng())
    }

    /// Game whose shuffles and rolls are reproducible for a given seed
    pub fn with_seed(dictionary: Dictionary, seed: u64) -> Self {
        Self::with_rng(dictionary, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dictionary: Dictionary, rng: StdRng) -> Self {
        let dice = LETTERS.iter().map(Die::six_sided).collect();

        Self {
            dice,
            dictionary,
            rng,
        }
    }

    /// Independent copies of the dice in board order
    pub fn dice(&self) -> Vec<Die> {
        self.dice.clone()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Shake the board: shuffle the dice, then roll each one
    pub fn shuffle_and_roll(&mut self) {
        self.dice.shuffle(&mut self.rng);
        for die in &mut self.dice {
            die.roll(&mut self.rng);
        }
        tracing::debug!("Rolled board: {}", self.snapshot().faces.join(" "));
    }

    /// At least three letters long and present in the dictionary
    pub fn is_a_boggle_word(&self, word: &str) -> bool {
        word.chars().count() >= MIN_WORD_LENGTH && self.dictionary.look_up(word)
    }

    /// Concatenated labels of the dice along `path`; `None` if a position is off the board
    pub fn word_at(&self, path: &[Position]) -> Option<String> {
        path.iter()
            .map(|pos| {
                pos.in_bounds()
                    .then(|| self.dice[pos.index()].value())
            })
            .collect()
    }

    /// Check a word traced across the board, including the path itself
    pub fn check_submission(&self, path: &[Position]) -> Verdict {
        if !PathValidator::is_valid_path(path) {
            return Verdict::InvalidPath;
        }
        let Some(word) = self.word_at(path) else {
            return Verdict::InvalidPath;
        };

        let verdict = if word.chars().count() < MIN_WORD_LENGTH {
            Verdict::TooShort
        } else if !self.dictionary.look_up(&word) {
            Verdict::NotInDictionary
        } else {
            Verdict::Accepted
        };

        tracing::debug!("Checked {:?}: {:?}", word, verdict);
        verdict
    }
}

impl GameService for Boggle {
    fn roll(&mut self) -> DiceSnapshot {
        self.shuffle_and_roll();
        self.snapshot()
    }

    fn validate(&self, word: &str) -> bool {
        self.is_a_boggle_word(word)
    }

    fn snapshot(&self) -> DiceSnapshot {
        DiceSnapshot {
            faces: self.dice.iter().map(|die| die.value().to_string()).collect(),
        }
    }
}
