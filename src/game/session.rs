use crate::{
    error::{BoggleError, Result},
    game::{validator::PathValidator, GameService},
    models::{DiceSnapshot, Position, NUMBER_OF_DICE},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No roll yet
    Idle,
    /// Board is rolled and a word may be assembled
    Rolled,
    /// The last assembled word was just checked
    Validated,
}

/// One player's round: the board, the word being traced, and the words
/// submitted so far.
pub struct Session<S: GameService> {
    service: S,
    state: SessionState,
    board: Option<DiceSnapshot>,
    selected: Vec<usize>,
    correct_words: Vec<String>,
    incorrect_words: Vec<String>,
}

impl<S: GameService> Session<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: SessionState::Idle,
            board: None,
            selected: Vec::new(),
            correct_words: Vec::new(),
            incorrect_words: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn board(&self) -> Option<&DiceSnapshot> {
        self.board.as_ref()
    }

    /// Shake the board and start over with empty word lists
    pub fn roll(&mut self) -> &DiceSnapshot {
        let snapshot = self.service.roll();
        self.selected.clear();
        self.correct_words.clear();
        self.incorrect_words.clear();
        self.state = SessionState::Rolled;
        self.board.insert(snapshot)
    }

    /// Add the die at `index` to the word being traced
    pub fn select(&mut self, index: usize) -> Result<()> {
        let Some(board) = &self.board else {
            return Err(BoggleError::NotRolled);
        };
        let position = match Position::from_index(index) {
            Some(position) if index < board.faces.len() => position,
            _ => {
                return Err(BoggleError::IllegalSelection {
                    index,
                    reason: "not on the board",
                })
            }
        };
        if self.selected.contains(&index) {
            return Err(BoggleError::IllegalSelection {
                index,
                reason: "already used in this word",
            });
        }
        if let Some(previous) = self.selected.last().and_then(|&last| Position::from_index(last)) {
            if !PathValidator::are_adjacent(&previous, &position) {
                return Err(BoggleError::IllegalSelection {
                    index,
                    reason: "not next to the previous die",
                });
            }
        }

        self.selected.push(index);
        self.state = SessionState::Rolled;
        Ok(())
    }

    /// Indices that may be picked next
    pub fn selectable(&self) -> Vec<usize> {
        let Some(board) = &self.board else {
            return Vec::new();
        };
        let candidates = match self.selected.last() {
            Some(&last) => PathValidator::neighbors(last),
            None => (0..NUMBER_OF_DICE).collect(),
        };
        candidates
            .into_iter()
            .filter(|&index| index < board.faces.len() && !self.selected.contains(&index))
            .collect()
    }

    pub fn clear_word(&mut self) {
        self.selected.clear();
        if self.state == SessionState::Validated {
            self.state = SessionState::Rolled;
        }
    }

    /// The word spelled by the selected dice
    pub fn current_word(&self) -> String {
        match &self.board {
            Some(board) => self
                .selected
                .iter()
                .filter_map(|&index| board.faces.get(index))
                .map(String::as_str)
                .collect(),
            None => String::new(),
        }
    }

    /// Check the traced word and file it under correct or incorrect words
    pub fn submit(&mut self) -> Result<bool> {
        if self.board.is_none() {
            return Err(BoggleError::NotRolled);
        }
        if self.selected.is_empty() {
            return Err(BoggleError::EmptyWord);
        }

        let word = self.current_word();
        let is_valid = self.service.validate(&word);
        tracing::debug!("Submitted {:?}, valid: {}", word, is_valid);

        if is_valid {
            self.correct_words.push(word);
        } else {
            self.incorrect_words.push(word);
        }
        self.selected.clear();
        self.state = SessionState::Validated;

        Ok(is_valid)
    }

    pub fn correct_words(&self) -> &[String] {
        &self.correct_words
    }

    pub fn incorrect_words(&self) -> &[String] {
        &self.incorrect_words
    }
}
