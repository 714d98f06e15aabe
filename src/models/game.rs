use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the square board
pub const BOARD_SIZE: usize = 4;

/// Number of dice (and cells) on the board
pub const NUMBER_OF_DICE: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Position of the die at `index` in board order, if it is on the board
    pub fn from_index(index: usize) -> Option<Self> {
        (index < NUMBER_OF_DICE).then(|| Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        })
    }

    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

/// The current face labels of the 16 dice in board order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiceSnapshot {
    pub faces: Vec<String>,
}

impl DiceSnapshot {
    pub fn label(&self, position: Position) -> Option<&str> {
        self.faces.get(position.index()).map(String::as_str)
    }

    /// Faces grouped into board rows
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.faces.chunks(BOARD_SIZE)
    }
}

impl fmt::Display for DiceSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|label| format!("{:<3}", label)).collect();
            write!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}
