use crate::models::{Position, BOARD_SIZE};
use std::collections::HashSet;

pub struct PathValidator;

impl PathValidator {
    /// Validate that positions form a legal path across the board
    pub fn is_valid_path(positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        // Check that all positions are within bounds
        if !positions.iter().all(Position::in_bounds) {
            return false;
        }

        // Check that each position is adjacent to the previous one
        for window in positions.windows(2) {
            if !Self::are_adjacent(&window[0], &window[1]) {
                return false;
            }
        }

        // Check that no die is used twice
        let unique_positions: HashSet<_> = positions.iter().collect();
        unique_positions.len() == positions.len()
    }

    /// Check if two positions are adjacent (including diagonals)
    pub fn are_adjacent(pos1: &Position, pos2: &Position) -> bool {
        let row_diff = pos1.row.abs_diff(pos2.row);
        let col_diff = pos1.col.abs_diff(pos2.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }

    /// Board indices of the dice surrounding the die at `index`
    pub fn neighbors(index: usize) -> Vec<usize> {
        let Some(center) = Position::from_index(index) else {
            return Vec::new();
        };

        let rows = center.row.saturating_sub(1)..=(center.row + 1).min(BOARD_SIZE - 1);
        rows.flat_map(|row| {
            let cols = center.col.saturating_sub(1)..=(center.col + 1).min(BOARD_SIZE - 1);
            cols.map(move |col| Position { row, col })
        })
        .filter(|pos| *pos != center)
        .map(|pos| pos.index())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(cells: &[(usize, usize)]) -> Vec<Position> {
        cells.iter().map(|&(row, col)| Position { row, col }).collect()
    }

    #[test]
    fn test_adjacent_positions() {
        let pos1 = Position { row: 0, col: 0 };
        let pos2 = Position { row: 0, col: 1 };
        let pos3 = Position { row: 1, col: 1 };
        let pos4 = Position { row: 2, col: 2 };

        assert!(PathValidator::are_adjacent(&pos1, &pos2));
        assert!(PathValidator::are_adjacent(&pos2, &pos3));
        assert!(!PathValidator::are_adjacent(&pos1, &pos4));
        assert!(!PathValidator::are_adjacent(&pos1, &pos1));
    }

    #[test]
    fn test_neighbor_counts() {
        // corner, edge, interior
        assert_eq!(PathValidator::neighbors(0), vec![1, 4, 5]);
        assert_eq!(PathValidator::neighbors(1).len(), 5);
        assert_eq!(PathValidator::neighbors(5).len(), 8);
        assert_eq!(PathValidator::neighbors(15), vec![10, 11, 14]);
        assert!(PathValidator::neighbors(16).is_empty());
    }

    #[test]
    fn test_valid_path() {
        assert!(PathValidator::is_valid_path(&path(&[(0, 0), (1, 1), (2, 1), (3, 2)])));
    }

    #[test]
    fn test_invalid_paths() {
        assert!(!PathValidator::is_valid_path(&[]));
        // jump
        assert!(!PathValidator::is_valid_path(&path(&[(0, 0), (0, 2)])));
        // reused die
        assert!(!PathValidator::is_valid_path(&path(&[(0, 0), (0, 1), (0, 0)])));
        // off the board
        assert!(!PathValidator::is_valid_path(&path(&[(3, 3), (3, 4)])));
    }
}
