//! Winning line analysis for the 3x3 board

use super::board::{Cell, Player};

/// Winning line indices on the 3x3 board
///
/// Enumeration order is fixed (rows, then columns, then diagonals) so
/// that winner lookup is deterministic. A legal board can never contain
/// two different winners, but the scan order is part of the contract.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Return the mark of the first uniform non-empty winning line, if any
pub fn winner_of(cells: &[Cell; 9]) -> Option<Player> {
    for line in &WINNING_LINES {
        let [a, b, c] = *line;
        if cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c] {
            return cells[a].to_player();
        }
    }
    None
}

/// Check if a player has won by having three in a row
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}
