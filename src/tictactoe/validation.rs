//! Structural validation of game histories

use super::{
    board::{Board, Cell},
    coords::{Coordinate, coordinate_of},
    game::GameState,
};

impl GameState {
    /// Check that the recorded history could have been produced by the
    /// game's own transitions.
    ///
    /// Holds for every state reachable through [`apply_move`] and
    /// [`jump_to`]; a false result indicates a hand-built or corrupted
    /// history. The rules checked:
    ///
    /// - entry 0 is the empty board with the placeholder coordinate
    /// - the cursor points at an existing entry
    /// - each later entry differs from its predecessor in exactly one
    ///   cell, previously empty, now holding the mark whose turn it was
    /// - the recorded coordinate names the changed cell
    /// - no entry follows a board that already had a winner
    ///
    /// [`apply_move`]: GameState::apply_move
    /// [`jump_to`]: GameState::jump_to
    pub fn is_consistent(&self) -> bool {
        let history = self.history();

        let Some(first) = history.first() else {
            return false;
        };
        if first.board != Board::new() || first.origin != Coordinate::PLACEHOLDER {
            return false;
        }
        if self.step_number() >= history.len() {
            return false;
        }

        for (i, window) in history.windows(2).enumerate() {
            let (prev, next) = (&window[0], &window[1]);

            if prev.board.winner().is_some() {
                return false;
            }
            if !single_legal_change(&prev.board, &next.board, i) {
                return false;
            }

            // The recorded coordinate must name the changed cell
            let Some(changed) = prev.board.find_changed_position(&next.board) else {
                return false;
            };
            if next.origin != coordinate_of(changed) {
                return false;
            }
        }

        true
    }
}

/// Check that `next` extends `prev` by exactly one mark, of the player
/// whose turn it was at step `step`.
fn single_legal_change(prev: &Board, next: &Board, step: usize) -> bool {
    let expected = if step.is_multiple_of(2) {
        Cell::X
    } else {
        Cell::O
    };

    let mut changes = 0;
    for pos in 0..9 {
        let (before, after) = (prev.get(pos), next.get(pos));
        if before == after {
            continue;
        }
        if before != Cell::Empty || after != expected {
            return false;
        }
        changes += 1;
    }

    changes == 1
}
