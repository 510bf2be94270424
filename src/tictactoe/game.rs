//! Game state: append-only snapshot history with a time-travel cursor

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player},
    coords::{Coordinate, coordinate_of},
};

/// A board snapshot plus the coordinate of the move that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub board: Board,
    pub origin: Coordinate,
}

impl HistoryEntry {
    /// The entry every game starts from: an empty board and the
    /// placeholder coordinate, since no move produced it.
    pub fn initial() -> Self {
        HistoryEntry {
            board: Board::new(),
            origin: Coordinate::PLACEHOLDER,
        }
    }
}

/// Game status shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Winner(Player),
    NextPlayer(Player),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {player}"),
            Status::NextPlayer(player) => write!(f, "Next player: {player}"),
        }
    }
}

/// Complete game state: history of snapshots plus the displayed step.
///
/// The history is append-only until a move is played from an earlier
/// step: jumping moves the cursor without deleting anything, and only a
/// subsequent accepted move discards the entries after the cursor. Entry
/// 0 is always the empty board.
///
/// Transitions replace the state wholesale rather than mutating it, so
/// callers hand out snapshots freely and re-render from whichever state
/// they hold.
///
/// # Examples
///
/// ```
/// use noughts::tictactoe::{GameState, Player};
///
/// let state = GameState::new();
/// let state = state.apply_move(4); // X takes the center
/// let state = state.apply_move(0); // O takes a corner
/// assert_eq!(state.step_number(), 2);
/// assert_eq!(state.next_player(), Player::X);
///
/// let back = state.jump_to(1);
/// assert_eq!(back.next_player(), Player::O);
/// assert_eq!(back.history().len(), 3); // jumping deletes nothing
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) step: usize,
}

impl GameState {
    /// Create a game at its starting position
    pub fn new() -> Self {
        GameState {
            history: vec![HistoryEntry::initial()],
            step: 0,
        }
    }

    /// The full recorded history, oldest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the currently displayed snapshot
    pub fn step_number(&self) -> usize {
        self.step
    }

    /// The currently displayed board
    pub fn board(&self) -> &Board {
        &self.history[self.step].board
    }

    /// Whose turn it is at the current step.
    ///
    /// Derived purely from cursor parity (even step means X to move),
    /// never by replaying the history.
    pub fn next_player(&self) -> Player {
        if self.step.is_multiple_of(2) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Winner on the currently displayed board, if any
    pub fn winner(&self) -> Option<Player> {
        self.board().winner()
    }

    /// Status line for the current step
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(player) => Status::Winner(player),
            None => Status::NextPlayer(self.next_player()),
        }
    }

    /// Play a move at the given cell.
    ///
    /// A click on an out-of-range, occupied, or already-won board is a
    /// no-op: the returned state equals the input. An accepted move
    /// truncates the history to the current step, appends the new
    /// snapshot with the mover's mark and coordinate, and advances the
    /// cursor to the new last entry.
    #[must_use = "apply_move returns a new game state; the original is unchanged"]
    pub fn apply_move(&self, cell: usize) -> GameState {
        let current = self.board();
        if cell >= 9 || !current.is_empty_at(cell) || current.winner().is_some() {
            return self.clone();
        }

        let board = current.with_cell(cell, self.next_player().to_cell());
        let mut history = self.history[..=self.step].to_vec();
        history.push(HistoryEntry {
            board,
            origin: coordinate_of(cell),
        });
        let step = history.len() - 1;

        GameState { history, step }
    }

    /// Move the cursor to a recorded step without deleting anything.
    ///
    /// Callers are expected to pass a valid existing index (a history
    /// click can only name a rendered entry); out-of-range steps are
    /// clamped to the last entry.
    #[must_use = "jump_to returns a new game state; the original is unchanged"]
    pub fn jump_to(&self, step: usize) -> GameState {
        let mut next = self.clone();
        next.step = step.min(self.history.len() - 1);
        next
    }

    /// Serialize the full state (history and cursor) as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if encoding fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a state previously produced by [`to_json`].
    ///
    /// The parsed history is not checked against the game rules; pair
    /// with [`is_consistent`] before trusting external input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if the input is not a
    /// valid encoding.
    ///
    /// [`to_json`]: GameState::to_json
    /// [`is_consistent`]: GameState::is_consistent
    pub fn from_json(s: &str) -> crate::Result<GameState> {
        Ok(serde_json::from_str(s)?)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.step_number(), 0);
        assert_eq!(state.next_player(), Player::X);
        assert_eq!(state.status(), Status::NextPlayer(Player::X));
        assert_eq!(state.history()[0].origin, Coordinate::PLACEHOLDER);
    }

    #[test]
    fn test_apply_move_appends_and_advances() {
        let state = GameState::new().apply_move(4);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.step_number(), 1);
        assert_eq!(state.board().get(4), Cell::X);
        assert_eq!(state.next_player(), Player::O);
        assert_eq!(state.history()[1].origin, coordinate_of(4));
    }

    #[test]
    fn test_occupied_cell_is_a_noop() {
        let state = GameState::new().apply_move(4);
        let same = state.apply_move(4);
        assert_eq!(same, state);
    }

    #[test]
    fn test_out_of_range_cell_is_a_noop() {
        let state = GameState::new();
        assert_eq!(state.apply_move(9), state);
        assert_eq!(state.apply_move(usize::MAX), state);
    }

    #[test]
    fn test_finished_game_rejects_moves() {
        // X takes the top row: 0, 1, 2
        let state = GameState::new()
            .apply_move(0)
            .apply_move(3)
            .apply_move(1)
            .apply_move(4)
            .apply_move(2);
        assert_eq!(state.winner(), Some(Player::X));

        let same = state.apply_move(8);
        assert_eq!(same, state);
    }

    #[test]
    fn test_jump_moves_cursor_only() {
        let state = GameState::new().apply_move(0).apply_move(4).apply_move(8);
        let back = state.jump_to(1);

        assert_eq!(back.step_number(), 1);
        assert_eq!(back.history().len(), 4);
        assert_eq!(back.next_player(), Player::O);
        assert_eq!(back.board().get(0), Cell::X);
        assert_eq!(back.board().get(4), Cell::Empty);
    }

    #[test]
    fn test_jump_is_idempotent() {
        let state = GameState::new().apply_move(0).apply_move(4);
        let once = state.jump_to(1);
        let twice = once.jump_to(1);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_jump_clamps_out_of_range_step() {
        let state = GameState::new().apply_move(0);
        let jumped = state.jump_to(99);
        assert_eq!(jumped.step_number(), 1);
    }

    #[test]
    fn test_move_after_jump_truncates_future() {
        let state = GameState::new().apply_move(0).apply_move(4).apply_move(8);
        let rewound = state.jump_to(1);
        let branched = rewound.apply_move(5);

        // Entries 0 and 1 survive; 2 and 3 are discarded.
        assert_eq!(branched.history().len(), 3);
        assert_eq!(branched.step_number(), 2);
        assert_eq!(branched.board().get(0), Cell::X);
        assert_eq!(branched.board().get(5), Cell::O);
        assert_eq!(branched.board().get(4), Cell::Empty);
        assert_eq!(branched.board().get(8), Cell::Empty);
    }

    #[test]
    fn test_turn_parity_after_jump() {
        let state = GameState::new()
            .apply_move(0)
            .apply_move(1)
            .apply_move(2)
            .apply_move(3);
        for k in 0..=4 {
            let jumped = state.jump_to(k);
            let expected = if k % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(jumped.next_player(), expected);
        }
    }

    #[test]
    fn test_json_transcript_roundtrip() {
        let state = GameState::new().apply_move(4).apply_move(0).jump_to(1);
        let parsed = GameState::from_json(&state.to_json().unwrap()).unwrap();

        assert_eq!(parsed, state);
        assert!(parsed.is_consistent());
        assert!(GameState::from_json("not json").is_err());
    }

    #[test]
    fn test_status_strings() {
        let state = GameState::new();
        assert_eq!(state.status().to_string(), "Next player: X");

        let state = state.apply_move(0);
        assert_eq!(state.status().to_string(), "Next player: O");

        // X wins on the 0/4/8 diagonal
        let state = state.apply_move(1).apply_move(4).apply_move(2).apply_move(8);
        assert_eq!(state.status().to_string(), "Winner: X");
    }
}
