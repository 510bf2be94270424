//! Pure derivation of render data from game state.
//!
//! Views never inspect [`GameState`] directly; they are handed a
//! [`RenderModel`] holding everything one frame needs. The derivation is
//! a pure function, so the same state always produces the same frame.

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Cell, Coordinate, GameState, Status};

/// Label for one entry in the move list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLabel {
    /// History index this label refers to
    pub step: usize,
    /// Coordinate of the move that produced the entry (placeholder for entry 0)
    pub coordinate: Coordinate,
    /// Display text: "Game Start" or "Move #N"
    pub text: String,
    /// Whether this entry is the one currently displayed
    pub current: bool,
}

/// Everything a view needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderModel {
    /// The 9 cells of the currently displayed board
    pub cells: [Cell; 9],
    /// Status line for the current step
    pub status: Status,
    /// Ordered labels for every history entry
    pub moves: Vec<MoveLabel>,
}

/// Label text for a history entry, derived from its index alone
pub fn move_label(step: usize) -> String {
    if step == 0 {
        "Game Start".to_string()
    } else {
        format!("Move #{step}")
    }
}

impl RenderModel {
    /// Derive the frame for a state's current step
    pub fn from_state(state: &GameState) -> Self {
        let moves = state
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveLabel {
                step,
                coordinate: entry.origin,
                text: move_label(step),
                current: step == state.step_number(),
            })
            .collect();

        RenderModel {
            cells: state.board().cells,
            status: state.status(),
            moves,
        }
    }
}

impl From<&GameState> for RenderModel {
    fn from(state: &GameState) -> Self {
        Self::from_state(state)
    }
}
