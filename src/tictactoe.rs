//! Tic-tac-toe game core: snapshot history, time travel, win detection

pub mod board;
pub mod coords;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{Board, Cell, Player};
pub use coords::{Coordinate, coordinate_of};
pub use game::{GameState, HistoryEntry, Status};
pub use lines::{WINNING_LINES, winner_of};
