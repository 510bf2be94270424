//! Tic-tac-toe with snapshot history and time travel
//!
//! This crate provides:
//! - A game state core built on immutable board snapshots: an
//!   append-only history, a time-travel cursor, and parity-derived turns
//! - Win detection over the fixed 3x3 line table
//! - Pure derivation of render data for any presentation layer
//! - A view port with terminal and in-memory adapters
//! - A CLI for interactive play and scripted replays

pub mod adapters;
pub mod cli;
pub mod error;
pub mod ports;
pub mod render;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
pub use render::{MoveLabel, RenderModel, move_label};
pub use session::{GameSession, Intent};
pub use tictactoe::{Board, Cell, Coordinate, GameState, HistoryEntry, Player, Status};
