//! Session wiring: intents in, frames out.
//!
//! A [`GameSession`] owns the current [`GameState`] and a [`View`]; it
//! is the synchronous event loop of the game. Every dispatched intent
//! runs to completion (transition, then re-render) before the next one
//! is processed.

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::View,
    render::RenderModel,
    tictactoe::GameState,
};

/// A user intent reported by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// A board cell was clicked (0-8)
    CellClick(usize),
    /// A history entry was clicked
    HistoryClick(usize),
}

/// Owns the game state and re-renders through a view after every intent.
///
/// State transitions replace the held state wholesale; a rejected move
/// leaves it untouched and the view simply redraws the same frame.
pub struct GameSession<V: View> {
    state: GameState,
    view: V,
}

impl<V: View> GameSession<V> {
    /// Start a session at the opening position and render the first frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial render fails.
    pub fn new(view: V) -> Result<Self> {
        Self::with_state(GameState::new(), view)
    }

    /// Start a session from an existing state and render it.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial render fails.
    pub fn with_state(state: GameState, mut view: V) -> Result<Self> {
        view.render(&RenderModel::from_state(&state))?;
        Ok(GameSession { state, view })
    }

    /// Apply one intent and re-render.
    ///
    /// Illegal cell clicks are no-ops by contract and out-of-range
    /// history clicks are clamped, so dispatch itself never fails; only
    /// the re-render can.
    ///
    /// # Errors
    ///
    /// Returns an error if the view fails to render the new frame.
    pub fn dispatch(&mut self, intent: Intent) -> Result<()> {
        self.state = match intent {
            Intent::CellClick(cell) => self.state.apply_move(cell),
            Intent::HistoryClick(step) => self.state.jump_to(step),
        };
        self.view.render(&RenderModel::from_state(&self.state))
    }

    /// The state currently displayed
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consume the session, returning the final state and the view
    pub fn into_parts(self) -> (GameState, V) {
        (self.state, self.view)
    }
}
