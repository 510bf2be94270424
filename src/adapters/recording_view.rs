//! In-memory view for testing.
//!
//! Captures every rendered frame so tests can assert on exactly what a
//! real view would have been handed, without any I/O.

use crate::{Result, ports::View, render::RenderModel};

/// View that records frames instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingView {
    frames: Vec<RenderModel>,
}

impl RecordingView {
    /// Create a view with no recorded frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames rendered so far, oldest first.
    pub fn frames(&self) -> &[RenderModel] {
        &self.frames
    }

    /// The most recent frame, if any.
    pub fn last(&self) -> Option<&RenderModel> {
        self.frames.last()
    }

    /// Drop all recorded frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl View for RecordingView {
    fn render(&mut self, model: &RenderModel) -> Result<()> {
        self.frames.push(model.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::GameState;

    #[test]
    fn test_records_frames_in_order() {
        let mut view = RecordingView::new();
        let state = GameState::new();
        view.render(&RenderModel::from_state(&state)).unwrap();
        view.render(&RenderModel::from_state(&state.apply_move(0)))
            .unwrap();

        assert_eq!(view.frames().len(), 2);
        assert_eq!(view.last(), Some(&view.frames()[1]));

        view.clear();
        assert!(view.frames().is_empty());
        assert_eq!(view.last(), None);
    }
}
