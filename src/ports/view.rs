//! View port - abstraction over the presentation layer
//!
//! The game core never draws anything itself. It hands a fully derived
//! [`RenderModel`] to whatever implements this port and moves on.

use crate::{Result, render::RenderModel};

/// Port for rendering one frame of the game.
///
/// The session calls [`render`] after every dispatched intent, including
/// rejected ones (the model is then identical to the previous frame).
/// Implementations decide what a frame looks like: a terminal grid, a
/// test recording, a GUI repaint.
///
/// # Errors
///
/// Rendering is the only fallible step in the intent loop; an
/// implementation that cannot produce its frame (for example, a closed
/// output stream) reports it here and the session propagates it.
///
/// [`render`]: View::render
///
/// # Examples
///
/// ```
/// use noughts::{ports::View, render::RenderModel};
///
/// struct CountingView {
///     frames: usize,
/// }
///
/// impl View for CountingView {
///     fn render(&mut self, _model: &RenderModel) -> noughts::Result<()> {
///         self.frames += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait View {
    /// Draw one frame from the derived render data.
    fn render(&mut self, model: &RenderModel) -> Result<()>;
}
