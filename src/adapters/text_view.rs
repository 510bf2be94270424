//! Plain-text view for terminals.
//!
//! Draws the board grid, the status line, and the move list to any
//! `io::Write`. This is the adapter behind the CLI; tests point it at a
//! byte buffer instead of stdout.

use std::io::Write;

use crate::{
    Error, Result,
    ports::View,
    render::RenderModel,
    tictactoe::Cell,
};

/// Terminal renderer writing one frame per render call.
pub struct TextView<W: Write> {
    out: W,
}

impl<W: Write> TextView<W> {
    pub fn new(out: W) -> Self {
        TextView { out }
    }

    /// Consume the view, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, model: &RenderModel) -> std::io::Result<()> {
        writeln!(self.out)?;
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| cell_glyph(model.cells[row * 3 + col]).to_string())
                .collect();
            writeln!(self.out, " {}", cells.join(" | "))?;
            if row < 2 {
                writeln!(self.out, "---+---+---")?;
            }
        }
        writeln!(self.out)?;
        writeln!(self.out, "{}", model.status)?;
        writeln!(self.out)?;
        for label in &model.moves {
            let marker = if label.current { '>' } else { ' ' };
            writeln!(
                self.out,
                "{marker} {}. {} {}",
                label.step, label.coordinate, label.text
            )?;
        }
        self.out.flush()
    }
}

fn cell_glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::X => 'X',
        Cell::O => 'O',
    }
}

impl<W: Write> View for TextView<W> {
    fn render(&mut self, model: &RenderModel) -> Result<()> {
        self.write_frame(model).map_err(|source| Error::Io {
            operation: "render frame to text view".to_string(),
            source,
        })
    }
}
