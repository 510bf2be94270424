//! Replay command - apply a scripted click sequence and print the result

use std::io;

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::TextView,
    cli::output,
    ports::View,
    render::RenderModel,
    tictactoe::GameState,
};

#[derive(Debug, Parser)]
pub struct ReplayArgs {
    /// Cell clicks to apply in order (0-8); illegal clicks are ignored
    #[arg(required = true)]
    pub positions: Vec<usize>,

    /// Jump to this history step after the clicks
    #[arg(long)]
    pub jump: Option<usize>,

    /// Print the final state as JSON instead of a text frame
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ReplayArgs) -> Result<()> {
    let mut state = GameState::new();
    let mut accepted = 0;
    for &cell in &args.positions {
        let next = state.apply_move(cell);
        if next != state {
            accepted += 1;
        }
        state = next;
    }

    if let Some(step) = args.jump {
        state = state.jump_to(step);
    }

    if args.json {
        println!("{}", state.to_json()?);
    } else {
        output::print_kv("clicks", &args.positions.len().to_string());
        output::print_kv("accepted", &accepted.to_string());
        let mut view = TextView::new(io::stdout().lock());
        view.render(&RenderModel::from_state(&state))?;
    }

    Ok(())
}
