//! Play command - interactive game on the terminal

use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::TextView,
    cli::output,
    session::{GameSession, Intent},
};

#[derive(Debug, Parser)]
pub struct PlayArgs {
    /// Cell clicks to apply before the first prompt (e.g. --moves 4,0)
    #[arg(long, value_delimiter = ',')]
    pub moves: Vec<usize>,
}

/// One line of player input, parsed
enum Command {
    Click(usize),
    Jump(usize),
    History,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    match words.next()? {
        "quit" | "q" | "exit" => Some(Command::Quit),
        "history" => Some(Command::History),
        "jump" => words.next()?.parse().ok().map(Command::Jump),
        word => word.parse().ok().map(Command::Click),
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    output::print_section("noughts - 0-8 places a mark, 'jump N' time travels, 'quit' exits");

    let stdout = io::stdout();
    let mut session = GameSession::new(TextView::new(stdout.lock()))?;

    for cell in args.moves {
        session.dispatch(Intent::CellClick(cell))?;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match parse_command(trimmed) {
            Some(Command::Click(cell)) => session.dispatch(Intent::CellClick(cell))?,
            Some(Command::Jump(step)) => session.dispatch(Intent::HistoryClick(step))?,
            Some(Command::History) => {
                let step = session.state().step_number();
                session.dispatch(Intent::HistoryClick(step))?;
            }
            Some(Command::Quit) => break,
            None => println!("unrecognized input '{trimmed}' (0-8, jump N, history, quit)"),
        }
    }

    Ok(())
}
