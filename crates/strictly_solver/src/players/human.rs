//! Human player reading moves from a line-based terminal.

use super::Player;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_tictactoe::{Board, Move};
use tracing::debug;

/// Human player typing moves as `row col` (0-2 each) or a cell number 1-9.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

/// Parses `row col`, `row,col` or a single cell number 1-9.
fn parse_move(text: &str) -> Option<Move> {
    let parts: Vec<usize> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    match parts.as_slice() {
        [number] => Move::from_cell_number(*number),
        [row, col] => Some(Move::new(*row, *col)),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, board: &Board) -> Result<Move> {
        loop {
            write!(self.output, "{} ({}) > ", self.name, board.next_player())?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed");
            }

            let line = line.trim();
            if matches!(line, "q" | "quit") {
                anyhow::bail!("Game abandoned");
            }

            match parse_move(line) {
                Some(action) if board.is_empty(action) => return Ok(action),
                Some(action) => {
                    debug!(%action, "Rejected unavailable square");
                    writeln!(self.output, "Square {} is not available", action)?;
                }
                None => {
                    writeln!(self.output, "Enter `row col` (0-2) or a cell number (1-9)")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
