//! Line-oriented front end: reads commands and coordinate moves, prints boards and results.
//!
//! Generic over its input and output so tests can drive it from memory.

use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::chess::moves::Move;
use crate::chess::piece::Color;
use crate::config::SessionConfig;
use crate::error::ChessError;
use crate::game::Game;
use crate::notation::{move_name, parse_move};
use crate::rules::outcome::Outcome;

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(Outcome),
    Quit,
    EndOfInput,
}

const HELP: &str = "Help: Enter moves like e2e4 or e7-e8q.\n\
                    Type 'moves' to list legal moves, 'board' to redraw the board, 'quit' to exit.";

pub struct Session<R, W> {
    game: Game,
    config: SessionConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, config: SessionConfig, input: R, output: W) -> Self {
        Self {
            game,
            config,
            input,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.output)
    }

    pub fn run(&mut self) -> io::Result<SessionEnd> {
        if self.config.banner {
            writeln!(self.output, "CLI Chess - simple, local 1v1.")?;
            writeln!(
                self.output,
                "Rules: no castling, no en-passant. Moves like e2e4 or e7-e8q for promotion."
            )?;
            writeln!(self.output, "Commands: 'moves', 'board', 'help', 'quit'\n")?;
        }
        if self.config.pause_at_start {
            writeln!(self.output, "Press Enter to start...")?;
            if self.read_line()?.is_none() {
                return self.finish(SessionEnd::EndOfInput);
            }
        }
        self.print_board()?;

        let end = self.play_loop()?;
        self.finish(end)
    }

    fn play_loop(&mut self) -> io::Result<SessionEnd> {
        loop {
            let side = self.game.side_to_move();
            let legal = self.game.legal_moves(side);
            if legal.is_empty() {
                return self.announce(side);
            }

            write!(
                self.output,
                "{} to move. (type a move, 'moves', 'board', or 'help')\n> ",
                side.name()
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(SessionEnd::EndOfInput);
            };
            let cmd = line.trim().to_ascii_lowercase();
            match cmd.as_str() {
                "" => continue,
                "quit" | "exit" => return Ok(SessionEnd::Quit),
                "help" => writeln!(self.output, "{HELP}")?,
                "board" => self.print_board()?,
                "moves" => self.print_moves(&legal)?,
                _ => self.try_move(&cmd)?,
            }
        }
    }

    fn try_move(&mut self, cmd: &str) -> io::Result<()> {
        let request = match parse_move(cmd) {
            Ok(mv) => mv,
            Err(e) => {
                warn!("{e}");
                return writeln!(
                    self.output,
                    "Invalid format. Use e2e4 or e7-e8q, or type 'help'."
                );
            }
        };
        match self.game.play(request) {
            Ok(_) => {
                if self.config.show_board_after_move {
                    self.print_board()?;
                }
                Ok(())
            }
            Err(e @ ChessError::IllegalMove { .. }) => {
                warn!("{e}");
                writeln!(self.output, "Illegal move. Type 'moves' to see legal moves.")
            }
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e)),
        }
    }

    fn announce(&mut self, side: Color) -> io::Result<SessionEnd> {
        let outcome = if self.game.is_in_check(side) {
            writeln!(self.output, "{} is checkmated.", side.name())?;
            Outcome::Checkmate { loser: side }
        } else {
            writeln!(self.output, "Stalemate.")?;
            Outcome::Stalemate
        };
        Ok(SessionEnd::Finished(outcome))
    }

    fn finish(&mut self, end: SessionEnd) -> io::Result<SessionEnd> {
        info!("session ended: {end:?}");
        writeln!(self.output, "Game over.")?;
        self.output.flush()?;
        Ok(end)
    }

    fn print_board(&mut self) -> io::Result<()> {
        write!(self.output, "{}", self.game.position())
    }

    fn print_moves(&mut self, legal: &[Move]) -> io::Result<()> {
        let names: Vec<String> = legal.iter().map(move_name).collect();
        writeln!(
            self.output,
            "Legal moves ({}): {}",
            legal.len(),
            names.join(", ")
        )
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}
