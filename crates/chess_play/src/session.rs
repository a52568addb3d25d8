//! One game session: the controller plus what the player sees around it

use std::io::{self, Write};

use chess_core::{GameController, GameError, PlayedMove, Position, RulesEngine};
use tracing::{debug, warn};

use crate::config::{Mode, PlayConfig};
use crate::render::render_board;

const HELP: &str = "\
Commands:
  <move>        play a move in UCI notation, e.g. e2e4 or e7e8q
  ai            let the AI move for the side to play
  moves         list the legal moves
  board         show the board again
  history       show the moves played so far
  mode hvh|hvai switch between human vs human and human vs AI
  flip          turn the board around
  restart       start a new game
  help          show this text
  quit          leave";

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(String),
    Ai,
    Moves,
    Board,
    History,
    Mode(Mode),
    Flip,
    Restart,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

impl Command {
    /// Anything that is not a known command word is treated as a move, so
    /// the controller gets to explain what is wrong with it.
    pub fn parse(line: &str) -> Command {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Command::Empty;
        };

        match first.to_ascii_lowercase().as_str() {
            "ai" => Command::Ai,
            "moves" => Command::Moves,
            "board" => Command::Board,
            "history" => Command::History,
            "flip" => Command::Flip,
            "restart" | "new" => Command::Restart,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "mode" => match words.next() {
                Some("hvh") | Some("human-vs-human") => Command::Mode(Mode::HumanVsHuman),
                Some("hvai") | Some("human-vs-ai") => Command::Mode(Mode::HumanVsAi),
                _ => Command::Invalid("Usage: mode hvh|hvai".to_string()),
            },
            _ => Command::Move(line.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    game: GameController,
    config: PlayConfig,
    /// FEN to start from, standard position if `None`
    start: Option<String>,
    /// UCI text of every accepted move
    history: Vec<String>,
    last_explanation: Option<String>,
}

impl Session {
    pub fn new(config: PlayConfig, start: Option<String>) -> Result<Self, GameError> {
        let game = new_game(&config, start.as_deref())?;
        Ok(Self {
            game,
            config,
            start,
            history: Vec::new(),
            last_explanation: None,
        })
    }

    pub fn game(&self) -> &GameController {
        &self.game
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn last_explanation(&self) -> Option<&str> {
        self.last_explanation.as_deref()
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn greet(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Interactive chess ({})", self.config.mode)?;
        writeln!(out, "Type a move such as e2e4, or 'help' for commands.")?;
        writeln!(out)?;
        self.show(out)
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        match command {
            Command::Move(text) => self.human_move(&text, out)?,
            Command::Ai => self.ai_turn(out)?,
            Command::Moves => self.show_legal_moves(out)?,
            Command::Board => self.show(out)?,
            Command::History => self.show_history(out)?,
            Command::Mode(mode) => {
                self.config.mode = mode;
                writeln!(out, "Mode: {mode}")?;
            }
            Command::Flip => {
                self.config.flipped = !self.config.flipped;
                self.show(out)?;
            }
            Command::Restart => {
                self.game = new_game(&self.config, self.start.as_deref())
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
                self.history.clear();
                self.last_explanation = None;
                writeln!(out, "New game started.")?;
                self.show(out)?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
            Command::Invalid(message) => writeln!(out, "{message}")?,
        }
        Ok(Flow::Continue)
    }

    fn human_move(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        match self.game.push_move(text) {
            Ok(played) => {
                self.record(played, out)?;
                if self.config.mode == Mode::HumanVsAi
                    && self.config.auto_reply
                    && !self.game.is_game_over()
                {
                    self.ai_turn(out)?;
                    return Ok(());
                }
                self.show(out)
            }
            Err(e) => {
                debug!(input = text, error = %e, "move rejected");
                writeln!(out, "{e}")
            }
        }
    }

    fn ai_turn(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.config.mode != Mode::HumanVsAi {
            return writeln!(out, "Switch to human vs AI mode ('mode hvai') to let the AI move.");
        }
        if let Ok(outcome) = self.game.result() {
            return writeln!(out, "Game over: {outcome}");
        }

        match self.game.ai_move(self.config.ai_level) {
            Ok(played) => {
                write!(out, "AI ({}) plays ", self.config.ai_level)?;
                self.record(played, out)?;
                self.show(out)
            }
            Err(e) => {
                warn!(error = %e, "AI could not move");
                writeln!(out, "{e}")
            }
        }
    }

    fn record(&mut self, played: PlayedMove, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}: {}", played.uci, played.explanation)?;
        self.history.push(played.uci);
        self.last_explanation = Some(played.explanation);
        Ok(())
    }

    /// Board, whose turn it is, the legal moves and the last explanation.
    pub fn show(&self, out: &mut impl Write) -> io::Result<()> {
        let board = self.game.board();
        write!(out, "{}", render_board(board, self.config.flipped))?;

        match self.game.result() {
            Ok(outcome) => writeln!(out, "Game over: {outcome}")?,
            Err(_) => {
                let check = if board.in_check() { ", in check" } else { "" };
                writeln!(
                    out,
                    "{} to move{check} (move {})",
                    board.side_to_move(),
                    self.game.move_number()
                )?;
                if self.config.show_legal_moves {
                    self.show_legal_moves(out)?;
                }
            }
        }

        if let Some(explanation) = &self.last_explanation {
            writeln!(out, "Last move: {explanation}")?;
        }
        Ok(())
    }

    fn show_legal_moves(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Legal moves: {}", self.game.legal_moves().join(", "))
    }

    fn show_history(&self, out: &mut impl Write) -> io::Result<()> {
        if self.history.is_empty() {
            return writeln!(out, "No moves yet.");
        }
        for (i, pair) in self.history.chunks(2).enumerate() {
            writeln!(out, "{}. {}", i + 1, pair.join(" "))?;
        }
        Ok(())
    }
}

fn new_game(config: &PlayConfig, start: Option<&str>) -> Result<GameController, GameError> {
    match start {
        Some(fen) => GameController::from_fen(fen, config.game),
        None => Ok(GameController::with_board(Position::startpos(), config.game)),
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
