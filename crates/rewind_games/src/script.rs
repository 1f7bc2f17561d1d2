//! Headless play: apply a list of textual actions and report the result.

use derive_more::{Display, Error};
use derive_new::new;
use rewind_tictactoe::{Board, GameState, GameStatus, Move, Position};
use serde::Serialize;
use std::str::FromStr;
use tracing::{info, instrument, warn};

use crate::controller::{Action, GameController};

/// One scripted step.
///
/// Written as a cell index `0`-`8` or label (`center`, `top-left`), `@N`
/// to jump to history step N, or `replay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptAction {
    /// Play board index 0-8.
    Play(Position),
    /// Jump to a history step.
    Jump(usize),
    /// Start over.
    Replay,
}

impl FromStr for ScriptAction {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("replay") {
            return Ok(Self::Replay);
        }
        if let Some(step) = token.strip_prefix('@') {
            return step
                .parse()
                .map(Self::Jump)
                .map_err(|_| ScriptError::new(format!("Invalid jump target: {:?}", token)));
        }
        Position::from_label_or_number(token)
            .map(Self::Play)
            .ok_or_else(|| {
                ScriptError::new(format!("Invalid cell (expected 0-8 or a label): {:?}", token))
            })
    }
}

/// Script parse or execution error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Final state reported after a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct ScriptSummary {
    /// Displayed step.
    pub cursor: usize,
    /// Number of recorded boards.
    pub history_len: usize,
    /// Status of the displayed board.
    pub status: GameStatus,
    /// Status in words.
    pub status_text: String,
    /// Displayed board.
    pub board: Board,
    /// Moves leading to the displayed board.
    pub moves: Vec<Move>,
}

impl ScriptSummary {
    /// Summarizes the displayed step of `game`.
    pub fn from_game(game: &GameState) -> Self {
        let status = game.status();
        let moves = (1..=game.cursor()).filter_map(|step| game.move_at(step)).collect();
        Self::new(
            game.cursor(),
            game.len(),
            status,
            status.to_string(),
            *game.current(),
            moves,
        )
    }

    /// Board and status as plain text.
    pub fn to_text(&self) -> String {
        format!("{}\n\n{}", self.board.display(), self.status_text)
    }
}

/// Parses every token before running any of them.
pub fn parse_script<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<ScriptAction>, ScriptError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// Runs actions through a fresh controller, the same path the UI uses.
///
/// Ignored plays are not errors. A jump past the recorded history is.
#[instrument(skip(actions), fields(count = actions.len()))]
pub fn run_script(actions: &[ScriptAction]) -> Result<GameController, ScriptError> {
    let mut controller = GameController::new();
    for (index, action) in actions.iter().enumerate() {
        let mapped = match *action {
            ScriptAction::Play(pos) => Action::PlayCell(pos),
            ScriptAction::Replay => Action::Replay,
            ScriptAction::Jump(step) => {
                let len = controller.game().len();
                if step >= len {
                    return Err(ScriptError::new(format!(
                        "Action {}: cannot jump to step {} (history has {} steps)",
                        index + 1,
                        step,
                        len
                    )));
                }
                Action::JumpTo(step)
            }
        };
        if let Some(outcome) = controller.apply(mapped)
            && !outcome.is_placed()
        {
            warn!(action = index + 1, %outcome, "Scripted play had no effect");
        }
    }
    info!(
        cursor = controller.game().cursor(),
        len = controller.game().len(),
        "Script finished"
    );
    Ok(controller)
}
