//! Game state with a browsable, rewindable board history.
//!
//! [`GameState`] records every board reached since the last replay and a
//! cursor selecting the displayed one. Whose turn it is, and whether the
//! game is won or drawn, are never stored: both are derived from the
//! cursor and the board under it.
//!
//! Playing while the cursor sits in the past discards every later board
//! before appending the new one.

use super::action::{IgnoreReason, Move, PlayOutcome};
use super::rules::{WinningLine, find_winning_line, is_full};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Status of the board under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Next player: {next}")]
    InProgress {
        /// Player to place the next mark.
        next: Player,
    },
    /// A line is complete.
    #[display("Winner: {winner}")]
    Won {
        /// Player occupying the winning line.
        winner: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Board is full with no line.
    #[display("No more moves left")]
    Draw,
}

impl GameStatus {
    /// Whether further marks may be placed from this board.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Label shown for a history step.
pub fn step_label(step: usize) -> String {
    if step == 0 {
        "Game start".to_string()
    } else {
        format!("Move #{}", step)
    }
}

/// Ordered board history plus the cursor into it.
///
/// Deserialization checks that history is non-empty and the cursor
/// points at a recorded board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Boards since the last replay; index 0 is the empty board.
    history: Vec<Board>,
    /// Index of the displayed board.
    cursor: usize,
}

impl GameState {
    /// Creates a new game with only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
        }
    }

    /// All recorded boards.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of recorded boards (always at least 1).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Index of the displayed board.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor is at the newest board.
    pub fn is_at_tip(&self) -> bool {
        self.cursor + 1 == self.history.len()
    }

    /// The displayed board.
    pub fn current(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Player whose mark is placed next, from cursor parity.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.cursor)
    }

    /// Winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        find_winning_line(self.current())
    }

    /// Derived status of the displayed board.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn status(&self) -> GameStatus {
        let board = self.current();
        if let Some(line) = find_winning_line(board) {
            GameStatus::Won {
                winner: line.player(),
                line,
            }
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.to_move(),
            }
        }
    }

    /// The move that produced board `step`, or `None` for step 0 and
    /// out-of-range steps.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        if step == 0 || step >= self.history.len() {
            return None;
        }
        let (before, after) = (&self.history[step - 1], &self.history[step]);
        Position::ALL.into_iter().find_map(|pos| {
            match (before.get(pos), after.get(pos)) {
                (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, pos)),
                _ => None,
            }
        })
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Ignored when the displayed board is already won or the square is
    /// taken. Any boards after the cursor are discarded first.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn play(&mut self, pos: Position) -> PlayOutcome {
        let board = *self.current();

        if let Some(line) = find_winning_line(&board) {
            debug!(winner = %line.player(), "Play ignored, game already won");
            return PlayOutcome::Ignored(IgnoreReason::AlreadyWon(line.player()));
        }

        if !board.is_empty(pos) {
            debug!(position = %pos, "Play ignored, square occupied");
            return PlayOutcome::Ignored(IgnoreReason::SquareOccupied(pos));
        }

        let player = self.to_move();
        if !self.is_at_tip() {
            debug!(
                discarded = self.history.len() - self.cursor - 1,
                "Discarding boards after cursor"
            );
            self.history.truncate(self.cursor + 1);
        }

        self.history.push(board.with_mark(pos, player));
        self.cursor = self.history.len() - 1;

        let action = Move::new(player, pos);
        debug!(%action, cursor = self.cursor, "Mark placed");
        PlayOutcome::Placed(action)
    }

    /// Places the current player's mark at board index `index` (0-8).
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> PlayOutcome {
        match Position::from_index(index) {
            Some(pos) => self.play(pos),
            None => {
                debug!(index, "Play ignored, index off the board");
                PlayOutcome::Ignored(IgnoreReason::OutOfBounds(index))
            }
        }
    }

    /// Moves the cursor to `step` without touching history.
    ///
    /// `step` must be a recorded index. Debug builds assert this; release
    /// builds log and ignore the call.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) {
        debug_assert!(
            step < self.history.len(),
            "jump_to({step}) past history of length {}",
            self.history.len()
        );
        if step >= self.history.len() {
            warn!(step, "Jump past end of history ignored");
            return;
        }
        self.cursor = step;
        debug!(cursor = step, next = %self.to_move(), "Cursor moved");
    }

    /// Resets to a fresh game.
    #[instrument(skip(self))]
    pub fn replay(&mut self) {
        debug!(discarded = self.history.len(), "Replaying from empty board");
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized shape of [`GameState`], before validation.
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Board>,
    cursor: usize,
}

/// A serialized [`GameState`] that breaks its invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidGameState {
    /// No boards were recorded.
    #[display("history must contain at least the starting board")]
    EmptyHistory,
    /// The cursor points past the last board.
    #[display("cursor {cursor} out of range for history of length {len}")]
    CursorOutOfRange {
        /// Stored cursor.
        cursor: usize,
        /// Stored history length.
        len: usize,
    },
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidGameState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let len = raw.history.len();
        if len == 0 {
            return Err(InvalidGameState::EmptyHistory);
        }
        if raw.cursor >= len {
            return Err(InvalidGameState::CursorOutOfRange {
                cursor: raw.cursor,
                len,
            });
        }
        Ok(Self {
            history: raw.history,
            cursor: raw.cursor,
        })
    }
}
