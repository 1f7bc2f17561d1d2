//! Game controller: the single owner of game state for a session.
//!
//! Every user intent arrives as an [`Action`]. The controller applies it
//! to the [`GameState`] (or to its own focus bookkeeping) and the caller
//! re-renders from scratch afterwards. Rendering code only ever reads.

use derive_getters::Getters;
use rewind_tictactoe::{GameState, PlayOutcome, Position};
use tracing::{debug, info, instrument};

/// Arrow direction for moving the board selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row 2.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move over the board.
    #[default]
    Board,
    /// Arrow keys move over the history list.
    History,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// A user intent, independent of the key or click that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the next mark at a position.
    PlayCell(Position),
    /// Place the next mark at the keyboard selection.
    PlaySelected,
    /// Display history step N.
    JumpTo(usize),
    /// Display the highlighted history row.
    JumpToHighlighted,
    /// Display the previous step.
    StepBack,
    /// Display the next recorded step.
    StepForward,
    /// Start over from the empty board.
    Replay,
    /// Move the board selection.
    MoveSelection(Direction),
    /// Move the history highlight up one row.
    HighlightPrev,
    /// Move the history highlight down one row.
    HighlightNext,
    /// Switch between board and history panes.
    ToggleFocus,
    /// Leave the game.
    Quit,
}

/// Owns the session's [`GameState`] plus pure navigation state.
#[derive(Debug, Clone, Getters)]
pub struct GameController {
    /// The game being played.
    game: GameState,
    /// Cell targeted by `Enter` / `Space`.
    selection: Position,
    /// Pane receiving arrow keys.
    focus: Focus,
    /// History row targeted by `Enter` when the history pane has focus.
    highlighted: usize,
    /// Set once a quit action is applied.
    should_quit: bool,
}

impl GameController {
    /// Creates a controller with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating GameController");
        Self {
            game: GameState::new(),
            selection: Position::Center,
            focus: Focus::Board,
            highlighted: 0,
            should_quit: false,
        }
    }

    /// Applies one action.
    ///
    /// Returns the play outcome when the action was a play request.
    #[instrument(skip(self), fields(cursor = self.game.cursor(), len = self.game.len()))]
    pub fn apply(&mut self, action: Action) -> Option<PlayOutcome> {
        debug!(?action, "Applying action");
        match action {
            Action::PlayCell(pos) => {
                self.selection = pos;
                Some(self.play(pos))
            }
            Action::PlaySelected => Some(self.play(self.selection)),
            Action::JumpTo(step) => {
                self.jump(step);
                None
            }
            Action::JumpToHighlighted => {
                self.jump(self.highlighted);
                None
            }
            Action::StepBack => {
                self.jump(self.game.cursor().saturating_sub(1));
                None
            }
            Action::StepForward => {
                self.jump((self.game.cursor() + 1).min(self.game.len() - 1));
                None
            }
            Action::Replay => {
                info!("Replaying game");
                self.game.replay();
                self.highlighted = 0;
                None
            }
            Action::MoveSelection(direction) => {
                self.selection = move_selection(self.selection, direction);
                None
            }
            Action::HighlightPrev => {
                self.highlighted = self.highlighted.saturating_sub(1);
                None
            }
            Action::HighlightNext => {
                self.highlighted = (self.highlighted + 1).min(self.game.len() - 1);
                None
            }
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                None
            }
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
                None
            }
        }
    }

    fn play(&mut self, pos: Position) -> PlayOutcome {
        let outcome = self.game.play(pos);
        match outcome {
            PlayOutcome::Placed(placed) => {
                info!(%placed, step = self.game.cursor(), "Move played");
                self.highlighted = self.game.cursor();
            }
            PlayOutcome::Ignored(reason) => debug!(%reason, "Click ignored"),
        }
        outcome
    }

    /// History rows are generated from recorded steps only, so an
    /// out-of-range step here is a bug in the caller.
    fn jump(&mut self, step: usize) {
        self.game.jump_to(step);
        self.highlighted = self.game.cursor();
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

/// Moves a board selection one cell, stopping at the edges.
pub fn move_selection(selection: Position, direction: Direction) -> Position {
    let (row, col) = (selection.row(), selection.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(selection)
}
