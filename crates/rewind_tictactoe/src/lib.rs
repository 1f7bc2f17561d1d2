//! Pure tic-tac-toe logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`] snapshots and [`Position`]s
//! - **Rules**: pure win and draw detection over a single board
//! - **History**: [`GameState`], the recorded boards plus a cursor, owning
//!   every mutation rule
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, GameStatus, Player, Position};
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.play_index(cell);
//! }
//! assert!(matches!(game.status(), GameStatus::Won { winner: Player::X, .. }));
//!
//! // Rewind two moves and take a different branch.
//! game.jump_to(3);
//! assert_eq!(game.to_move(), Player::O);
//! game.play(Position::TopRight);
//! assert_eq!(game.len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
mod position;
pub mod rules;
mod types;

pub use action::{IgnoreReason, Move, PlayOutcome};
pub use history::{GameState, GameStatus, InvalidGameState, step_label};
pub use position::Position;
pub use rules::{WinningLine, check_winner, find_winning_line, is_draw, is_full};
pub use types::{Board, Player, Square};
