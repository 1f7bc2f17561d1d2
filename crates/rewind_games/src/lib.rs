//! Rewind Games library - terminal tic-tac-toe with time travel
//!
//! # Architecture
//!
//! - **Controller**: owns the single [`GameState`](rewind_tictactoe::GameState)
//!   and applies [`Action`]s to it
//! - **Input**: turns key presses and mouse clicks into actions
//! - **UI**: stateless ratatui rendering, re-run after every action
//! - **Script**: headless runs through the same controller
//!
//! # Example
//!
//! ```
//! use rewind_games::{Action, GameController};
//! use rewind_tictactoe::Position;
//!
//! let mut controller = GameController::new();
//! controller.apply(Action::PlayCell(Position::Center));
//! controller.apply(Action::JumpTo(0));
//! assert_eq!(controller.game().len(), 2);
//! assert_eq!(controller.game().cursor(), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod input;
mod logging;
mod script;
mod tui;
pub mod ui;

pub use config::{AppConfig, ConfigError, Theme, ThemeConfig};
pub use controller::{Action, Direction, Focus, GameController, move_selection};
pub use input::{key_action, mouse_action, translate};
pub use logging::{init_file_logging, init_stderr_logging};
pub use script::{ScriptAction, ScriptError, ScriptSummary, parse_script, run_script};
pub use tui::{run_game, run_tui};
