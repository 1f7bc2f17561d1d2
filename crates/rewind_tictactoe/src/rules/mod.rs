//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a single board snapshot. Rules are kept
//! apart from history so they can be applied to any recorded step.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, check_winner, find_winning_line};
