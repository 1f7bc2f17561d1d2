//! Move and play-outcome types.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.player, self.position.label())
    }
}

/// Why a play request left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The displayed board already has a winning line.
    #[display("game already won by {}", _0)]
    AlreadyWon(Player),

    /// The square is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The cell index is outside 0-8.
    #[display("cell index {} is off the board", _0)]
    OutOfBounds(usize),
}

/// Result of a play request.
///
/// Ignored requests are normal gameplay (a click on a taken square),
/// not errors; the state is guaranteed untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayOutcome {
    /// A mark was placed and the cursor moved to the new tip.
    #[display("placed {}", _0)]
    Placed(Move),

    /// Nothing changed.
    #[display("ignored: {}", _0)]
    Ignored(IgnoreReason),
}

impl PlayOutcome {
    /// Whether the request changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed(_))
    }
}
