//! Player identification.
//!
//! Sixteen is strictly two-sided. The tags serialize as the integers `1`
//! (red) and `2` (green), the convention every board payload and move
//! record uses.

use serde::{Deserialize, Serialize};

/// One of the two sides of a match.
///
/// Green opens the game and starts on nodes 1-16; red starts on nodes 22-37.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    /// Tag `1`.
    Red,
    /// Tag `2`. Moves first.
    Green,
}

impl Player {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Green,
            Player::Green => Player::Red,
        }
    }

    /// The integer tag (`1` for red, `2` for green).
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Player::Red => 1,
            Player::Green => 2,
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        player.tag()
    }
}

impl TryFrom<u8> for Player {
    type Error = InvalidPlayer;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Player::Red),
            2 => Ok(Player::Green),
            other => Err(InvalidPlayer(other)),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Green => write!(f, "Green"),
        }
    }
}

/// Error for an integer player tag that is neither `1` nor `2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid player tag {0}: expected 1 (red) or 2 (green)")]
pub struct InvalidPlayer(pub u8);
