use serde::{Deserialize, Serialize};

/// Player-visible state of a single tile.
///
/// The adjacent-mine count exists exactly while a tile is a `Number`; it is
/// computed at reveal time and never stored for hidden tiles.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TileStatus {
    Hidden,
    Marked,
    Number(u8),
    Mine,
}

impl TileStatus {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Marked)
    }
}

impl Default for TileStatus {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One cell of the board: whether it holds a mine, and what the player sees.
///
/// `mine` is fixed at board creation and never changes afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub mine: bool,
    pub status: TileStatus,
}
