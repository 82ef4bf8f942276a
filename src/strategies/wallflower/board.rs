use color_eyre::{eyre::eyre, Result};

use crate::fightsnake::types::Coord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub width:  i64,
    pub height: i64,
}

impl Board {
    /// # Errors
    ///
    /// Both dimensions must be at least one cell.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(eyre!(
                "board must be at least 1x1, got {width}x{height}"
            ));
        }
        Ok(Self { width, height })
    }

    pub const fn max_x(&self) -> i64 {
        self.width - 1
    }

    pub const fn max_y(&self) -> i64 {
        self.height - 1
    }

    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width
            && coord.y < self.height
    }
}
