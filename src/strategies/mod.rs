pub mod wallflower;

use color_eyre::Result;
pub use wallflower::Wallflower;

use crate::fightsnake::{models::GameState, types::Direction};

pub trait Strategy {
    /// # Errors
    ///
    /// Fails when the game state can't be turned into a snake and a board,
    /// for example an empty body or a zero-sized board.
    fn get_movement(&self, game_state: GameState) -> Result<Direction>;
}
