mod board;
mod candidates;
pub mod filters;
mod snake;

use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};
use log::{debug, info, warn};
use rand::Rng;

pub use self::{board::Board, candidates::Candidates, snake::Snake};
use super::Strategy;
use crate::fightsnake::{models::GameState, types::Direction};

/// Keeps out of harm's way for exactly one turn: never reverses, never
/// leaves the board, never bites itself. Otherwise it wanders at random.
pub struct Wallflower;

/// Runs every filter over the full candidate set.
pub fn safe_moves(snake: &Snake, board: &Board) -> Candidates {
    let head = snake.head();

    let mut candidates = Candidates::ALL;
    if let Some(neck) = snake.neck() {
        candidates = filters::avoid_neck(head, neck, candidates);
    }
    candidates = filters::avoid_walls(head, board, candidates);
    filters::avoid_self(head, snake.backbone(), candidates)
}

/// Picks uniformly among the safe moves. A trapped snake is doomed anyway,
/// so it picks uniformly among all four and lets the engine sort it out.
pub fn select_move<R: Rng + ?Sized>(
    snake: &Snake,
    board: &Board,
    rng: &mut R,
) -> Direction {
    choose(safe_moves(snake, board), rng)
}

fn choose<R: Rng + ?Sized>(candidates: Candidates, rng: &mut R) -> Direction {
    let pool: Vec<Direction> = if candidates.is_empty() {
        Direction::ALL.to_vec()
    } else {
        candidates.iter().collect()
    };
    pool[rng.gen_range(0..pool.len())]
}

impl Wallflower {
    /// # Errors
    ///
    /// See [`Strategy::get_movement`].
    pub fn get_movement_with<R: Rng + ?Sized>(
        &self,
        game_state: &GameState,
        rng: &mut R,
    ) -> Result<Direction> {
        let game_id = &game_state.game.id;
        let you = &game_state.you;

        debug!(
            "~~~ turn {} of game {game_id}, mode {} ~~~",
            game_state.turn, game_state.game.ruleset.name
        );
        debug!("head {}, {} segments", you.head, you.body.len());

        if you.body.front().is_some_and(|first| *first != you.head) {
            warn!(
                "{game_id} reported head {} doesn't match first body segment, \
                 trusting the body",
                you.head
            );
        }

        let snake = Snake::new(you.body.clone())
            .wrap_err_with(|| format!("snake {} in game {game_id}", you.id))?;
        let board = Board::new(game_state.board.width, game_state.board.height)
            .wrap_err_with(|| format!("board of game {game_id}"))?;
        if !board.contains(snake.head()) {
            bail!(
                "head {} of snake {} is off the {}x{} board",
                snake.head(),
                you.id,
                board.width,
                board.height
            );
        }

        let candidates = safe_moves(&snake, &board);
        let movement = choose(candidates, rng);

        info!(
            "{game_id} MOVE {}: {movement} picked from all valid options in \
             {candidates}",
            game_state.turn
        );

        Ok(movement)
    }
}

impl Strategy for Wallflower {
    fn get_movement(&self, game_state: GameState) -> Result<Direction> {
        self.get_movement_with(&game_state, &mut rand::thread_rng())
    }
}
