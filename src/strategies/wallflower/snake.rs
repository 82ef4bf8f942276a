use std::collections::VecDeque;

use color_eyre::{eyre::eyre, Result};

use crate::fightsnake::types::Coord;

/// A snake body, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Coord>,
}

impl Snake {
    /// # Errors
    ///
    /// A snake needs at least a head.
    pub fn new(body: VecDeque<Coord>) -> Result<Self> {
        if body.is_empty() {
            return Err(eyre!("snake has no body segments"));
        }
        Ok(Self { body })
    }

    pub fn head(&self) -> Coord {
        self.body[0]
    }

    /// `None` for a snake that is only a head.
    pub fn neck(&self) -> Option<Coord> {
        self.body.get(1).copied()
    }

    /// Every segment behind the head, tail included.
    pub fn backbone(&self) -> impl Iterator<Item = &Coord> {
        self.body.iter().skip(1)
    }
}
