use std::fmt;

use itertools::Itertools;

use crate::fightsnake::types::Direction;

/// The set of moves still considered safe this turn.
///
/// Stored as one bit per direction. Iteration always yields directions in
/// `Direction::ALL` order regardless of the order they were removed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidates(u8);

impl Candidates {
    pub const ALL: Self = Self(0b1111);
    #[cfg(test)]
    pub const NONE: Self = Self(0);

    const fn bit(direction: Direction) -> u8 {
        match direction {
            Direction::Up => 1 << 0,
            Direction::Down => 1 << 1,
            Direction::Left => 1 << 2,
            Direction::Right => 1 << 3,
        }
    }

    /// Removing a direction that is already gone is a no-op.
    #[must_use]
    pub const fn without(self, direction: Direction) -> Self {
        Self(self.0 & !Self::bit(direction))
    }

    #[must_use]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & Self::bit(direction) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::iter().copied().filter(move |d| self.contains(*d))
    }
}

#[cfg(test)]
impl FromIterator<Direction> for Candidates {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self(iter.into_iter().fold(0, |bits, d| bits | Self::bit(d)))
    }
}

impl fmt::Display for Candidates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}
