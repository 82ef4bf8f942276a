use std::{cmp::Ordering, fmt, slice::Iter};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub enum APIVersion {
    #[serde(rename = "1")]
    One,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn iter() -> Iter<'static, Self> {
        static DIRECTIONS: [Direction; 4] = Direction::ALL;
        DIRECTIONS.iter()
    }

    /// The single cardinal direction that leads from `from` towards `to`.
    ///
    /// The x axis is checked first, so a diagonal offset resolves to Left or
    /// Right. Gives `None` when the coordinates are the same.
    #[must_use]
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        match (to.x.cmp(&from.x), to.y.cmp(&from.y)) {
            (Ordering::Less, _) => Some(Self::Left),
            (Ordering::Greater, _) => Some(Self::Right),
            (Ordering::Equal, Ordering::Less) => Some(Self::Down),
            (Ordering::Equal, Ordering::Greater) => Some(Self::Up),
            (Ordering::Equal, Ordering::Equal) => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coord {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn neighbour(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y + 1),
            Direction::Down => Self::new(self.x, self.y - 1),
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
        }
    }
}

// only the customizations this snake might plausibly wear; see
// https://docs.battlesnake.com/guides/customizations for the full list.
#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum Head {
    Default,
    Beluga,
    Bendr,
    Safe,
    Shades,
    Smile,
    TransRightsScarf,
}

#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum Tail {
    Default,
    BlockBum,
    Bolt,
    Curled,
    RoundBum,
    MysticMoon,
}
