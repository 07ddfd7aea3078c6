use std::fmt;
use std::str::FromStr;

use super::Point2D;
use crate::error::ParseDirectionError;

/// One of the four grid headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// All headings in clockwise order starting from [`Direction::Right`].
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// The unit step taken when moving in this direction.
    pub fn delta(self) -> Point2D<i64> {
        match self {
            Direction::Right => Point2D { x: 1, y: 0 },
            Direction::Down => Point2D { x: 0, y: 1 },
            Direction::Left => Point2D { x: -1, y: 0 },
            Direction::Up => Point2D { x: 0, y: -1 },
        }
    }

    /// Turn right.
    pub fn clockwise(self) -> Self {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
        }
    }

    /// Turn left.
    pub fn counter_clockwise(self) -> Self {
        match self {
            Direction::Right => Direction::Up,
            Direction::Down => Direction::Right,
            Direction::Left => Direction::Down,
            Direction::Up => Direction::Left,
        }
    }

    pub fn opposite(self) -> Self {
        self.clockwise().clockwise()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "Right",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Up => "Up",
        };
        f.write_str(name)
    }
}

/// Accepts the letter forms `R`, `D`, `L`, `U` and the arrow forms `>`,
/// `v`, `<`, `^`.
impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" | ">" => Ok(Direction::Right),
            "D" | "v" => Ok(Direction::Down),
            "L" | "<" => Ok(Direction::Left),
            "U" | "^" => Ok(Direction::Up),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}
