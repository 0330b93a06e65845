use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::ops::{Add, Sub};

#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vec2D {
    pub x: i16,
    pub y: i16,
}

impl Vec2D {
    pub fn new(x: i16, y: i16) -> Vec2D {
        Vec2D { x, y }
    }

    pub fn apply(self, d: Direction) -> Vec2D {
        self + d.into()
    }

    pub fn manhattan(&self) -> u64 {
        self.x.unsigned_abs() as u64 + self.y.unsigned_abs() as u64
    }

    /// Manhattan distance between two points.
    pub fn distance(self, other: Vec2D) -> u64 {
        (self - other).manhattan()
    }

    pub fn within(self, width: usize, height: usize) -> bool {
        0 <= self.x && self.x < width as _ && 0 <= self.y && self.y < height as _
    }
}

pub fn v2(x: i16, y: i16) -> Vec2D {
    Vec2D::new(x, y)
}

impl From<Direction> for Vec2D {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Up => Vec2D::new(0, 1),
            Direction::Right => Vec2D::new(1, 0),
            Direction::Down => Vec2D::new(0, -1),
            Direction::Left => Vec2D::new(-1, 0),
            Direction::Stop => Vec2D::new(0, 0),
        }
    }
}

impl Add for Vec2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// A move of pacman or a ghost.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    Stop,
}

impl Direction {
    /// The four cardinal directions, without `Stop`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ]
        .iter()
        .copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn distance() {
        assert_eq!(v2(1, 3).distance(v2(4, 1)), 5);
        assert_eq!(v2(2, 2).distance(v2(2, 2)), 0);
        assert_eq!(v2(0, 0).apply(Direction::Stop), v2(0, 0));
        assert_eq!(v2(0, 0).apply(Direction::Left), v2(-1, 0));
    }

    #[test]
    fn direction_json() {
        assert_eq!(serde_json::to_string(&Direction::Stop).unwrap(), r#""stop""#);
        let d: Direction = serde_json::from_str(r#""left""#).unwrap();
        assert_eq!(d, Direction::Left);
    }
}
