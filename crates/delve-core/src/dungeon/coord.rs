//! Grid coordinates and directions
//!
//! The y axis points north: `North` is `(0, 1)`.

use core::ops::{Add, AddAssign, Neg, Sub};

use strum::{Display, EnumIter};

/// Integer 2-D grid position or offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Offsets of the 8 surrounding cells.
///
/// Order matters: room growth enqueues candidates in this order.
pub const MOORE: [Coord; 8] = [
    Coord::new(0, 1),
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(-1, 0),
    Coord::new(-1, 1),
    Coord::new(1, -1),
    Coord::new(-1, -1),
    Coord::new(1, 1),
];

impl Coord {
    pub const ZERO: Coord = Coord::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rotate 90° counter-clockwise (multiplication by `i`)
    pub const fn rotate_left(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotate 90° clockwise (multiplication by `-i`)
    pub const fn rotate_right(self) -> Self {
        Self::new(self.y, -self.x)
    }

    pub const fn manhattan(self, other: Coord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// True if `other` shares an edge with this cell
    pub const fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }

    /// The Moore neighbourhood of this cell, in [`MOORE`] order
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        MOORE.into_iter().map(move |offset| self + offset)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<Direction> for Coord {
    type Output = Coord;

    fn add(self, rhs: Direction) -> Coord {
        self + rhs.offset()
    }
}

impl AddAssign<Direction> for Coord {
    fn add_assign(&mut self, rhs: Direction) {
        *self = *self + rhs;
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coord {
    type Output = Coord;

    fn neg(self) -> Coord {
        Coord::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All cardinal directions, clockwise from north
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn offset(self) -> Coord {
        match self {
            Direction::North => Coord::new(0, 1),
            Direction::East => Coord::new(1, 0),
            Direction::South => Coord::new(0, -1),
            Direction::West => Coord::new(-1, 0),
        }
    }

    /// Inverse of [`Direction::offset`]; `None` for anything but a unit axis step
    pub const fn from_offset(offset: Coord) -> Option<Self> {
        match (offset.x, offset.y) {
            (0, 1) => Some(Direction::North),
            (1, 0) => Some(Direction::East),
            (0, -1) => Some(Direction::South),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    pub const fn left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub const fn right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub const fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        self.reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_turns_match_rotation() {
        for dir in Direction::iter() {
            assert_eq!(dir.left().offset(), dir.offset().rotate_left());
            assert_eq!(dir.right().offset(), dir.offset().rotate_right());
            assert_eq!(dir.reverse().offset(), -dir.offset());
            assert_eq!(Direction::from_offset(dir.offset()), Some(dir));
        }
    }

    #[test]
    fn test_left_of_north_is_west() {
        assert_eq!(Direction::North.left(), Direction::West);
        assert_eq!(Direction::North.right(), Direction::East);
        assert_eq!(-Direction::East, Direction::West);
    }

    #[test]
    fn test_turns_cancel() {
        for dir in Direction::ALL {
            assert_eq!(dir.left().right(), dir);
            assert_eq!(dir.left().left(), dir.reverse());
        }
    }

    #[test]
    fn test_manhattan_and_adjacency() {
        let a = Coord::new(2, 3);
        assert_eq!(a.manhattan(Coord::new(5, 1)), 5);
        assert!(a.is_adjacent(Coord::new(2, 4)));
        assert!(!a.is_adjacent(Coord::new(3, 4)));
        assert!(!a.is_adjacent(a));
    }

    #[test]
    fn test_neighbours() {
        let around: Vec<_> = Coord::new(5, 5).neighbours().collect();
        assert_eq!(around.len(), 8);
        assert_eq!(around[0], Coord::new(5, 6));
        assert_eq!(around[7], Coord::new(6, 6));
        assert!(!around.contains(&Coord::new(5, 5)));
        assert!(around.iter().all(|c| (c.x - 5).abs() <= 1 && (c.y - 5).abs() <= 1));
    }

    #[test]
    fn test_from_offset_rejects_diagonals() {
        assert_eq!(Direction::from_offset(Coord::new(1, 1)), None);
        assert_eq!(Direction::from_offset(Coord::ZERO), None);
    }

    #[test]
    fn test_arithmetic() {
        let mut c = Coord::new(1, 1);
        c += Direction::North;
        assert_eq!(c, Coord::new(1, 2));
        assert_eq!(c - Coord::new(1, 1), Direction::North.offset());
        assert_eq!(Coord::from((3, -2)).to_string(), "(3, -2)");
    }
}
