//! Topology objects that occupy grid cells: rooms, corridors and intersections

use bitflags::bitflags;

use super::coord::{Coord, Direction};

/// Handle of a room in the dungeon's room list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub(crate) usize);

/// Handle of a corridor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CorridorId(pub(crate) usize);

/// Handle of an intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntersectionId(pub(crate) usize);

impl RoomId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl CorridorId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl IntersectionId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Content of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Room(RoomId),
    Corridor(CorridorId),
    Intersection(IntersectionId),
}

impl Tile {
    pub const fn is_empty(&self) -> bool {
        matches!(self, Tile::Empty)
    }

    /// Display character for debugging dumps
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Room(_) => '.',
            Tile::Corridor(_) => '#',
            Tile::Intersection(_) => '+',
        }
    }
}

/// A corridor end recorded on a room boundary tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entrance {
    /// Room tile the corridor touches
    pub tile: Coord,
    /// Direction from the room tile toward the corridor
    pub direction: Direction,
}

/// Blob-shaped floor region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub(crate) id: RoomId,
    pub(crate) tiles: Vec<Coord>,
    pub(crate) entrances: Vec<Entrance>,
}

impl Room {
    pub(crate) fn new(id: RoomId, tiles: Vec<Coord>) -> Self {
        Self {
            id,
            tiles,
            entrances: Vec::new(),
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Floor tiles in the order they were grown
    pub fn tiles(&self) -> &[Coord] {
        &self.tiles
    }

    /// Entrances in the order corridors reached the room; not deduplicated
    pub fn entrances(&self) -> &[Entrance] {
        &self.entrances
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.tiles.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// A traced line of corridor tiles, possibly bent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corridor {
    pub(crate) id: CorridorId,
    pub(crate) tiles: Vec<Coord>,
}

impl Corridor {
    pub(crate) fn new(id: CorridorId, tiles: Vec<Coord>) -> Self {
        Self { id, tiles }
    }

    pub fn id(&self) -> CorridorId {
        self.id
    }

    /// Tiles in trace order, minus any cells handed over to intersections
    pub fn tiles(&self) -> &[Coord] {
        &self.tiles
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.tiles.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Give up a single cell; returns false if the corridor did not own it
    pub(crate) fn remove_tile(&mut self, c: Coord) -> bool {
        match self.tiles.iter().position(|&t| t == c) {
            Some(index) => {
                self.tiles.remove(index);
                true
            }
            None => false,
        }
    }
}

bitflags! {
    /// Set of cardinal directions an intersection connects toward
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Connections: u8 {
        const NORTH = 0x01;
        const EAST = 0x02;
        const SOUTH = 0x04;
        const WEST = 0x08;
    }
}

impl From<Direction> for Connections {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => Connections::NORTH,
            Direction::East => Connections::EAST,
            Direction::South => Connections::SOUTH,
            Direction::West => Connections::WEST,
        }
    }
}

impl Connections {
    pub fn has(self, dir: Direction) -> bool {
        self.contains(Connections::from(dir))
    }

    /// Member directions, clockwise from north
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.has(d))
    }
}

/// Cell where corridors cross or meet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersection {
    pub(crate) id: IntersectionId,
    pub(crate) position: Coord,
    pub(crate) connections: Connections,
}

impl Intersection {
    pub(crate) fn new(id: IntersectionId, position: Coord) -> Self {
        Self {
            id,
            position,
            connections: Connections::empty(),
        }
    }

    pub fn id(&self) -> IntersectionId {
        self.id
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn connections(&self) -> Connections {
        self.connections
    }

    /// Adding a direction twice is harmless
    pub(crate) fn connect(&mut self, dir: Direction) {
        self.connections.insert(Connections::from(dir));
    }
}
