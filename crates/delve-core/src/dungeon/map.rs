//! The dungeon: grid plus the topology objects it references
//!
//! Rooms, corridors and intersections live in per-type lists and grid cells
//! refer to them by handle. All mutation goes through `&mut Dungeon`, so one
//! generation step always owns the whole grid.

use super::coord::{Coord, Direction};
use super::corridor::trace_path;
use super::grid::Grid;
use super::room::grow_room;
use super::topology::{
    Corridor, CorridorId, Intersection, IntersectionId, Room, RoomId, Tile,
};
use crate::rng::RandomSource;

#[derive(Debug, Clone)]
pub struct Dungeon {
    pub(crate) grid: Grid,
    pub(crate) rooms: Vec<Room>,
    pub(crate) corridors: Vec<Corridor>,
    pub(crate) intersections: Vec<Intersection>,
}

impl Dungeon {
    /// Create an empty dungeon of the given size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid: Grid::new(width, height),
            rooms: Vec::new(),
            corridors: Vec::new(),
            intersections: Vec::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Grow a blob room from `seed` with at most `target_size` tiles.
    ///
    /// Returns `None` if the seed is not buildable or the room came out too small.
    pub fn generate_room<R: RandomSource>(
        &mut self,
        seed: Coord,
        target_size: i32,
        rng: &mut R,
    ) -> Option<&Room> {
        let id = grow_room(self, seed, target_size, rng)?;
        self.room(id)
    }

    /// Trace a corridor from `seed` heading `direction`.
    ///
    /// Returns `None`, leaving the grid untouched, if the trace walks off the grid.
    pub fn generate_path<R: RandomSource>(
        &mut self,
        seed: Coord,
        direction: Direction,
        rng: &mut R,
    ) -> Option<&Corridor> {
        let id = trace_path(self, seed, direction, rng)?;
        self.corridor(id)
    }

    pub fn tile_at(&self, c: Coord) -> Tile {
        self.grid.get(c)
    }

    /// Rooms in the order they were generated
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    pub fn intersections(&self) -> &[Intersection] {
        &self.intersections
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn corridor(&self, id: CorridorId) -> Option<&Corridor> {
        self.corridors.get(id.0)
    }

    pub fn intersection(&self, id: IntersectionId) -> Option<&Intersection> {
        self.intersections.get(id.0)
    }

    /// Commit room tiles to the grid and append the room to the room list
    pub(crate) fn add_room(&mut self, tiles: Vec<Coord>) -> RoomId {
        let id = RoomId(self.rooms.len());
        for &c in &tiles {
            self.grid.set(c, Tile::Room(id));
        }
        self.rooms.push(Room::new(id, tiles));
        id
    }

    pub(crate) fn add_corridor(&mut self, tiles: Vec<Coord>) -> CorridorId {
        let id = CorridorId(self.corridors.len());
        for &c in &tiles {
            self.grid.set(c, Tile::Corridor(id));
        }
        self.corridors.push(Corridor::new(id, tiles));
        id
    }

    /// Take over `position` for a new intersection, returning the previous claim
    pub(crate) fn add_intersection(&mut self, position: Coord) -> (IntersectionId, Tile) {
        let id = IntersectionId(self.intersections.len());
        let previous = self.grid.replace(position, Tile::Intersection(id));
        self.intersections.push(Intersection::new(id, position));
        (id, previous)
    }

    /// Render the grid as text, highest row first
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(((self.width() + 1) * self.height()) as usize);
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                out.push(self.tile_at(Coord::new(x, y)).symbol());
            }
            out.push('\n');
        }
        out
    }
}
