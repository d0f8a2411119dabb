//! Dungeon system
//!
//! Contains the tile grid, the topology objects stored in it, and the
//! room/corridor generators that fill it.

mod coord;
mod corridor;
mod generation;
mod grid;
mod map;
mod merge;
mod room;
mod topology;

pub use coord::{Coord, Direction, MOORE};
pub use corridor::{trace_path, LEFT_TURN_THRESHOLD, TURN_THRESHOLD};
pub use generation::{generate_rooms_and_corridors, GenerationStats};
pub use grid::Grid;
pub use map::Dungeon;
pub use merge::resolve_contact;
pub use room::{grow_room, MIN_ROOM_TILES};
pub use topology::{
    Connections, Corridor, CorridorId, Entrance, Intersection, IntersectionId, Room, RoomId, Tile,
};
