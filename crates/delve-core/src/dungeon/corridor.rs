//! Corridor tracing
//!
//! A trace runs in two phases from a seed:
//! 1. Seek: walk straight until standing on an occupied cell whose next cell
//!    is free. That cell is the launch contact.
//! 2. Lay: keep walking over free cells, turning now and then, until the path
//!    reaches an occupied cell (or its own earlier tiles).
//!
//! Walking off the grid in either phase abandons the trace without touching
//! the grid. A successful trace commits its tiles and then resolves both
//! contacts through the topology merger.

use hashbrown::HashSet;
use log::{debug, trace};

use super::coord::{Coord, Direction};
use super::map::Dungeon;
use super::merge::resolve_contact;
use super::topology::CorridorId;
use crate::rng::RandomSource;

/// Rolls at or above this value turn the corridor
pub const TURN_THRESHOLD: f32 = 0.93;

/// Turning rolls above this value turn left, the rest turn right
pub const LEFT_TURN_THRESHOLD: f32 = 0.96;

/// Trace a corridor from `start` heading `direction` and commit it.
pub fn trace_path<R: RandomSource>(
    dungeon: &mut Dungeon,
    start: Coord,
    direction: Direction,
    rng: &mut R,
) -> Option<CorridorId> {
    let Some(launch) = seek_launch(dungeon, start, direction) else {
        trace!("no launch point from {start} heading {direction}");
        return None;
    };

    let (tiles, end, end_direction) = lay_tiles(dungeon, launch + direction, direction, rng)?;

    let id = dungeon.add_corridor(tiles);
    resolve_contact(dungeon, launch, direction);
    resolve_contact(dungeon, end, end_direction.reverse());

    debug!(
        "corridor {} laid from {launch} to {end}, {} tiles",
        id.index(),
        dungeon.corridors[id.index()].len()
    );
    Some(id)
}

/// Walk until standing on structure with free space ahead
fn seek_launch(dungeon: &Dungeon, start: Coord, direction: Direction) -> Option<Coord> {
    let grid = &dungeon.grid;
    let mut p = start;
    while grid.exists(p) && !(grid.occupied(p) && !grid.occupied(p + direction)) {
        p += direction;
    }
    grid.exists(p).then_some(p)
}

/// Lay tiles from `p` until hitting something.
///
/// Returns the tiles, the occupied cell the path ended on and the heading at
/// that moment, or `None` if the path left the grid.
fn lay_tiles<R: RandomSource>(
    dungeon: &Dungeon,
    mut p: Coord,
    mut direction: Direction,
    rng: &mut R,
) -> Option<(Vec<Coord>, Coord, Direction)> {
    let grid = &dungeon.grid;
    let mut tiles = Vec::new();
    let mut laid = HashSet::new();

    while grid.exists(p) && !grid.occupied(p) && !laid.contains(&p) {
        tiles.push(p);
        laid.insert(p);
        p += direction;

        let roll = rng.unit();
        if roll >= TURN_THRESHOLD {
            direction = if roll > LEFT_TURN_THRESHOLD {
                direction.left()
            } else {
                direction.right()
            };
        }
    }

    if !grid.exists(p) {
        trace!("corridor walked off the grid at {p} after {} tiles", tiles.len());
        return None;
    }
    Some((tiles, p, direction))
}
